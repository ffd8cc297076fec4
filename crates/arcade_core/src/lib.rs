//! # Arcade Core
//!
//! Gameplay core for a small 2D arcade game: a ship turns to face the cursor,
//! moves along its heading and collects pickups. Collecting all of them wins.
//!
//! Window creation, shader and texture handling and text overlays live
//! outside this crate. The core hands finished transforms to a
//! [`render::RenderBackend`] and exposes the score through [`game::HudState`].
//!
//! ## Quick Start
//!
//! ```rust
//! use arcade_core::prelude::*;
//!
//! let config = SessionConfig::default();
//! let mut resources = RenderResources::new();
//! let ship = resources.insert(RenderResource::textured_quad("textures/ship.png"));
//! let diamond = resources.insert(RenderResource::textured_quad("textures/diamond.png"));
//!
//! let mut game = Game::new(&config, Viewport::default(), ship, diamond);
//! let mut backend = DrawQueue::new();
//!
//! let events = [InputEvent::PointerMoved { x: 600.0, y: 200.0 }];
//! let hud = game.frame(&events, &mut backend, &resources)?;
//! assert_eq!(hud.score, 0);
//! # Ok::<(), RenderError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod animation;
pub mod physics;
pub mod input;
pub mod render;
pub mod game;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{AnimationState, RotationAnimator},
        config::{Config, ConfigError, SessionConfig},
        foundation::math::{Mat4, Vec2},
        game::{Game, GameSession, HudState},
        input::{GameCommand, InputEvent, KeyAction, KeyCode, Viewport},
        physics::overlaps,
        render::{DrawQueue, RenderBackend, RenderError, RenderResource, RenderResources, ResourceKey},
        scene::{GameObject, Transform},
    };
}
