//! Headless play: a logging render backend and a scripted pilot
//!
//! Lets the game run without a window. The pilot produces the same input
//! events a player would: it points the cursor at the next pickup, waits
//! for the turn to finish, then holds the forward key.

use arcade_core::foundation::math::{Mat4, Vec2};
use arcade_core::game::{Game, HudState};
use arcade_core::input::{InputEvent, KeyAction, KeyCode, Viewport};
use arcade_core::render::{RenderBackend, RenderResource, RenderResources, RenderResult, ResourceKey};

/// Render backend that logs draw calls instead of issuing them
#[derive(Debug, Default)]
pub struct LogBackend {
    draw_calls: u64,
}

impl LogBackend {
    /// Total draw calls received
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

impl RenderBackend for LogBackend {
    fn draw(&mut self, transform: &Mat4, key: ResourceKey, resource: &RenderResource) -> RenderResult<()> {
        self.draw_calls += 1;
        log::trace!(
            "draw {:?} ({}, {} verts) at ({:.3}, {:.3})",
            key,
            resource.texture.path,
            resource.geometry.vertex_count(),
            transform[(0, 3)],
            transform[(1, 3)]
        );
        Ok(())
    }
}

/// Map a world position back to window pixels
fn to_pixels(viewport: Viewport, world: Vec2) -> (f64, f64) {
    let x = (world.x / 2.0 + 0.5) * viewport.width;
    let y = (-world.y / 2.0 + 0.5) * viewport.height;
    (f64::from(x), f64::from(y))
}

/// Scripted player that flies to each remaining pickup in order
#[derive(Debug, Default)]
pub struct Autopilot {
    target: Option<usize>,
}

impl Autopilot {
    /// Create a pilot with no target yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the next frame
    pub fn next_events(&mut self, game: &Game) -> Vec<InputEvent> {
        if game.session().is_game_over() {
            return Vec::new();
        }

        let Some(index) = game.pickups().iter().position(|p| p.is_active()) else {
            return Vec::new();
        };

        let mut events = Vec::new();
        if self.target != Some(index) {
            self.target = Some(index);
            let (x, y) = to_pixels(game.viewport(), game.pickups()[index].position());
            log::debug!("Autopilot heading for pickup {index}");
            events.push(InputEvent::PointerMoved { x, y });
        } else if !game.animator().is_animating() {
            events.push(InputEvent::Key {
                key: KeyCode::W,
                action: KeyAction::Repeat,
            });
        }
        events
    }
}

/// Run frames until the game is won or `max_frames` is reached
///
/// Returns the final overlay state and the number of frames run.
pub fn run(
    game: &mut Game,
    pilot: &mut Autopilot,
    backend: &mut LogBackend,
    resources: &RenderResources,
    max_frames: u32,
) -> RenderResult<(HudState, u32)> {
    let mut hud = game.hud();
    for frame in 1..=max_frames {
        let events = pilot.next_events(game);
        let before = hud.score;
        hud = game.frame(&events, backend, resources)?;

        if hud.score != before {
            log::info!("Frame {frame}: score {}", hud.score);
        }
        if hud.is_game_over {
            return Ok((hud, frame));
        }
    }
    log::warn!("Stopped after {max_frames} frames without finishing");
    Ok((hud, max_frames))
}
