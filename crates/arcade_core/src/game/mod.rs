//! Gameplay layer
//!
//! Session rules, the overlay snapshot and the per-frame driver that ties
//! input, collision, animation and rendering together.

pub mod frame;
pub mod hud;
pub mod session;

#[cfg(test)]
mod tests;

pub use frame::{spawn_pickups, Game};
pub use hud::HudState;
pub use session::GameSession;
