//! Values exposed to the overlay each frame

/// Read-only score display state
///
/// The core never formats or draws text; the overlay collaborator decides
/// how to present these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudState {
    /// Pickups collected
    pub score: u32,
    /// Whether the game has been won
    pub is_game_over: bool,
}
