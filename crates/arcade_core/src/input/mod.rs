//! Input events and pointer conversion
//!
//! The windowing layer pushes plain [`InputEvent`] values; the frame driver
//! drains them synchronously at the start of each frame. Pointer positions
//! arrive in window pixels and are mapped to world coordinates by a
//! [`Viewport`].

use crate::foundation::math::Vec2;

/// Key codes the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key
    W,
    /// S key
    S,
    /// R key
    R,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Escape key
    Escape,
}

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Key went down
    Press,
    /// Key held long enough to auto-repeat
    Repeat,
    /// Key went up
    Release,
}

/// Raw input delivered by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Keyboard event
    Key {
        /// The key
        key: KeyCode,
        /// Press, repeat or release
        action: KeyAction,
    },

    /// Cursor moved
    PointerMoved {
        /// X coordinate in window pixels, origin at the left edge
        x: f64,
        /// Y coordinate in window pixels, origin at the top edge
        y: f64,
    },
}

/// Gameplay command decoded from a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move along the ship's heading
    MoveForward,
    /// Move against the ship's heading
    MoveBackward,
    /// Reset the whole session
    Restart,
}

impl GameCommand {
    /// Map a key event to a command
    ///
    /// Movement fires on press and on auto-repeat; restart fires on press only.
    pub fn from_key(key: KeyCode, action: KeyAction) -> Option<Self> {
        let held = matches!(action, KeyAction::Press | KeyAction::Repeat);
        match key {
            KeyCode::R if action == KeyAction::Press => Some(Self::Restart),
            KeyCode::W | KeyCode::Up if held => Some(Self::MoveForward),
            KeyCode::S | KeyCode::Down if held => Some(Self::MoveBackward),
            _ => None,
        }
    }
}

/// Window dimensions used for pixel to world conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 800.0)
    }
}

impl Viewport {
    /// Create a viewport; non-positive sizes fall back to one pixel
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: if width > 0.0 { width } else { 1.0 },
            height: if height > 0.0 { height } else { 1.0 },
        }
    }

    /// Convert a window pixel position to world coordinates
    ///
    /// Normalises by the window size, recentres to `[-1, 1]` and flips Y so
    /// that up is positive.
    pub fn to_world(&self, x: f64, y: f64) -> Vec2 {
        let nx = x as f32 / self.width - 0.5;
        let ny = y as f32 / self.height - 0.5;
        Vec2::new(nx * 2.0, -ny * 2.0)
    }
}
