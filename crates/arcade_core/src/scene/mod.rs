//! Scene objects
//!
//! Transforms and the game objects that own them.

pub mod transform;
pub mod game_object;

pub use transform::Transform;
pub use game_object::GameObject;
