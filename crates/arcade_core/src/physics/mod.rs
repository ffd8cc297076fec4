//! Physics module for collision detection
//!
//! Only overlap queries live here: objects have no velocity or mass, and a
//! hit is resolved by gameplay code rather than by a physical response.

pub mod collision;

pub use collision::overlaps;
