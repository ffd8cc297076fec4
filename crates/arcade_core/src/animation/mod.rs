//! Animation module
//!
//! Per-frame interpolation of object state. Currently only heading changes
//! are animated; movement and growth apply immediately.

pub mod rotation;

pub use rotation::{target_heading, AnimationState, RotationAnimator, DEFAULT_TOTAL_STEPS};
