//! Frame-stepped heading animation
//!
//! When the pointer moves, the ship does not snap to face it. Instead the
//! angular distance from the current baseline heading is split into a fixed
//! number of equal steps and one step is applied per frame.
//!
//! Headings written to the transform are negated because positive `theta`
//! turns the quad clockwise while target angles are measured
//! counter-clockwise. The baseline (`prev_theta`) is kept in the
//! counter-clockwise sense.

use crate::foundation::math::constants::{HALF_PI, PI, TAU};
use crate::foundation::math::{angle, Vec2};
use crate::scene::Transform;

/// Steps used to reach a new heading unless configured otherwise
pub const DEFAULT_TOTAL_STEPS: u32 = 10;

/// Animator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// No rotation in progress
    Idle,
    /// Turning toward a target, one step per frame
    Animating,
}

/// Drives a transform's heading toward a target over a fixed number of frames
#[derive(Debug, Clone, PartialEq)]
pub struct RotationAnimator {
    animating: bool,
    angle_per_step: f32,
    steps_elapsed: u32,
    total_steps: u32,
    last_pointer: Option<Vec2>,
}

impl Default for RotationAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_STEPS)
    }
}

impl RotationAnimator {
    /// Create an idle animator that completes each turn in `total_steps` frames
    ///
    /// A step count of zero is treated as one.
    pub fn new(total_steps: u32) -> Self {
        Self {
            animating: false,
            angle_per_step: 0.0,
            steps_elapsed: 0,
            total_steps: total_steps.max(1),
            last_pointer: None,
        }
    }

    /// Current state
    pub fn state(&self) -> AnimationState {
        if self.animating {
            AnimationState::Animating
        } else {
            AnimationState::Idle
        }
    }

    /// Whether a turn is in progress
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Angle added per frame for the current turn
    pub fn angle_per_step(&self) -> f32 {
        self.angle_per_step
    }

    /// Frames applied so far in the current turn
    pub fn steps_elapsed(&self) -> u32 {
        self.steps_elapsed
    }

    /// Frames per turn
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Begin turning toward `target_angle` (counter-clockwise, radians)
    ///
    /// Restarts from the transform's baseline even if a turn is already running.
    pub fn start(&mut self, target_angle: f32, transform: &Transform) {
        let angle_delta = target_angle - transform.prev_theta();
        self.angle_per_step = angle_delta / self.total_steps as f32;
        self.steps_elapsed = 0;
        self.animating = true;
        log::debug!(
            "Rotation started: target {:.3} rad, {:.4} rad/step",
            target_angle,
            self.angle_per_step
        );
    }

    /// Retarget toward a pointer position given in world coordinates
    ///
    /// Edge-triggered: a pointer position equal to the previous one starts
    /// nothing. Also starts nothing when the pointer sits exactly on the
    /// transform's position. Returns whether a new turn began.
    pub fn aim_at(&mut self, pointer: Vec2, transform: &Transform) -> bool {
        if self.last_pointer == Some(pointer) {
            return false;
        }
        self.last_pointer = Some(pointer);

        match target_heading(pointer, transform.position(), transform.prev_theta()) {
            Some(target) => {
                self.start(target, transform);
                true
            }
            None => false,
        }
    }

    /// Advance one frame
    ///
    /// Returns the state after the step. Does nothing while idle.
    pub fn tick(&mut self, transform: &mut Transform) -> AnimationState {
        if !self.animating {
            return AnimationState::Idle;
        }

        self.steps_elapsed += 1;
        let heading = -(transform.prev_theta() + self.angle_per_step * self.steps_elapsed as f32);
        transform.rotate_to(heading);

        if self.steps_elapsed == self.total_steps {
            self.animating = false;
            self.steps_elapsed = 0;
            transform.set_prev_theta(-transform.theta());
            log::debug!("Rotation finished at theta {:.3}", transform.theta());
        }
        self.state()
    }

    /// Return to idle and forget the last pointer position
    pub fn reset(&mut self) {
        *self = Self::new(self.total_steps);
    }
}

/// Heading (counter-clockwise from the local up axis) that points from
/// `origin` toward `pointer`
///
/// When the turn from `baseline` would exceed half a revolution, the
/// equivalent heading in the opposite direction is returned instead.
/// `None` when `pointer == origin`.
pub fn target_heading(pointer: Vec2, origin: Vec2, baseline: f32) -> Option<f32> {
    let offset = pointer - origin;
    let mut heading = angle::ccw_from_x_axis(offset.x, offset.y)? - HALF_PI;

    if (heading - baseline).abs() > PI {
        heading = -(TAU - heading);
    }
    Some(heading)
}
