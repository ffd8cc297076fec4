//! Per-object 2D transform
//!
//! Holds position, scale and heading for one object together with the three
//! component matrices derived from them. The composite is always
//! `translate · rotate · scale`: rotation and scale are applied in object-local
//! space before the object is moved into world space.

use crate::foundation::math::{angle, Mat4, Vec2, Vec3};

/// Position, scale and heading of a game object plus its spawn values
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    position: Vec2,
    original_position: Vec2,
    scale: Vec2,
    original_scale: Vec2,

    /// Current heading in radians
    theta: f32,
    /// Heading at the end of the last completed rotation animation
    prev_theta: f32,

    translate_matrix: Mat4,
    rotate_matrix: Mat4,
    scale_matrix: Mat4,
}

impl Transform {
    /// Create a transform at its spawn position and scale with zero heading
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        let mut transform = Self {
            position,
            original_position: position,
            scale,
            original_scale: scale,
            theta: 0.0,
            prev_theta: 0.0,
            translate_matrix: Mat4::identity(),
            rotate_matrix: Mat4::identity(),
            scale_matrix: Mat4::identity(),
        };
        transform.set_translation();
        transform.set_rotation();
        transform.set_scale();
        transform
    }

    /// Current world position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Spawn position, fixed at construction
    pub fn original_position(&self) -> Vec2 {
        self.original_position
    }

    /// Current scale
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Spawn scale, fixed at construction
    pub fn original_scale(&self) -> Vec2 {
        self.original_scale
    }

    /// Current heading in radians
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Baseline heading used by the next rotation animation
    pub fn prev_theta(&self) -> f32 {
        self.prev_theta
    }

    /// Replace the animation baseline
    pub fn set_prev_theta(&mut self, prev_theta: f32) {
        self.prev_theta = prev_theta;
    }

    /// Recompute the translation component from `position`
    pub fn set_translation(&mut self) {
        self.translate_matrix =
            Mat4::new_translation(&Vec3::new(self.position.x, self.position.y, 0.0));
    }

    /// Recompute the scale component from `scale`
    pub fn set_scale(&mut self) {
        self.scale_matrix =
            Mat4::new_nonuniform_scaling(&Vec3::new(self.scale.x, self.scale.y, 1.0));
    }

    /// Recompute the rotation component from `theta`
    ///
    /// Positive `theta` turns clockwise on screen, so the animation drives the
    /// ship with negated headings to turn it counter-clockwise.
    pub fn set_rotation(&mut self) {
        let (sin, cos) = self.theta.sin_cos();
        self.rotate_matrix = Mat4::new(
            cos, sin, 0.0, 0.0,
            -sin, cos, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
    }

    /// Composite object-to-world matrix (TRS order)
    pub fn composite(&self) -> Mat4 {
        self.translate_matrix * self.rotate_matrix * self.scale_matrix
    }

    /// Set the heading, folding values at or above `2π` back into range
    pub fn rotate_to(&mut self, angle: f32) {
        self.theta = angle::normalize(angle);
        self.set_rotation();
    }

    /// Move by the given offset
    pub fn translate_by(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
        self.set_translation();
    }

    /// Multiply the current scale per axis; repeated calls compound
    pub fn scale_by(&mut self, fx: f32, fy: f32) {
        self.scale.x *= fx;
        self.scale.y *= fy;
        self.set_scale();
    }

    /// Restore spawn position and scale and clear both headings
    pub fn reset_to_spawn(&mut self) {
        self.theta = 0.0;
        self.prev_theta = 0.0;
        self.position = self.original_position;
        self.scale = self.original_scale;

        self.set_translation();
        self.set_scale();
        self.set_rotation();
    }
}
