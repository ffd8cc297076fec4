//! Math utilities and types
//!
//! Provides the fundamental math types for the 2D playfield. Objects live on
//! the XY plane but compose into 4x4 matrices so the result can be handed
//! straight to a shader uniform.

pub use nalgebra::{Matrix4, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Angle helpers shared by the transform and the heading animation
pub mod angle {
    use super::constants::{HALF_PI, PI, TAU};

    /// Fold an angle down into `[0, 2π)` by repeatedly subtracting `2π`.
    ///
    /// Negative angles are returned unchanged: headings produced by the
    /// rotation animation are signed and must stay that way.
    pub fn normalize(mut angle: f32) -> f32 {
        while angle >= TAU {
            angle -= TAU;
        }
        angle
    }

    /// Counter-clockwise angle of the offset `(dx, dy)` measured from the +X axis.
    ///
    /// Uses `atan(dy / dx)` corrected per quadrant. A zero horizontal offset
    /// is treated as the vertical axis instead of dividing by zero. Returns
    /// `None` when the offset is the zero vector.
    pub fn ccw_from_x_axis(dx: f32, dy: f32) -> Option<f32> {
        if dx == 0.0 {
            return if dy > 0.0 {
                Some(HALF_PI)
            } else if dy < 0.0 {
                Some(PI + HALF_PI)
            } else {
                None
            };
        }

        let arc_tan = (dy / dx).atan();
        let positive_x = dx > 0.0;
        let positive_y = dy > 0.0;

        let angle = match (positive_x, positive_y) {
            (true, true) => arc_tan,
            (false, _) => PI + arc_tan,
            (true, false) => TAU + arc_tan,
        };
        Some(angle)
    }

}
