//! Ship/pickup overlap test
//!
//! Two-axis interval test where an object's extent along an axis is taken to
//! run from `position` to `position + scale`. This is coarser than a true
//! min/max box around the rendered quad, and spawn distances are tuned
//! against exactly this formula.

use crate::scene::GameObject;

/// Whether `a` and `b` overlap on both axes
///
/// Always false when either object is inactive.
pub fn overlaps(a: &GameObject, b: &GameObject) -> bool {
    if !(a.is_active() && b.is_active()) {
        return false;
    }

    let (a_pos, a_scale) = (a.position(), a.scale());
    let (b_pos, b_scale) = (b.position(), b.scale());

    let collision_x = a_pos.x + a_scale.x >= b_pos.x && b_pos.x + b_scale.x >= a_pos.x;
    let collision_y = a_pos.y + a_scale.y >= b_pos.y && b_pos.y + b_scale.y >= a_pos.y;

    collision_x && collision_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::render::ResourceKey;

    fn object(x: f32, y: f32, sx: f32, sy: f32) -> GameObject {
        GameObject::new(ResourceKey::default(), Vec2::new(x, y), Vec2::new(sx, sy))
    }

    #[test]
    fn test_ship_overlaps_nearby_pickup_at_spawn() {
        let ship = object(0.0, 0.0, 0.09, 0.06);
        let pickup = object(0.05, 0.05, 0.07, 0.07);
        assert!(overlaps(&ship, &pickup));
    }

    #[test]
    fn test_extent_runs_from_position_by_scale() {
        // Centre distance is well inside the summed scales, but the ship's
        // Y extent (0.06) stops short of the pickup's position (0.07)
        let ship = object(0.0, 0.0, 0.09, 0.06);
        let pickup = object(0.07, 0.07, 0.07, 0.07);
        assert!(!overlaps(&ship, &pickup));
    }

    #[test]
    fn test_default_pickups_are_clear_of_spawn() {
        let ship = object(0.0, 0.0, 0.09, 0.06);
        for (x, y) in [(0.5, 0.5), (-0.5, 0.5), (0.5, -0.5)] {
            assert!(!overlaps(&ship, &object(x, y, 0.07, 0.07)), "pickup at ({x}, {y})");
        }
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        let a = object(0.0, 0.0, 0.5, 0.5);
        let b = object(0.5, 0.5, 0.5, 0.5);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let a = object(0.0, 0.0, 0.1, 0.1);
        assert!(!overlaps(&a, &object(0.05, 0.5, 0.1, 0.1)));
        assert!(!overlaps(&a, &object(0.5, 0.05, 0.1, 0.1)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let samples = [
            object(0.0, 0.0, 0.09, 0.06),
            object(0.07, 0.07, 0.07, 0.07),
            object(-0.1, 0.02, 0.2, 0.05),
            object(0.5, -0.5, 0.07, 0.07),
            object(-0.05, -0.05, 0.04, 0.3),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(overlaps(a, b), overlaps(b, a));
            }
        }
    }

    #[test]
    fn test_inactive_objects_never_overlap() {
        let mut ship = object(0.0, 0.0, 0.09, 0.06);
        let mut pickup = object(0.0, 0.0, 0.09, 0.06);

        pickup.set_active(false);
        assert!(!overlaps(&ship, &pickup));
        assert!(!overlaps(&pickup, &ship));

        pickup.set_active(true);
        ship.set_active(false);
        assert!(!overlaps(&ship, &pickup));
    }
}
