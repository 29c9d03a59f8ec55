//! AABB collision and containment primitives

use glam::Vec2;

/// An axis-aligned rectangle: top-left corner plus extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Strict AABB overlap test.
///
/// Rectangles that merely touch along an edge (coordinate equality) do not
/// count as overlapping.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// Clamp a position into `[0, max]` per axis.
///
/// Written as min-then-max so the lower bound wins when `max` goes negative
/// (arena smaller than the entity), instead of panicking like `f32::clamp`.
pub fn clamp_point(pos: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(pos.x.min(max.x).max(0.0), pos.y.min(max.y).max(0.0))
}

/// Reflect a moving point off the walls of `[0, max]` per axis.
///
/// On crossing a bound the position snaps exactly to it and that axis'
/// velocity component flips sign. Both axes are checked independently, so a
/// corner can flip both in one call. Magnitudes are never scaled.
pub fn reflect_into_bounds(pos: &mut Vec2, vel: &mut Vec2, max: Vec2) {
    if pos.x <= 0.0 {
        pos.x = 0.0;
        vel.x = -vel.x;
    }
    if pos.x >= max.x {
        pos.x = max.x;
        vel.x = -vel.x;
    }
    if pos.y <= 0.0 {
        pos.y = 0.0;
        vel.y = -vel.y;
    }
    if pos.y >= max.y {
        pos.y = max.y;
        vel.y = -vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[test]
    fn test_overlap_one_unit() {
        // Overlapping by 1 unit on both axes must register
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(9.0, 9.0, 10.0, 10.0);
        assert!(rects_overlap(a, b));
        assert!(rects_overlap(b, a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Right edge of a exactly on left edge of b
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(a, b));
        // Same for the vertical axis
        let c = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(a, c));
        // Corner touch
        let d = rect(10.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(a, d));
    }

    #[test]
    fn test_disjoint_rects() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(50.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(a, b));
    }

    #[test]
    fn test_clamp_point() {
        let max = Vec2::new(354.0, 254.0);
        assert_eq!(
            clamp_point(Vec2::new(-5.0, 100.0), max),
            Vec2::new(0.0, 100.0)
        );
        assert_eq!(
            clamp_point(Vec2::new(400.0, 300.0), max),
            Vec2::new(354.0, 254.0)
        );
        let inside = Vec2::new(100.0, 50.0);
        assert_eq!(clamp_point(inside, max), inside);
    }

    #[test]
    fn test_clamp_point_degenerate_range() {
        // Arena smaller than the entity: lower bound wins, no panic
        let max = Vec2::new(-10.0, -10.0);
        assert_eq!(clamp_point(Vec2::new(5.0, 5.0), max), Vec2::ZERO);
    }

    #[test]
    fn test_reflect_left_wall() {
        let mut pos = Vec2::new(-15.0, 50.0);
        let mut vel = Vec2::new(-150.0, 80.0);
        reflect_into_bounds(&mut pos, &mut vel, Vec2::new(328.0, 228.0));
        assert_eq!(pos, Vec2::new(0.0, 50.0));
        assert_eq!(vel, Vec2::new(150.0, 80.0));
    }

    #[test]
    fn test_reflect_corner_flips_both_axes() {
        let max = Vec2::new(328.0, 228.0);
        let mut pos = Vec2::new(330.0, -2.0);
        let mut vel = Vec2::new(220.0, -171.6);
        reflect_into_bounds(&mut pos, &mut vel, max);
        assert_eq!(pos, Vec2::new(328.0, 0.0));
        assert_eq!(vel, Vec2::new(-220.0, 171.6));
    }

    #[test]
    fn test_reflect_preserves_magnitude() {
        let max = Vec2::new(328.0, 228.0);
        let mut pos = Vec2::new(-7.5, 240.0);
        let mut vel = Vec2::new(-220.0, 171.6);
        reflect_into_bounds(&mut pos, &mut vel, max);
        assert_eq!(vel.x.abs(), 220.0);
        assert_eq!(vel.y.abs(), 171.6);
    }

    #[test]
    fn test_reflect_no_contact_no_change() {
        let max = Vec2::new(328.0, 228.0);
        let mut pos = Vec2::new(100.0, 100.0);
        let mut vel = Vec2::new(220.0, -171.6);
        reflect_into_bounds(&mut pos, &mut vel, max);
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert_eq!(vel, Vec2::new(220.0, -171.6));
    }
}
