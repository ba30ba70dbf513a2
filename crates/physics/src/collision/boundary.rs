//! Circle vs world boundary

use crate::body::Circle;
use crate::types::{Vec2, World};

/// Keep a dynamic circle inside the world.
///
/// The floor pushes the circle back up by the overlap and inverts its
/// vertical velocity. The side walls only invert horizontal velocity and
/// apply no positional correction. There is no ceiling. Wall bounces are
/// lossless: restitution is not applied here.
///
/// Returns `true` if any wall changed the circle.
pub fn resolve_world_boundary(circle: &mut Circle, world: &World) -> bool {
    let mut hit = false;
    let r = circle.radius();

    let overlap = circle.center().y + r - world.floor();
    if overlap >= 0.0 {
        circle.translate(Vec2::new(0.0, -overlap));
        let v = circle.velocity();
        if v.y > 0.0 {
            circle.set_velocity_unchecked(v.scale_xy(1.0, -1.0));
        }
        hit = true;
    }

    let center = circle.center();
    let v = circle.velocity();
    let into_left = center.x - r <= world.left() && v.x < 0.0;
    let into_right = center.x + r >= world.right() && v.x > 0.0;
    if into_left || into_right {
        circle.set_velocity_unchecked(v.scale_xy(-1.0, 1.0));
        hit = true;
    }

    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn world() -> World {
        World::new(Vec2::ZERO, 100.0, 100.0, Vec2::new(0.0, 10.0)).unwrap()
    }

    #[test]
    fn floor_pushes_up_and_inverts() {
        let mut c = Circle::new(Vec2::new(50.0, 98.0), 5.0, Vec2::new(2.0, 7.0), 0.3).unwrap();
        assert!(resolve_world_boundary(&mut c, &world()));
        assert!((c.center().y - 95.0).abs() < EPS);
        assert_eq!(c.velocity(), Vec2::new(2.0, -7.0));
    }

    #[test]
    fn side_walls_invert_without_correction() {
        let mut c = Circle::new(Vec2::new(2.0, 50.0), 5.0, Vec2::new(-3.0, 1.0), 1.0).unwrap();
        assert!(resolve_world_boundary(&mut c, &world()));
        assert_eq!(c.center(), Vec2::new(2.0, 50.0));
        assert_eq!(c.velocity(), Vec2::new(3.0, 1.0));

        let mut c = Circle::new(Vec2::new(97.0, 50.0), 5.0, Vec2::new(3.0, 0.0), 1.0).unwrap();
        assert!(resolve_world_boundary(&mut c, &world()));
        assert_eq!(c.velocity(), Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn circle_leaving_a_wall_is_not_flipped_back() {
        let mut c = Circle::new(Vec2::new(2.0, 50.0), 5.0, Vec2::new(3.0, 0.0), 1.0).unwrap();
        assert!(!resolve_world_boundary(&mut c, &world()));
        assert_eq!(c.velocity(), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn interior_circle_is_untouched() {
        let mut c = Circle::new(Vec2::new(50.0, 50.0), 5.0, Vec2::new(1.0, 1.0), 1.0).unwrap();
        assert!(!resolve_world_boundary(&mut c, &world()));
        assert_eq!(c.center(), Vec2::new(50.0, 50.0));
    }
}
