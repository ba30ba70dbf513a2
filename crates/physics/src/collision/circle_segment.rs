//! Circle-segment collision detection and response

use super::{bounce_off_static, Contact};
use crate::body::{Circle, Segment};
use crate::error::PhysicsError;
use crate::types::Vec2;

/// Normal used when the circle center sits on the segment itself, where the
/// side it came from is unknown.
const DEGENERATE_NORMAL: Vec2 = Vec2::new(0.0, 1.0);

/// Closest point on `segment` to `point`.
///
/// A zero-length segment has no direction to project onto and fails with
/// [`PhysicsError::DivisionByZero`].
pub fn closest_point_on_segment(point: Vec2, segment: &Segment) -> Result<Vec2, PhysicsError> {
    let direction = segment.direction();
    let projected = (point - segment.p1()).project_onto(direction)?;
    let t = projected.divide_along(direction)?.clamp(0.0, 1.0);
    Ok(segment.p1() + direction * t)
}

pub fn detect_circle_segment(circle: &Circle, segment: &Segment) -> Result<Option<Contact>, PhysicsError> {
    let center = circle.center();
    let closest = closest_point_on_segment(center, segment)?;
    let offset = center - closest;
    let distance = offset.norm();

    if distance > circle.radius() {
        return Ok(None);
    }

    let normal = if offset == Vec2::ZERO {
        DEGENERATE_NORMAL
    } else {
        offset.normalize()?
    };

    Ok(Some(Contact {
        normal,
        depth: circle.radius() - distance,
    }))
}

pub fn collide_circle_segment(circle: &mut Circle, segment: &Segment) -> Result<Option<Contact>, PhysicsError> {
    let contact = detect_circle_segment(circle, segment)?;
    if let Some(contact) = &contact {
        bounce_off_static(circle, contact);
    }
    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn floor_segment() -> Segment {
        Segment::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0)).unwrap()
    }

    #[test]
    fn closest_point_is_clamped_to_endpoints() {
        let seg = floor_segment();
        let before = closest_point_on_segment(Vec2::new(-5.0, 3.0), &seg).unwrap();
        assert_eq!(before, Vec2::new(0.0, 10.0));
        let after = closest_point_on_segment(Vec2::new(20.0, 3.0), &seg).unwrap();
        assert_eq!(after, Vec2::new(10.0, 10.0));
        let inside = closest_point_on_segment(Vec2::new(4.0, 3.0), &seg).unwrap();
        assert!((inside.x - 4.0).abs() < EPS);
        assert!((inside.y - 10.0).abs() < EPS);
    }

    #[test]
    fn far_circle_has_no_contact() {
        let c = Circle::new(Vec2::new(5.0, 5.0), 1.0, Vec2::ZERO, 1.0).unwrap();
        assert!(detect_circle_segment(&c, &floor_segment()).unwrap().is_none());
    }

    #[test]
    fn circle_above_segment_bounces_up() {
        let mut c = Circle::new(Vec2::new(5.0, 9.5), 1.0, Vec2::new(1.0, 4.0), 0.5).unwrap();
        let contact = collide_circle_segment(&mut c, &floor_segment()).unwrap().unwrap();
        assert!((contact.normal.y + 1.0).abs() < EPS);
        assert!((c.center().y - 9.0).abs() < EPS);
        assert!((c.velocity().x - 0.5).abs() < EPS);
        assert!((c.velocity().y + 2.0).abs() < EPS);
    }

    #[test]
    fn center_on_line_uses_fixed_normal() {
        let c = Circle::new(Vec2::new(5.0, 10.0), 1.0, Vec2::ZERO, 1.0).unwrap();
        let contact = detect_circle_segment(&c, &floor_segment()).unwrap().unwrap();
        assert_eq!(contact.normal, Vec2::new(0.0, 1.0));
        assert!((contact.depth - 1.0).abs() < EPS);
    }

    #[test]
    fn center_on_diagonal_segment_has_unit_normal() {
        let segments = [
            (Vec2::new(46.029_41, 39.648_35), Vec2::new(95.952_126, 40.612_526)),
            (Vec2::new(-3.7, 12.1), Vec2::new(17.3, -8.9)),
            (Vec2::new(0.1, 0.2), Vec2::new(0.7, 0.3)),
        ];
        for (p1, p2) in segments {
            let seg = Segment::new(p1, p2).unwrap();
            for s in [0.1, 0.33, 0.5, 0.953] {
                let c = Circle::new(p1 + (p2 - p1) * s, 1.0, Vec2::ZERO, 1.0).unwrap();
                let contact = detect_circle_segment(&c, &seg).unwrap().unwrap();
                assert!((contact.normal.norm() - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn center_on_line_past_endpoint_is_pushed_off_the_end() {
        let seg = Segment::new(Vec2::new(100.0, 300.0), Vec2::new(200.0, 300.0)).unwrap();
        let mut c = Circle::new(Vec2::new(205.0, 300.0), 10.0, Vec2::new(-10.0, 0.0), 1.0).unwrap();
        let contact = collide_circle_segment(&mut c, &seg).unwrap().unwrap();
        assert_eq!(contact.normal, Vec2::new(1.0, 0.0));
        assert!((contact.depth - 5.0).abs() < EPS);
        assert!((c.center().x - 210.0).abs() < EPS);
        assert!((c.center().y - 300.0).abs() < EPS);
        assert!((c.velocity().x - 10.0).abs() < EPS);
    }

    #[test]
    fn zero_length_segment_fails() {
        let point = Segment::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)).unwrap();
        let c = Circle::new(Vec2::new(1.0, 1.5), 1.0, Vec2::ZERO, 1.0).unwrap();
        assert!(matches!(
            detect_circle_segment(&c, &point),
            Err(PhysicsError::DivisionByZero(_))
        ));
    }
}
