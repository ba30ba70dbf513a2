//! Circle vs axis-aligned rectangle collision detection and response

use super::{bounce_off_static, Contact};
use crate::body::{Circle, Rectangle};
use crate::types::Vec2;

/// Rectangle face a circle was pushed out of. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
}

impl Face {
    #[must_use]
    pub fn normal(self) -> Vec2 {
        match self {
            Face::Top => Vec2::new(0.0, -1.0),
            Face::Bottom => Vec2::new(0.0, 1.0),
            Face::Left => Vec2::new(-1.0, 0.0),
            Face::Right => Vec2::new(1.0, 0.0),
        }
    }
}

fn nearest_point(point: Vec2, rect: &Rectangle) -> Vec2 {
    let min = rect.origin();
    let max = rect.max();
    Vec2::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
}

/// Faces are checked top, bottom, left, right; the first match wins.
#[allow(clippy::float_cmp)]
fn classify_face(nearest: Vec2, rect: &Rectangle) -> Option<Face> {
    let min = rect.origin();
    let max = rect.max();
    if nearest.y == min.y {
        Some(Face::Top)
    } else if nearest.y == max.y {
        Some(Face::Bottom)
    } else if nearest.x == min.x {
        Some(Face::Left)
    } else if nearest.x == max.x {
        Some(Face::Right)
    } else {
        None
    }
}

/// Detect a circle touching a rectangle from outside.
///
/// A center inside the rectangle is deep penetration and is not resolved:
/// `None` is returned.
#[must_use]
pub fn detect_circle_rectangle(circle: &Circle, rect: &Rectangle) -> Option<(Face, Contact)> {
    let center = circle.center();
    let nearest = nearest_point(center, rect);
    let distance = (center - nearest).norm();

    if distance > circle.radius() {
        return None;
    }
    if nearest == center {
        tracing::trace!(?center, "circle center inside rectangle, skipping");
        return None;
    }

    let face = classify_face(nearest, rect)?;
    Some((
        face,
        Contact {
            normal: face.normal(),
            depth: circle.radius() - distance,
        },
    ))
}

pub fn collide_circle_rectangle(circle: &mut Circle, rect: &Rectangle) -> Option<Contact> {
    let (_, contact) = detect_circle_rectangle(circle, rect)?;
    bounce_off_static(circle, &contact);
    Some(contact)
}
