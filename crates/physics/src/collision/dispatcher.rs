//! Routes a body pair to the right circle-vs-shape algorithm

use super::{collide_circle_circle, collide_circle_rectangle, collide_circle_segment, Contact};
use crate::body::{Body, BodyId, Shape};
use crate::error::PhysicsError;

/// Resolve one unordered pair of bodies.
///
/// Pairs where neither body is dynamic are skipped. Otherwise the circle is
/// taken as the first operand and the pair is dispatched on the other shape.
/// A non-skipped pair without a circle is reported as
/// [`PhysicsError::UnresolvablePair`].
pub fn resolve_pair(
    id_a: BodyId,
    a: &mut Body,
    id_b: BodyId,
    b: &mut Body,
) -> Result<Option<Contact>, PhysicsError> {
    if !a.is_dynamic() && !b.is_dynamic() {
        return Ok(None);
    }

    let (motion_a, motion_b) = (a.motion(), b.motion());
    let contact = match (a.shape_mut(), b.shape_mut()) {
        (Shape::Circle(ca), Shape::Circle(cb)) => collide_circle_circle(ca, motion_a, cb, motion_b)?,
        (Shape::Circle(c), Shape::Segment(s)) | (Shape::Segment(s), Shape::Circle(c)) => {
            collide_circle_segment(c, s)?
        }
        (Shape::Circle(c), Shape::Rectangle(r)) | (Shape::Rectangle(r), Shape::Circle(c)) => {
            collide_circle_rectangle(c, r)
        }
        _ => {
            return Err(PhysicsError::UnresolvablePair {
                first: id_a,
                second: id_b,
            })
        }
    };

    if let Some(contact) = &contact {
        tracing::trace!(
            first = id_a.raw(),
            second = id_b.raw(),
            depth = contact.depth,
            "resolved contact"
        );
    }
    Ok(contact)
}
