//! Circle-circle collision detection and response

use super::{bounce_off_static, Contact};
use crate::body::{Circle, Motion};
use crate::error::PhysicsError;

/// Detect overlap between two circles.
///
/// The contact normal points from `b` towards `a`. Coincident centers have no
/// defined normal and fail with [`PhysicsError::DivisionByZero`].
pub fn detect_circle_circle(a: &Circle, b: &Circle) -> Result<Option<Contact>, PhysicsError> {
    let delta = b.center() - a.center();
    let distance = delta.norm();
    let min_distance = a.radius() + b.radius();

    if distance > min_distance {
        return Ok(None);
    }

    let a_to_b = delta
        .normalize()
        .map_err(|_| PhysicsError::DivisionByZero("circles share the same center"))?;

    Ok(Some(Contact {
        normal: -a_to_b,
        depth: min_distance - distance,
    }))
}

/// Detect and resolve a circle-circle pair. The dynamic circle is always the mover.
///
/// Returns the contact as seen from the circle that moved (or the first one,
/// when both moved).
pub fn collide_circle_circle(
    a: &mut Circle,
    a_motion: Motion,
    b: &mut Circle,
    b_motion: Motion,
) -> Result<Option<Contact>, PhysicsError> {
    if a_motion == Motion::Static {
        if b_motion == Motion::Static {
            return Ok(None);
        }
        return collide_circle_circle(b, b_motion, a, a_motion);
    }

    let Some(contact) = detect_circle_circle(a, b)? else {
        return Ok(None);
    };

    match b_motion {
        Motion::Static => bounce_off_static(a, &contact),
        Motion::Dynamic => resolve_dynamic_pair(a, b, &contact),
    }
    Ok(Some(contact))
}

/// Split the overlap evenly and swap the normal velocity components (equal masses).
fn resolve_dynamic_pair(a: &mut Circle, b: &mut Circle, contact: &Contact) {
    let n = contact.normal;
    let half = n * (contact.depth * 0.5);
    a.translate(half);
    b.translate(-half);

    let va = a.velocity();
    let vb = b.velocity();
    // n points from b to a, so a negative relative speed means they are closing
    if (va - vb).dot(n) >= 0.0 {
        return;
    }

    let va_normal = n * va.dot(n);
    let vb_normal = n * vb.dot(n);
    let va_new = (va - va_normal + vb_normal) * a.restitution();
    let vb_new = (vb - vb_normal + va_normal) * b.restitution();
    a.set_velocity_unchecked(va_new);
    b.set_velocity_unchecked(vb_new);
}
