//! # Collision Detection and Response
//!
//! Each shape pair has a `detect_*` function that reports an optional
//! [`Contact`] and a `collide_*` function that detects and then applies the
//! response. The response model is the same everywhere: push the moving
//! circle out along the contact normal by the full overlap, then reflect (or
//! exchange) only the velocity component along that normal and scale the
//! result by the mover's restitution. Tangential velocity is untouched.
//!
//! Velocity response only happens while the mover is approaching the
//! obstacle, so resolving an already separated configuration again changes
//! nothing.

mod boundary;
mod circle_circle;
mod circle_rectangle;
mod circle_segment;
mod dispatcher;

pub use boundary::resolve_world_boundary;
pub use circle_circle::{collide_circle_circle, detect_circle_circle};
pub use circle_rectangle::{collide_circle_rectangle, detect_circle_rectangle, Face};
pub use circle_segment::{closest_point_on_segment, collide_circle_segment, detect_circle_segment};
pub use dispatcher::resolve_pair;

use crate::body::Circle;
use crate::types::Vec2;

/// Contact between a circle and another body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector along which the circle (the first operand) must move to separate.
    pub normal: Vec2,
    /// Penetration depth. Zero when the shapes are exactly touching.
    pub depth: f32,
}

/// Push `circle` out of an immovable obstacle and reflect its normal velocity.
pub(crate) fn bounce_off_static(circle: &mut Circle, contact: &Contact) {
    circle.translate(contact.normal * contact.depth);

    let v = circle.velocity();
    let along_normal = v.dot(contact.normal);
    if along_normal < 0.0 {
        let reflected = v - contact.normal * (2.0 * along_normal);
        circle.set_velocity_unchecked(reflected * circle.restitution());
    }
}
