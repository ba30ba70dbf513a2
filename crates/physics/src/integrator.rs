//! # Physics Integration
//!
//! Semi-implicit Euler for dynamic circles: velocity first, then position
//! from the updated velocity. Static bodies are never touched.

use crate::body::{Body, Shape};
use crate::types::Vec2;

/// Advance every dynamic circle in `bodies` by `dt` under `gravity`.
pub fn integrate_bodies<'a>(bodies: impl IntoIterator<Item = &'a mut Body>, gravity: Vec2, dt: f32) {
    let dv = gravity * dt;
    for body in bodies {
        if !body.is_dynamic() {
            continue;
        }
        if let Shape::Circle(circle) = body.shape_mut() {
            let velocity = circle.velocity() + dv;
            circle.set_velocity_unchecked(velocity);
            circle.translate(velocity * dt);
        }
    }
}
