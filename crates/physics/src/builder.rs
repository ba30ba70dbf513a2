//! # Engine Builder
//!
//! Methods for handing bodies to the [`Engine`] and taking them back out.

use crate::body::{Body, BodyId, Motion};
use crate::error::PhysicsError;
use crate::types::Vec2;
use crate::Engine;

impl Engine {
    /// Append a body; it is paired after every body already present.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push((id, body));
        id
    }

    /// Construct and add a circle.
    pub fn add_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        motion: Motion,
        velocity: Vec2,
        restitution: f32,
    ) -> Result<BodyId, PhysicsError> {
        Ok(self.add_body(Body::circle(center, radius, motion, velocity, restitution)?))
    }

    pub fn add_segment(&mut self, p1: Vec2, p2: Vec2) -> Result<BodyId, PhysicsError> {
        Ok(self.add_body(Body::segment(p1, p2)?))
    }

    pub fn add_rectangle(&mut self, origin: Vec2, width: f32, height: f32) -> Result<BodyId, PhysicsError> {
        Ok(self.add_body(Body::rectangle(origin, width, height)?))
    }

    /// Remove a body by identity, keeping the order of the rest.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.bodies.iter().position(|(bid, _)| *bid == id)?;
        Some(self.bodies.remove(index).1)
    }
}
