//! # Simulation Core
//!
//! [`Engine`] owns the world and the body collection and advances them with
//! [`Engine::step`]. A step is a fixed sequence:
//!
//! 1. integrate dynamic circles under gravity,
//! 2. resolve every unordered body pair `(i < j)` in insertion order,
//! 3. keep dynamic circles inside the world boundary.
//!
//! There is no broad phase; the pair scan is quadratic in the body count.

use crate::body::{Body, BodyId, Shape};
use crate::collision::{resolve_pair, resolve_world_boundary};
use crate::error::{ensure_finite, PhysicsError};
use crate::integrator::integrate_bodies;
use crate::types::{Vec2, World};

/// Snapshot of the engine for logging and debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineDebugInfo {
    pub num_bodies: usize,
    pub num_dynamic: usize,
    pub world: World,
    /// Pair contacts plus wall hits resolved by the most recent successful step.
    pub last_step_contacts: usize,
    /// `Σ ½|v|²` over dynamic circles, treating each as unit mass.
    pub kinetic_energy: f32,
}

/// 2D rigid-body engine.
///
/// Bodies are kept in insertion order, which is also the pairing order.
/// `step` mutates bodies in place and is not re-entrant; the `&mut self`
/// receiver enforces a single caller.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) world: World,
    pub(crate) bodies: Vec<(BodyId, Body)>,
    pub(crate) next_id: u64,
    last_step_contacts: usize,
}

impl Engine {
    pub fn new(origin: Vec2, width: f32, height: f32, gravity: Vec2) -> Result<Self, PhysicsError> {
        Ok(Self::with_world(World::new(origin, width, height, gravity)?))
    }

    #[must_use]
    pub fn with_world(world: World) -> Self {
        Self {
            world,
            bodies: Vec::new(),
            next_id: 0,
            last_step_contacts: 0,
        }
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn set_gravity(&mut self, gravity: Vec2) -> Result<(), PhysicsError> {
        self.world.set_gravity(gravity)
    }

    #[must_use]
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|(bid, _)| *bid == id).map(|(_, b)| b)
    }

    /// Mutable access between steps, e.g. to inject a velocity.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|(bid, _)| *bid == id).map(|(_, b)| b)
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies.iter().map(|(id, b)| (*id, b))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidArgument`] for a non-finite `dt`. Any error from
    /// a pair aborts the rest of the step; bodies keep whatever was already
    /// integrated and resolved.
    pub fn step(&mut self, dt: f32) -> Result<(), PhysicsError> {
        ensure_finite("dt", dt)?;

        integrate_bodies(self.bodies.iter_mut().map(|(_, b)| b), self.world.gravity(), dt);

        let pair_contacts = match self.resolve_pairs() {
            Ok(n) => n,
            Err(err) => {
                tracing::warn!(%err, "step aborted during pair resolution");
                return Err(err);
            }
        };
        let wall_contacts = self.resolve_boundaries();

        self.last_step_contacts = pair_contacts + wall_contacts;
        tracing::debug!(dt, pair_contacts, wall_contacts, "step complete");
        Ok(())
    }

    /// Run `steps` consecutive steps, stopping at the first error.
    pub fn run(&mut self, dt: f32, steps: usize) -> Result<(), PhysicsError> {
        for _ in 0..steps {
            self.step(dt)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn debug_info(&self) -> EngineDebugInfo {
        let dynamic = self.bodies.iter().filter(|(_, b)| b.is_dynamic());
        let kinetic_energy = dynamic
            .clone()
            .filter_map(|(_, b)| b.velocity())
            .map(|v| 0.5 * v.dot(v))
            .sum();

        EngineDebugInfo {
            num_bodies: self.bodies.len(),
            num_dynamic: dynamic.count(),
            world: self.world,
            last_step_contacts: self.last_step_contacts,
            kinetic_energy,
        }
    }
}

// Step phases
impl Engine {
    fn resolve_pairs(&mut self) -> Result<usize, PhysicsError> {
        let mut contacts = 0;
        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (before, after) = self.bodies.split_at_mut(j);
                let (id_a, body_a) = &mut before[i];
                let (id_b, body_b) = &mut after[0];
                if resolve_pair(*id_a, body_a, *id_b, body_b)?.is_some() {
                    contacts += 1;
                }
            }
        }
        Ok(contacts)
    }

    fn resolve_boundaries(&mut self) -> usize {
        let world = self.world;
        let mut hits = 0;
        for (_, body) in &mut self.bodies {
            if !body.is_dynamic() {
                continue;
            }
            if let Shape::Circle(circle) = body.shape_mut() {
                if resolve_world_boundary(circle, &world) {
                    hits += 1;
                }
            }
        }
        hits
    }
}
