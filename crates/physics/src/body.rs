//! # Body Model
//!
//! A [`Body`] pairs a [`Shape`] with a [`Motion`] mode. Only circles carry a
//! velocity, and only circles may be [`Motion::Dynamic`]; every constructor
//! enforces this so the resolver can rely on it.

use crate::error::{ensure_finite, ensure_positive, PhysicsError};
use crate::types::{ensure_finite_vec, Vec2};

/// Stable handle returned by [`crate::Engine::add_body`]. Never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u64);

impl BodyId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Never moves; only acts as an obstacle.
    Static,
    /// Updated by gravity and collision response.
    Dynamic,
}

/// Shape tag, for dispatch and for renderers that only need to know what to draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Segment,
    Rectangle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    center: Vec2,
    radius: f32,
    velocity: Vec2,
    restitution: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32, velocity: Vec2, restitution: f32) -> Result<Self, PhysicsError> {
        ensure_finite_vec("circle center", center)?;
        ensure_positive("circle radius", radius)?;
        ensure_finite_vec("circle velocity", velocity)?;
        ensure_finite("restitution", restitution)?;
        if !(0.0..=1.0).contains(&restitution) {
            return Err(PhysicsError::invalid(format!(
                "restitution must lie in [0, 1], got {restitution}"
            )));
        }
        Ok(Self { center, radius, velocity, restitution })
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[must_use]
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Inject a velocity between steps. Ignored by the integrator for static circles.
    pub fn set_velocity(&mut self, velocity: Vec2) -> Result<(), PhysicsError> {
        ensure_finite_vec("circle velocity", velocity)?;
        self.velocity = velocity;
        Ok(())
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.center = self.center + offset;
    }

    pub(crate) fn set_velocity_unchecked(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    p1: Vec2,
    p2: Vec2,
}

impl Segment {
    pub fn new(p1: Vec2, p2: Vec2) -> Result<Self, PhysicsError> {
        ensure_finite_vec("segment p1", p1)?;
        ensure_finite_vec("segment p2", p2)?;
        Ok(Self { p1, p2 })
    }

    #[must_use]
    pub fn p1(&self) -> Vec2 {
        self.p1
    }

    #[must_use]
    pub fn p2(&self) -> Vec2 {
        self.p2
    }

    /// Vector from `p1` to `p2`.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        self.p2 - self.p1
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    origin: Vec2,
    width: f32,
    height: f32,
}

impl Rectangle {
    pub fn new(origin: Vec2, width: f32, height: f32) -> Result<Self, PhysicsError> {
        ensure_finite_vec("rectangle origin", origin)?;
        ensure_positive("rectangle width", width)?;
        ensure_positive("rectangle height", height)?;
        Ok(Self { origin, width, height })
    }

    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.origin.x + self.width, self.origin.y + self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Segment(Segment),
    Rectangle(Rectangle),
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    shape: Shape,
    motion: Motion,
}

impl Body {
    /// Fails with [`PhysicsError::InvalidArgument`] when a non-circle is asked to be dynamic.
    pub fn new(shape: Shape, motion: Motion) -> Result<Self, PhysicsError> {
        if motion == Motion::Dynamic && shape.kind() != ShapeKind::Circle {
            return Err(PhysicsError::invalid(format!(
                "{:?} bodies are always static",
                shape.kind()
            )));
        }
        Ok(Self { shape, motion })
    }

    pub fn circle(
        center: Vec2,
        radius: f32,
        motion: Motion,
        velocity: Vec2,
        restitution: f32,
    ) -> Result<Self, PhysicsError> {
        Self::new(Shape::Circle(Circle::new(center, radius, velocity, restitution)?), motion)
    }

    pub fn segment(p1: Vec2, p2: Vec2) -> Result<Self, PhysicsError> {
        Self::new(Shape::Segment(Segment::new(p1, p2)?), Motion::Static)
    }

    pub fn rectangle(origin: Vec2, width: f32, height: f32) -> Result<Self, PhysicsError> {
        Self::new(Shape::Rectangle(Rectangle::new(origin, width, height)?), Motion::Static)
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.motion == Motion::Dynamic
    }

    /// Circle center, segment `p1`, or rectangle top-left corner.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        match &self.shape {
            Shape::Circle(c) => c.center(),
            Shape::Segment(s) => s.p1(),
            Shape::Rectangle(r) => r.origin(),
        }
    }

    /// `None` for shapes that carry no velocity.
    #[must_use]
    pub fn velocity(&self) -> Option<Vec2> {
        self.as_circle().map(Circle::velocity)
    }

    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match &self.shape {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match &mut self.shape {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    #[cfg(test)]
    pub(crate) fn force_dynamic_for_test(&mut self) {
        self.motion = Motion::Dynamic;
    }
}
