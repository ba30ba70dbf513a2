//! Value types shared by every part of the engine: the 2D vector and the
//! world description.

use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{ensure_finite, ensure_positive, PhysicsError};

/// Immutable 2D vector. Every operation returns a new value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    /// Uniform scale.
    #[must_use]
    pub fn scale(self, k: f32) -> Vec2 {
        self.scale_xy(k, k)
    }

    /// Per-axis scale.
    #[must_use]
    pub fn scale_xy(self, kx: f32, ky: f32) -> Vec2 {
        Vec2::new(self.x * kx, self.y * ky)
    }

    #[must_use]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product `x * o.y - y * o.x`.
    #[must_use]
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[must_use]
    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Result<Vec2, PhysicsError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(PhysicsError::DivisionByZero("cannot normalize a zero vector"));
        }
        Ok(self.scale(1.0 / norm))
    }

    /// Orthogonal projection of `self` onto `onto`.
    pub fn project_onto(self, onto: Vec2) -> Result<Vec2, PhysicsError> {
        let denom = onto.dot(onto);
        if denom == 0.0 {
            return Err(PhysicsError::DivisionByZero("cannot project onto a zero vector"));
        }
        Ok(onto.scale(self.dot(onto) / denom))
    }

    /// Scalar `t` such that `self ≈ along * t`, measured on the dominant axis of `along`.
    ///
    /// Only meaningful when `self` is (nearly) parallel to `along`, e.g. the
    /// result of [`Vec2::project_onto`].
    pub fn divide_along(self, along: Vec2) -> Result<f32, PhysicsError> {
        if along.norm() == 0.0 {
            return Err(PhysicsError::DivisionByZero("cannot divide along a zero vector"));
        }
        if along.x.abs() >= along.y.abs() {
            Ok(self.x / along.x)
        } else {
            Ok(self.y / along.y)
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

pub(crate) fn ensure_finite_vec(name: &str, v: Vec2) -> Result<(), PhysicsError> {
    ensure_finite(&format!("{name}.x"), v.x)?;
    ensure_finite(&format!("{name}.y"), v.y)
}

/// Rectangular region dynamic circles are kept inside, plus the gravity applied to them.
///
/// `y` grows downwards: the floor is the edge at `origin.y + height`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct World {
    origin: Vec2,
    width: f32,
    height: f32,
    gravity: Vec2,
}

impl World {
    pub fn new(origin: Vec2, width: f32, height: f32, gravity: Vec2) -> Result<Self, PhysicsError> {
        ensure_finite_vec("world origin", origin)?;
        ensure_positive("world width", width)?;
        ensure_positive("world height", height)?;
        ensure_finite_vec("gravity", gravity)?;
        Ok(Self { origin, width, height, gravity })
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

    #[must_use]
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) -> Result<(), PhysicsError> {
        ensure_finite_vec("gravity", gravity)?;
        self.gravity = gravity;
        Ok(())
    }

    pub(crate) fn left(&self) -> f32 {
        self.origin.x
    }

    pub(crate) fn right(&self) -> f32 {
        self.origin.x + self.width
    }

    pub(crate) fn floor(&self) -> f32 {
        self.origin.y + self.height
    }
}
