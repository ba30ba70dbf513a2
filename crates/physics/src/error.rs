use thiserror::Error;

use crate::body::BodyId;

/// Errors raised by body construction and by [`crate::Engine::step`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A constructor was handed a value that violates a body or world invariant.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A geometric operation needed a non-zero-length vector and did not get one.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
    /// A non-static pair contained no circle. Unreachable while the
    /// dynamic-implies-circle rule holds.
    #[error("pair ({first:?}, {second:?}) has no circle operand")]
    UnresolvablePair { first: BodyId, second: BodyId },
}

impl PhysicsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PhysicsError::InvalidArgument(msg.into())
    }
}

/// Fails with [`PhysicsError::InvalidArgument`] unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f32) -> Result<(), PhysicsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::invalid(format!("{name} must be positive, got {value}")))
    }
}

pub(crate) fn ensure_finite(name: &str, value: f32) -> Result<(), PhysicsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::invalid(format!("{name} must be finite, got {value}")))
    }
}
