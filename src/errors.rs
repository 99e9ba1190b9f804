//! Shared error types.

use thiserror::Error;

use crate::math::Scalar;

/// Errors raised by checked field computations.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FieldError {
    /// Raised when a field law is evaluated at zero distance.
    #[error("field law requires a nonzero distance, got {0} m")]
    InvalidDistance(Scalar),
}
