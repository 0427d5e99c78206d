//! Error kinds raised by geometric constructors and queries.
//!
//! Two kinds only:
//! - `TypeViolation`: an argument is not the expected kind (non-finite or
//!   unparsable coordinate, an operand pair an operation does not define).
//! - `InvariantViolation`: a structurally degenerate request (equal endpoints,
//!   too few polygon vertices, projection onto the zero vector, ...).
//!
//! Both are raised synchronously and never recovered internally.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error("type violation: {0}")]
    TypeViolation(String),
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl GeomError {
    #[inline]
    pub(crate) fn type_violation(msg: impl Into<String>) -> Self {
        GeomError::TypeViolation(msg.into())
    }

    #[inline]
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        GeomError::InvariantViolation(msg.into())
    }

    #[inline]
    pub fn is_type_violation(&self) -> bool {
        matches!(self, GeomError::TypeViolation(_))
    }

    #[inline]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, GeomError::InvariantViolation(_))
    }
}

/// Crate-wide result alias.
pub type Result<T, E = GeomError> = std::result::Result<T, E>;
