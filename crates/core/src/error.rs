//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only two failure kinds exist: a value that is missing or malformed, and a
/// numeric value outside its allowed bounds. Both are raised eagerly by
/// constructors and mutating operations, never deferred.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value is missing, blank or malformed.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// A numeric value violates a bound (e.g. non-positive quantity).
    #[error("argument `{argument}` out of range: {reason}")]
    OutOfRange {
        argument: &'static str,
        reason: String,
    },
}

impl DomainError {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub fn out_of_range(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            argument,
            reason: reason.into(),
        }
    }

    /// Name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            DomainError::InvalidArgument { argument, .. }
            | DomainError::OutOfRange { argument, .. } => argument,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DomainError::InvalidArgument { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, DomainError::OutOfRange { .. })
    }
}
