//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The inventory model rejects bad input at the call that receives it and never
/// changes state when it does. There is one kind of failure; the message names
/// the offending field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (blank string, negative number,
    /// out-of-range percentage, non-positive quantity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The human-readable reason carried by the error.
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument(msg) => msg,
        }
    }
}
