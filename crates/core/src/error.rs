//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the caller reports it and carries on with the
/// next menu choice. Console failures belong to the console crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (empty name, negative quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A 0-based position fell outside `[0, len)`.
    #[error("index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },

    /// Text could not be interpreted as the expected kind of value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
