//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Transport concerns (body reads, status codes) belong to the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The echo format segment was neither `string` nor `json`.
    #[error("unknown echo format: {0}")]
    UnknownFormat(String),

    /// A payload could not be decoded into the requested record shape.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl DomainError {
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFormat(format.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
