//! Error types for JQL construction and saved filters.

use thiserror::Error;

/// Top-level result type for JQL operations.
pub type Result<T> = std::result::Result<T, JqlError>;

/// Top-level error type for JQL.
///
/// Every builder error is a programmer error: a malformed call sequence,
/// reported at the point of misuse. The filter store adds the usual I/O
/// and serialization failures.
#[derive(Debug, Error)]
pub enum JqlError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("saved filter not found: {0}")]
    FilterNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl JqlError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// Whether this error signals a misuse of the builder API rather than
    /// an environmental failure.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidOperation(_))
    }
}

impl From<serde_yaml::Error> for JqlError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
