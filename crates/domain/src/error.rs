//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while shaping a Graph API request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The access token is empty or otherwise unusable.
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// The configured base URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A path placeholder has no value, or the value cannot be used as a path segment.
    #[error("invalid path parameter `{name}`: {reason}")]
    InvalidPathParameter {
        /// Placeholder name from the endpoint template.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The request body could not be encoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// The batch method is not one the items batch endpoint accepts.
    #[error("unsupported batch method: {0}")]
    UnsupportedBatchMethod(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
