//! Transport port
//!
//! The only outward call the client makes. Hosts supply an implementation
//! wrapping their HTTP stack; the infrastructure crate ships one for reqwest.

use async_trait::async_trait;
use thiserror::Error;

use graphlink_domain::{RawResponse, RequestSpec};

/// Failure of the send step itself: no HTTP exchange completed, so there is
/// no status code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The host's transport reported a failure with its own code.
    #[error("{message}")]
    Reported {
        /// Transport-specific error code.
        code: i64,
        /// Transport-specific message.
        message: String,
    },

    /// Request timed out.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// Host name could not be resolved.
    #[error("could not resolve host {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// Remote side refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Connection could not be established for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Redirect limit exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// URL could not be used.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Body could not be encoded for sending.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Creates a failure carrying a transport-supplied code and message.
    #[must_use]
    pub fn reported(code: i64, message: impl Into<String>) -> Self {
        Self::Reported {
            code,
            message: message.into(),
        }
    }

    /// Returns the transport-supplied code, if the transport reported one.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::Reported { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the message to surface to callers.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Reported { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Port for executing a composed request.
///
/// One call is one HTTP exchange. Implementations must not retry; timeouts,
/// TLS and redirects are theirs to configure.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// Any HTTP status, including 4xx and 5xx, is a successful send.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no HTTP exchange completed.
    async fn send(&self, request: &RequestSpec) -> Result<RawResponse, TransportError>;
}
