//! Graph API error taxonomy
//!
//! Every operation fails with one [`GraphApiError`], whatever went wrong:
//! the send step, the body, or the remote API itself.

use thiserror::Error;
use graphlink_domain::DomainError;

use crate::ports::TransportError;

/// Code used when a transport failure carries no code of its own.
pub const GENERIC_ERROR_CODE: i64 = 0;

/// Code used for unparsable bodies (the conventional JSON syntax-error code).
pub const JSON_SYNTAX_ERROR_CODE: i64 = 4;

/// Remote codes meaning the access token is invalid or expired.
const AUTHENTICATION_CODES: [i64; 2] = [102, 190];

/// Remote code for a missing permission; 200-299 are permission codes too.
const PERMISSION_CODE: i64 = 10;

/// Failure of a Graph API operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphApiError {
    /// The send step could not complete; there was no HTTP exchange.
    #[error("transport error {code}: {message}")]
    Transport {
        /// Transport code, or [`GENERIC_ERROR_CODE`].
        code: i64,
        /// Transport message.
        message: String,
    },

    /// The body could not be parsed, or did not have the expected shape.
    #[error("{message}")]
    MalformedResponse {
        /// [`JSON_SYNTAX_ERROR_CODE`] for unparsable bodies.
        code: i64,
        /// Parse diagnostic; contains "Syntax error" for unparsable bodies.
        message: String,
    },

    /// The body parsed and carried a top-level `error` object.
    #[error("Graph API error {code}: {message}")]
    Remote {
        /// `error.code`.
        code: i64,
        /// `error.error_subcode`.
        subcode: Option<i64>,
        /// `error.message`.
        message: String,
        /// `error.type` (e.g. `OAuthException`).
        error_type: Option<String>,
        /// `error.fbtrace_id`.
        fbtrace_id: Option<String>,
    },

    /// Caller input could not be turned into a request; nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] DomainError),
}

impl GraphApiError {
    /// Creates a malformed-body error for a body that is not valid JSON.
    #[must_use]
    pub fn syntax_error(detail: impl std::fmt::Display) -> Self {
        Self::MalformedResponse {
            code: JSON_SYNTAX_ERROR_CODE,
            message: format!("Syntax error: {detail}"),
        }
    }

    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Transport { code, .. }
            | Self::MalformedResponse { code, .. }
            | Self::Remote { code, .. } => *code,
            Self::InvalidRequest(_) => GENERIC_ERROR_CODE,
        }
    }

    /// Returns the error subcode, if the remote API sent one.
    #[must_use]
    pub const fn subcode(&self) -> Option<i64> {
        match self {
            Self::Remote { subcode, .. } => *subcode,
            _ => None,
        }
    }

    /// Returns the error message without any prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Transport { message, .. }
            | Self::MalformedResponse { message, .. }
            | Self::Remote { message, .. } => message.clone(),
            Self::InvalidRequest(err) => err.to_string(),
        }
    }

    /// Returns true if the remote API rejected the access token.
    #[must_use]
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::Remote { code, .. } if AUTHENTICATION_CODES.contains(code))
    }

    /// Returns true if the token lacks a permission the call needs.
    #[must_use]
    pub const fn is_permission_failure(&self) -> bool {
        matches!(
            self,
            Self::Remote { code, .. } if *code == PERMISSION_CODE || (*code >= 200 && *code <= 299)
        )
    }
}

impl From<TransportError> for GraphApiError {
    fn from(err: TransportError) -> Self {
        Self::Transport {
            code: err.code().unwrap_or(GENERIC_ERROR_CODE),
            message: err.message(),
        }
    }
}

/// Result type alias for Graph API operations.
pub type GraphApiResult<T> = Result<T, GraphApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn remote(code: i64) -> GraphApiError {
        GraphApiError::Remote {
            code,
            subcode: None,
            message: "message".to_string(),
            error_type: None,
            fbtrace_id: None,
        }
    }

    #[test]
    fn test_transport_conversion_keeps_code() {
        let err = GraphApiError::from(TransportError::reported(7, "WP Error Message"));
        assert_eq!(err.code(), 7);
        assert_eq!(err.message(), "WP Error Message");
    }

    #[test]
    fn test_transport_conversion_defaults_code() {
        let err = GraphApiError::from(TransportError::ConnectionFailed("reset".to_string()));
        assert_eq!(err.code(), GENERIC_ERROR_CODE);
        assert_eq!(err.message(), "connection failed: reset");
    }

    #[test]
    fn test_syntax_error_message() {
        let err = GraphApiError::syntax_error("EOF while parsing a value");
        assert_eq!(err.code(), JSON_SYNTAX_ERROR_CODE);
        assert!(err.to_string().contains("Syntax error"));
    }

    #[test]
    fn test_failure_classification() {
        assert!(remote(190).is_authentication_failure());
        assert!(remote(102).is_authentication_failure());
        assert!(!remote(190).is_permission_failure());

        assert!(remote(10).is_permission_failure());
        assert!(remote(200).is_permission_failure());
        assert!(remote(299).is_permission_failure());

        assert!(!remote(100).is_authentication_failure());
        assert!(!remote(100).is_permission_failure());
    }

    #[test]
    fn test_subcode_only_on_remote() {
        let err = GraphApiError::Remote {
            code: 190,
            subcode: Some(463),
            message: "Session has expired".to_string(),
            error_type: Some("OAuthException".to_string()),
            fbtrace_id: None,
        };
        assert_eq!(err.subcode(), Some(463));
        assert_eq!(GraphApiError::syntax_error("x").subcode(), None);
    }
}
