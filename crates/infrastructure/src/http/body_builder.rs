//! HTTP request body encoding.
//!
//! Turns the domain [`RequestBody`] into the bytes and content type a
//! transport puts on the wire.

use graphlink_domain::RequestBody;

/// Error type for body building operations.
#[derive(Debug, thiserror::Error)]
pub enum BodyBuildError {
    /// Serialization error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Encoder message.
        message: String,
    },
}

/// Result of building a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltBody {
    /// No body.
    None,
    /// Encoded text body with its content type.
    Text {
        /// Encoded body.
        content: String,
        /// Content-Type header value.
        content_type: &'static str,
    },
}

impl BuiltBody {
    /// Get the Content-Type header value.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Text { content_type, .. } => Some(*content_type),
            Self::None => None,
        }
    }

    /// Check if this body is empty/none.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Encodes a request body.
///
/// Form bodies become `application/x-www-form-urlencoded` text in field
/// order.
///
/// # Errors
///
/// Returns [`BodyBuildError::SerializationError`] if encoding fails.
pub fn build_body(body: &RequestBody) -> Result<BuiltBody, BodyBuildError> {
    match body {
        RequestBody::None => Ok(BuiltBody::None),

        RequestBody::Form(form) => {
            let encoded = serde_urlencoded::to_string(form.to_pairs()).map_err(|e| {
                BodyBuildError::SerializationError {
                    message: e.to_string(),
                }
            })?;
            Ok(BuiltBody::Text {
                content: encoded,
                content_type: "application/x-www-form-urlencoded",
            })
        }
    }
}
