//! Access token handling.

use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Opaque Graph API access token.
///
/// The token is fixed for the lifetime of the client that owns it and is only
/// ever exposed through [`ApiCredential::authorization_value`]. `Debug` output
/// is redacted so the credential never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential {
    token: String,
}

impl ApiCredential {
    /// Wraps an access token.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCredential`] if the token is blank.
    pub fn new(token: impl Into<String>) -> DomainResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DomainError::InvalidCredential(
                "access token must not be empty".to_string(),
            ));
        }
        Ok(Self { token })
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_authorization_value() {
        let credential = ApiCredential::new("test-api-key-9678djyad552").unwrap();
        assert_eq!(
            credential.authorization_value(),
            "Bearer test-api-key-9678djyad552"
        );
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(
            ApiCredential::new("   "),
            Err(DomainError::InvalidCredential(_))
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = ApiCredential::new("super-secret").unwrap();
        let debug = format!("{credential:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
