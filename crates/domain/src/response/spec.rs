//! Raw response type
//!
//! What a transport hands back after a completed HTTP exchange: status code,
//! headers and the undecoded body.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// 200 OK.
    pub const OK: Self = Self(200);

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns the canonical reason phrase for the statuses the Graph API uses.
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            429 => "Too Many Requests",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            504 => "Gateway Timeout",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Result of a completed HTTP exchange, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Raw response body.
    #[serde(default)]
    pub body: String,
}

impl RawResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(
        status: impl Into<StatusCode>,
        headers: HashMap<String, String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            headers,
            body: body.into(),
        }
    }

    /// Creates a response with a status and body and no headers.
    #[must_use]
    pub fn with_body(status: impl Into<StatusCode>, body: impl Into<String>) -> Self {
        Self::new(status, HashMap::new(), body)
    }

    /// Gets a header value (case-insensitive lookup).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
