//! Transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port using the reqwest library.
//! One `send` is one HTTP exchange; it never retries.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use tracing::debug;

use graphlink_application::ports::{Transport, TransportError};
use graphlink_domain::{HttpMethod, RawResponse, RequestSpec};

use crate::http::{BuiltBody, build_body};

/// Redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Graph API transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport with the given request timeout.
    ///
    /// Redirects are followed up to 10 times and TLS certificates are
    /// verified.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Other`] if the client cannot be created.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("graphlink/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        let host = || {
            error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_connect() {
            let message = error.to_string();
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return TransportError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lower.contains("refused") {
                return TransportError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(443),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return TransportError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &RequestSpec) -> Result<RawResponse, TransportError> {
        let url = Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);

        for header in request.headers.iter() {
            builder = builder.header(&header.name, &header.value);
        }

        match build_body(&request.body).map_err(|e| TransportError::InvalidBody(e.to_string()))? {
            BuiltBody::None => {}
            BuiltBody::Text {
                content,
                content_type,
            } => {
                if request.header("Content-Type").is_none() {
                    builder = builder.header("Content-Type", content_type);
                }
                builder = builder.body(content);
            }
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_ms()))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Other(format!("Failed to read body: {e}")))?;

        debug!(status, bytes = body.len(), "Response received");

        Ok(RawResponse::new(status, headers, body))
    }
}
