//! Graph API settings
//!
//! Read-only configuration the client consumes: API version, base host and
//! the version strings that make up the partner agent.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Graph API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "v12.0";

/// Graph API host used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";

/// Platform name used in the partner agent.
pub const DEFAULT_PLATFORM: &str = "woocommerce";

/// Settings shared by every request a client makes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphApiSettings {
    /// API version path segment, e.g. `v12.0`.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Scheme and host of the Graph API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hosting platform name.
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Hosting platform version.
    #[serde(default)]
    pub platform_version: String,

    /// Integration version.
    #[serde(default = "default_plugin_version")]
    pub plugin_version: String,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

fn default_plugin_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for GraphApiSettings {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            base_url: default_base_url(),
            platform: default_platform(),
            platform_version: String::new(),
            plugin_version: default_plugin_version(),
        }
    }
}

impl GraphApiSettings {
    /// Returns the version-identifying string attached to event submissions:
    /// `{platform}-{platform_version}-{plugin_version}`.
    #[must_use]
    pub fn partner_agent(&self) -> String {
        format!(
            "{}-{}-{}",
            self.platform, self.platform_version, self.plugin_version
        )
    }

    /// Returns `{base_url}/{api_version}` without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the base URL is not an absolute
    /// http(s) URL or the version is empty.
    pub fn versioned_base(&self) -> DomainResult<String> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme `{}` in {}",
                parsed.scheme(),
                self.base_url
            )));
        }
        let version = self.api_version.trim_matches('/');
        if version.is_empty() {
            return Err(DomainError::InvalidUrl(
                "API version must not be empty".to_string(),
            ));
        }
        Ok(format!("{}/{version}", self.base_url.trim_end_matches('/')))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_settings() {
        let settings = GraphApiSettings::default();
        assert_eq!(settings.api_version, "v12.0");
        assert_eq!(settings.base_url, "https://graph.facebook.com");
        assert_eq!(settings.platform, "woocommerce");
    }

    #[test]
    fn partner_agent_format() {
        let settings = GraphApiSettings {
            platform_version: "6.5.1".to_string(),
            plugin_version: "2.6.13".to_string(),
            ..GraphApiSettings::default()
        };
        assert_eq!(settings.partner_agent(), "woocommerce-6.5.1-2.6.13");
    }

    #[test]
    fn versioned_base_trims_slashes() {
        let settings = GraphApiSettings {
            base_url: "http://127.0.0.1:8080/".to_string(),
            api_version: "v13.0".to_string(),
            ..GraphApiSettings::default()
        };
        assert_eq!(settings.versioned_base().unwrap(), "http://127.0.0.1:8080/v13.0");
    }

    #[test]
    fn versioned_base_rejects_bad_input() {
        let bad_url = GraphApiSettings {
            base_url: "not a url".to_string(),
            ..GraphApiSettings::default()
        };
        assert!(bad_url.versioned_base().is_err());

        let bad_scheme = GraphApiSettings {
            base_url: "ftp://graph.facebook.com".to_string(),
            ..GraphApiSettings::default()
        };
        assert!(bad_scheme.versioned_base().is_err());

        let no_version = GraphApiSettings {
            api_version: String::new(),
            ..GraphApiSettings::default()
        };
        assert!(no_version.versioned_base().is_err());
    }

    #[test]
    fn deserialize_applies_defaults() {
        let settings: GraphApiSettings =
            serde_json::from_str(r#"{"platform_version": "8.0.0"}"#).unwrap();
        assert_eq!(settings.api_version, DEFAULT_API_VERSION);
        assert_eq!(settings.platform_version, "8.0.0");
    }
}
