//! Layered configuration: an optional TOML file, then `GRAPHLINK_*`
//! environment variables on top.

use std::path::Path;
use std::time::Duration;

use ::config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use graphlink_domain::GraphApiSettings;

/// Prefix of the environment variables read by [`load_config`].
pub const ENV_PREFIX: &str = "GRAPHLINK";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or a value had the wrong type.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// No access token in any source.
    #[error("Missing access token (set access_token or {ENV_PREFIX}_ACCESS_TOKEN)")]
    MissingAccessToken,
}

/// Everything the binary needs to build a client.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Graph API access token.
    #[serde(default)]
    pub access_token: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    api_version: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    platform_version: Option<String>,
    #[serde(default)]
    plugin_version: Option<String>,
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl AppConfig {
    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the Graph API settings, with defaults for anything unset.
    #[must_use]
    pub fn graph_settings(&self) -> GraphApiSettings {
        let defaults = GraphApiSettings::default();
        GraphApiSettings {
            api_version: self.api_version.clone().unwrap_or(defaults.api_version),
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            platform: self.platform.clone().unwrap_or(defaults.platform),
            platform_version: self
                .platform_version
                .clone()
                .unwrap_or(defaults.platform_version),
            plugin_version: self.plugin_version.clone().unwrap_or(defaults.plugin_version),
        }
    }
}

/// Loads configuration from `path` (if given and present) and the
/// environment. Environment variables win over the file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingAccessToken`] if no non-blank token is
/// configured, or [`ConfigError::Load`] if a source is unreadable.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_from(path, Environment::with_prefix(ENV_PREFIX))
}

fn load_from(path: Option<&Path>, env: Environment) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        debug!(path = %path.display(), "Reading configuration file");
        builder = builder.add_source(File::from(path).required(false));
    }

    let config: AppConfig = builder.add_source(env).build()?.try_deserialize()?;

    if config.access_token.trim().is_empty() {
        return Err(ConfigError::MissingAccessToken);
    }
    Ok(config)
}
