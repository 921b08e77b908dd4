//! Application configuration loading.

mod loader;

pub use loader::{AppConfig, ConfigError, ENV_PREFIX, load_config};
