//! Graphlink Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod http;
pub mod settings;

pub use adapters::{DEFAULT_TIMEOUT, ReqwestTransport};
pub use http::{BodyBuildError, BuiltBody, build_body};
pub use settings::{AppConfig, ConfigError, load_config};
