//! Graphlink Application - Graph API client core
//!
//! This crate holds the client logic and the ports it talks through.
//! It depends only on the domain crate; transports are supplied by the host
//! or by the infrastructure crate.

pub mod error;
pub mod graph;
pub mod ports;

pub use error::{GraphApiError, GraphApiResult};
pub use graph::GraphApiClient;
pub use ports::{PayloadMutator, Transport, TransportError};
