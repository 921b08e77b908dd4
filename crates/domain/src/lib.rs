//! Graphlink Domain - Core Graph API types
//!
//! This crate defines the data model for the commerce Graph API client:
//! requests, raw responses, events, item batches and response views.
//! All types here are pure Rust with no I/O dependencies.

pub mod batch;
pub mod credential;
pub mod error;
pub mod event;
pub mod graph;
pub mod id;
pub mod request;
pub mod response;
pub mod settings;

pub use batch::{BatchEnvelope, BatchMethod, BatchRequestItem};
pub use credential::ApiCredential;
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use graph::{
    BatchRequestStatus, BatchStatusEntry, Catalog, GraphUser, ItemsBatchHandles, Page,
    PixelEventsReceipt, ProductIds, SuccessResult,
};
pub use id::generate_event_id;
pub use request::{Endpoint, FormBody, HttpMethod, QueryParams, RequestBody, RequestSpec};
pub use response::{RawResponse, StatusCode};
pub use settings::GraphApiSettings;
