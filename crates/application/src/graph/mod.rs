//! Graph API core: request composition, response decoding, event
//! normalization and the client that ties them together.

pub mod client;
pub mod decoder;
pub mod normalizer;
pub mod request_builder;

pub use client::GraphApiClient;
pub use decoder::{DecodedBody, decode, project};
pub use normalizer::{events_payload, normalize};
pub use request_builder::RequestBuilder;
