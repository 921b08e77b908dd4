//! Inbound response types.

mod spec;

pub use spec::{RawResponse, StatusCode};
