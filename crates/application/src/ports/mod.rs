//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and its host.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer
//! or by the embedding application.

mod payload_mutator;
mod transport;

pub use payload_mutator::PayloadMutator;
pub use transport::{Transport, TransportError};
