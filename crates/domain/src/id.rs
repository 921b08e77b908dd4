//! ID generation utilities.

use uuid::Uuid;

/// Generates a new event identifier.
///
/// Event ids are UUID v7 strings, so ids created by one process sort by
/// creation time. The remote side uses them to deduplicate events sent from
/// both the browser pixel and the server.
#[must_use]
pub fn generate_event_id() -> String {
    Uuid::now_v7().to_string()
}
