//! Pixel event normalization
//!
//! Events use the host's field names; the remote schema expects `fbc` and
//! `fbp` for the click and browser identifiers.

use serde_json::{Map, Value};

use graphlink_domain::Event;

/// Renames applied inside `user_data`, as `(from, to)`.
const USER_DATA_RENAMES: [(&str, &str); 2] = [("click_id", "fbc"), ("browser_id", "fbp")];

/// Returns a copy of the event's data in the remote schema.
///
/// Only `user_data.click_id` and `user_data.browser_id` change; everything
/// else, nested maps included, is copied unchanged.
#[must_use]
pub fn normalize(event: &Event) -> Map<String, Value> {
    let mut data = event.data().clone();

    if let Some(Value::Object(user_data)) = data.get_mut("user_data") {
        for (from, to) in USER_DATA_RENAMES {
            if let Some(value) = user_data.shift_remove(from) {
                user_data.insert(to.to_string(), value);
            }
        }
    }

    data
}

/// Builds the pixel events payload:
/// `{ "data": [...normalized events], "partner_agent": "..." }`.
#[must_use]
pub fn events_payload(events: &[Event], partner_agent: &str) -> Map<String, Value> {
    let data = events.iter().map(|e| Value::Object(normalize(e))).collect();

    let mut payload = Map::new();
    payload.insert("data".to_string(), Value::Array(data));
    payload.insert(
        "partner_agent".to_string(),
        Value::String(partner_agent.to_string()),
    );
    payload
}
