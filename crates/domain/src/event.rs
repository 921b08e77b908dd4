//! Pixel event records.
//!
//! An [`Event`] is built by the caller from order or page data and handed to
//! the client by reference. Sending never mutates it, so the same instance can
//! still be used for deduplication or logging afterwards.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::generate_event_id;

/// Default `action_source` for events raised by a storefront.
pub const DEFAULT_ACTION_SOURCE: &str = "website";

/// A server-side conversion event.
///
/// Holds `action_source`, `event_time`, `event_id`, `event_name`,
/// `event_source_url` and the nested `custom_data` and `user_data` maps, plus
/// anything else the caller put in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event {
    data: Map<String, Value>,
}

impl Event {
    /// Creates an event, filling in `action_source`, `event_time` and
    /// `event_id` when `data` does not provide them.
    #[must_use]
    pub fn new(mut data: Map<String, Value>) -> Self {
        data.entry("action_source")
            .or_insert_with(|| Value::from(DEFAULT_ACTION_SOURCE));
        data.entry("event_time")
            .or_insert_with(|| Value::from(Utc::now().timestamp()));
        data.entry("event_id")
            .or_insert_with(|| Value::from(generate_event_id()));
        Self { data }
    }

    /// Wraps `data` as-is, without defaults.
    #[must_use]
    pub const fn from_data(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Returns the full event mapping.
    #[must_use]
    pub const fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Returns the event name (e.g. `Purchase`).
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        self.data.get("event_name").and_then(Value::as_str)
    }

    /// Returns the event id used for deduplication.
    #[must_use]
    pub fn event_id(&self) -> Option<&str> {
        self.data.get("event_id").and_then(Value::as_str)
    }

    /// Returns the `user_data` map, if present.
    #[must_use]
    pub fn user_data(&self) -> Option<&Map<String, Value>> {
        self.data.get("user_data").and_then(Value::as_object)
    }

    /// Returns the `custom_data` map, if present.
    #[must_use]
    pub fn custom_data(&self) -> Option<&Map<String, Value>> {
        self.data.get("custom_data").and_then(Value::as_object)
    }
}

impl From<Map<String, Value>> for Event {
    fn from(data: Map<String, Value>) -> Self {
        Self::new(data)
    }
}
