//! Product item batch types for the `items_batch` endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Item type sent when the caller does not choose one.
pub const DEFAULT_ITEM_TYPE: &str = "PRODUCT_ITEM";

/// Operation applied to a single catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BatchMethod {
    /// Update the item, or create it when the envelope allows upserts.
    Update,
    /// Delete the item.
    Delete,
}

impl BatchMethod {
    /// Returns the wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for BatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_uppercase().as_str() {
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(DomainError::UnsupportedBatchMethod(other.to_string())),
        }
    }
}

/// One item operation inside a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequestItem {
    /// Operation to apply.
    pub method: BatchMethod,
    /// Item fields (`id`, `title`, `price`, ...).
    pub data: Map<String, Value>,
}

impl BatchRequestItem {
    /// Creates an `UPDATE` item.
    #[must_use]
    pub const fn update(data: Map<String, Value>) -> Self {
        Self {
            method: BatchMethod::Update,
            data,
        }
    }

    /// Creates a `DELETE` item for the given retailer id.
    #[must_use]
    pub fn delete(retailer_id: impl Into<String>) -> Self {
        let mut data = Map::new();
        data.insert("id".to_string(), Value::String(retailer_id.into()));
        Self {
            method: BatchMethod::Delete,
            data,
        }
    }
}

/// A single request bundling several item operations.
///
/// On the wire `requests` travels as a JSON string inside a form body; that
/// encoding is applied when the request is built, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEnvelope {
    /// Whether `UPDATE` may create items that do not exist yet.
    pub allow_upsert: bool,
    /// Item operations, in order.
    pub requests: Vec<BatchRequestItem>,
    /// Catalog item type.
    #[serde(default = "default_item_type")]
    pub item_type: String,
}

fn default_item_type() -> String {
    DEFAULT_ITEM_TYPE.to_string()
}

impl BatchEnvelope {
    /// Creates an upserting envelope for product items.
    #[must_use]
    pub fn new(requests: Vec<BatchRequestItem>) -> Self {
        Self {
            allow_upsert: true,
            requests,
            item_type: default_item_type(),
        }
    }

    /// Returns the number of item operations.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true if the envelope carries no operations.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_method_wire_names() {
        assert_eq!(serde_json::to_value(BatchMethod::Update).unwrap(), json!("UPDATE"));
        assert_eq!("delete".parse::<BatchMethod>().unwrap(), BatchMethod::Delete);
        assert!("PATCH".parse::<BatchMethod>().is_err());
        assert!("CREATE".parse::<BatchMethod>().is_err());
        assert!(serde_json::from_value::<BatchMethod>(json!("CREATE")).is_err());
    }

    #[test]
    fn test_envelope_defaults() {
        let envelope = BatchEnvelope::new(vec![BatchRequestItem::delete("woo-belt_17")]);

        assert!(envelope.allow_upsert);
        assert_eq!(envelope.item_type, DEFAULT_ITEM_TYPE);
        assert_eq!(envelope.len(), 1);
    }

    #[test]
    fn test_item_serialization() {
        let item = BatchRequestItem::delete("woo-belt_17");
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"method": "DELETE", "data": {"id": "woo-belt_17"}})
        );
    }

    #[test]
    fn test_envelope_item_type_defaults_on_deserialize() {
        let envelope: BatchEnvelope =
            serde_json::from_value(json!({"allow_upsert": false, "requests": []})).unwrap();
        assert_eq!(envelope.item_type, "PRODUCT_ITEM");
        assert!(envelope.is_empty());
    }
}
