//! Typed views over Graph API response bodies.
//!
//! Each type names the keys an operation relies on and keeps every other key
//! in `extra`, so nothing the API returns is dropped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog id.
    pub id: String,
    /// Catalog display name.
    pub name: String,
    /// Any other returned fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The user that owns the access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphUser {
    /// User id.
    pub id: String,
    /// Any other returned fields (e.g. `name`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of a delete-style call (`{"success": true}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResult {
    /// Whether the remote side applied the change.
    pub success: bool,
}

/// Handles returned by the items batch endpoint, one per accepted batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsBatchHandles {
    /// Batch handles usable with the batch status endpoint.
    pub handles: Vec<String>,
    /// Any other returned fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Receipt for a pixel events submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelEventsReceipt {
    /// Number of events the API accepted.
    pub events_received: u64,
    /// Diagnostic messages.
    #[serde(default)]
    pub messages: Vec<Value>,
    /// Trace id for support requests.
    pub fbtrace_id: String,
}

/// A Facebook page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page id.
    pub id: String,
    /// Page name.
    pub name: String,
    /// Public page URL.
    #[serde(default)]
    pub link: Option<String>,
    /// Any other returned fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Processing status of one items batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStatusEntry {
    /// Batch handle.
    pub handle: String,
    /// Status string (`started`, `finished`, ...).
    pub status: String,
    /// Per-item errors.
    #[serde(default)]
    pub errors: Vec<Value>,
    /// Per-item warnings.
    #[serde(default)]
    pub warnings: Vec<Value>,
    /// Any other returned fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the batch status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequestStatus {
    /// One entry per requested handle.
    pub data: Vec<BatchStatusEntry>,
}

impl BatchRequestStatus {
    /// Returns true once every batch has finished processing.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.data.is_empty() && self.data.iter().all(|entry| entry.status == "finished")
    }
}

/// Remote ids of a product looked up by retailer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIds {
    /// Matching products (normally zero or one).
    pub data: Vec<ProductIdEntry>,
}

/// Remote ids of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIdEntry {
    /// Product item id.
    pub id: String,
    /// Product group the item belongs to.
    #[serde(default)]
    pub product_group: Option<ProductGroupRef>,
}

/// Reference to a product group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductGroupRef {
    /// Product group id.
    pub id: String,
}

impl ProductIds {
    /// Returns the product item id of the first match.
    #[must_use]
    pub fn product_item_id(&self) -> Option<&str> {
        self.data.first().map(|entry| entry.id.as_str())
    }

    /// Returns the product group id of the first match.
    #[must_use]
    pub fn product_group_id(&self) -> Option<&str> {
        self.data
            .first()
            .and_then(|entry| entry.product_group.as_ref())
            .map(|group| group.id.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_catalog_keeps_extra_fields() {
        let catalog: Catalog = serde_json::from_value(json!({
            "name": "Facebook for WooCommerce 2 - Catalog",
            "custom": "John Doe",
            "id": "2536275516506259",
        }))
        .unwrap();

        assert_eq!(catalog.id, "2536275516506259");
        assert_eq!(catalog.name, "Facebook for WooCommerce 2 - Catalog");
        assert_eq!(catalog.extra.get("custom"), Some(&json!("John Doe")));
    }

    #[test]
    fn test_catalog_requires_name() {
        let result = serde_json::from_value::<Catalog>(json!({"id": "1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_receipt_messages_default() {
        let receipt: PixelEventsReceipt =
            serde_json::from_value(json!({"events_received": 1, "fbtrace_id": "abc"})).unwrap();
        assert_eq!(receipt.events_received, 1);
        assert!(receipt.messages.is_empty());
    }

    #[test]
    fn test_batch_status_finished() {
        let status: BatchRequestStatus = serde_json::from_value(json!({
            "data": [
                {"handle": "h1", "status": "finished", "errors": [], "warnings": []},
                {"handle": "h2", "status": "started"},
            ]
        }))
        .unwrap();
        assert!(!status.is_finished());

        let done: BatchRequestStatus = serde_json::from_value(json!({
            "data": [{"handle": "h1", "status": "finished"}]
        }))
        .unwrap();
        assert!(done.is_finished());
    }

    #[test]
    fn test_product_ids_accessors() {
        let ids: ProductIds = serde_json::from_value(json!({
            "data": [{"id": "4242", "product_group": {"id": "77"}}]
        }))
        .unwrap();
        assert_eq!(ids.product_item_id(), Some("4242"));
        assert_eq!(ids.product_group_id(), Some("77"));

        let none: ProductIds = serde_json::from_value(json!({"data": []})).unwrap();
        assert_eq!(none.product_item_id(), None);
    }
}
