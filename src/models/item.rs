//! Item DTOs
//!
//! Defines the structure of the item payload returned by the endpoint.

use serde::{Deserialize, Serialize};

/// A single item as returned by the endpoint.
///
/// # Fields
/// - `id`: Unique item identifier
/// - `name`: Display name
/// - `active`: Whether the item is currently active
/// - `score`: Optional numeric score used for thresholds and sorting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Activity flag
    pub active: bool,
    /// Optional score
    #[serde(default)]
    pub score: Option<f64>,
}

/// The expected response shape: an object wrapping the item list.
///
/// A 2xx body that does not deserialize into this shape is treated as
/// malformed and consumes a retry attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsPayload {
    /// The fetched items
    pub items: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialize() {
        let json = r#"{"id": 1, "name": "alpha", "active": true, "score": 9.5}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "alpha");
        assert!(item.active);
        assert_eq!(item.score, Some(9.5));
    }

    #[test]
    fn test_item_deserialize_without_score() {
        let json = r#"{"id": 2, "name": "beta", "active": false}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.score.is_none());
    }

    #[test]
    fn test_payload_deserialize() {
        let json = r#"{"items": [{"id": 1, "name": "alpha", "active": true}]}"#;
        let payload: ItemsPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.items.len(), 1);
    }

    #[test]
    fn test_payload_missing_items_is_error() {
        let json = r#"{"results": []}"#;
        let result: Result<ItemsPayload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
