//! Inventory item entity
//!
//! `InventoryItem` is what the entity store holds; `ItemSnapshot` is the
//! serialized view handed to clients and kept in the cache.

use serde::{Deserialize, Serialize};

/// A persisted inventory item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    /// Store-assigned identity, never reused
    pub id: i64,
    /// Item name, unique across the store
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Units in stock, never negative once validated
    pub stock_count: i64,
}

impl InventoryItem {
    /// Overwrites every mutable field (full replace, no merge).
    pub fn apply(&mut self, fields: NewItem) {
        self.name = fields.name;
        self.description = fields.description;
        self.stock_count = fields.stock_count;
    }

    /// Serializable view of this item.
    pub fn snapshot(&self) -> ItemSnapshot {
        ItemSnapshot::from(self)
    }
}

/// Field values for an item that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub stock_count: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, stock_count: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stock_count,
        }
    }
}

/// Wire representation of an item: `{id, name, description, stock_count}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub stock_count: i64,
}

impl From<&InventoryItem> for ItemSnapshot {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            stock_count: item.stock_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> InventoryItem {
        InventoryItem {
            id: 7,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            stock_count: 10,
        }
    }

    #[test]
    fn test_apply_replaces_all_fields() {
        let mut item = widget();
        item.apply(NewItem::new("Gadget", "A gadget", 0));

        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Gadget");
        assert_eq!(item.description, "A gadget");
        assert_eq!(item.stock_count, 0);
    }

    #[test]
    fn test_snapshot_serialize_shape() {
        let json = serde_json::to_value(widget().snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Widget",
                "description": "A widget",
                "stock_count": 10
            })
        );
    }
}
