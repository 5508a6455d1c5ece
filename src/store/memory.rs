//! In-memory implementation of the entity store.
//!
//! Rows, the name index and the id counter share one `RwLock`, so the
//! uniqueness check and the write it guards happen under the same guard.
//! Not durable: all state is lost on process restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ItemStore, StoreError, StoreResult};
use crate::models::{InventoryItem, NewItem};

#[derive(Debug)]
struct Tables {
    items: HashMap<i64, InventoryItem>,
    /// Unique index: name -> id
    names: HashMap<String, i64>,
    next_id: i64,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            names: HashMap::new(),
            next_id: 1,
        }
    }
}

/// Inventory table held in process memory.
///
/// Cloning is cheap and every clone sees the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, item: NewItem) -> StoreResult<InventoryItem> {
        let mut tables = self.tables.write().await;
        if tables.names.contains_key(&item.name) {
            return Err(StoreError::Conflict(item.name));
        }

        let id = tables.next_id;
        tables.next_id += 1;

        let row = InventoryItem {
            id,
            name: item.name,
            description: item.description,
            stock_count: item.stock_count,
        };
        tables.names.insert(row.name.clone(), id);
        tables.items.insert(id, row.clone());
        debug!("inserted inventory row id={}", id);
        Ok(row)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<InventoryItem>> {
        let tables = self.tables.read().await;
        Ok(tables.items.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<InventoryItem>> {
        let tables = self.tables.read().await;
        Ok(tables
            .names
            .get(name)
            .and_then(|id| tables.items.get(id))
            .cloned())
    }

    async fn update(&self, item: InventoryItem) -> StoreResult<InventoryItem> {
        let mut tables = self.tables.write().await;
        let previous_name = match tables.items.get(&item.id) {
            Some(existing) => existing.name.clone(),
            None => return Err(StoreError::NotFound(item.id)),
        };

        if previous_name != item.name {
            if tables.names.contains_key(&item.name) {
                return Err(StoreError::Conflict(item.name));
            }
            tables.names.remove(&previous_name);
            tables.names.insert(item.name.clone(), item.id);
        }

        tables.items.insert(item.id, item.clone());
        debug!("updated inventory row id={}", item.id);
        Ok(item)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let removed = tables.items.remove(&id).ok_or(StoreError::NotFound(id))?;
        tables.names.remove(&removed.name);
        debug!("deleted inventory row id={}", id);
        Ok(())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.tables.read().await.items.len())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> NewItem {
        NewItem::new("Widget", "A widget", 10)
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = MemoryItemStore::new();

        let first = store.create(widget()).await.unwrap();
        let second = store
            .create(NewItem::new("Gadget", "A gadget", 1))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_conflicts() {
        let store = MemoryItemStore::new();
        store.create(widget()).await.unwrap();

        let result = store.create(widget()).await;
        assert!(matches!(result, Err(StoreError::Conflict(name)) if name == "Widget"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_and_find_by_name() {
        let store = MemoryItemStore::new();
        let created = store.create(widget()).await.unwrap();

        assert_eq!(store.get(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(
            store.find_by_name("Widget").await.unwrap(),
            Some(created)
        );
        assert!(store.find_by_name("Gizmo").await.unwrap().is_none());
        assert!(store.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_moves_name_index() {
        let store = MemoryItemStore::new();
        let mut item = store.create(widget()).await.unwrap();

        item.apply(NewItem::new("Gizmo", "A gizmo", 4));
        store.update(item.clone()).await.unwrap();

        assert!(store.find_by_name("Widget").await.unwrap().is_none());
        assert_eq!(store.find_by_name("Gizmo").await.unwrap(), Some(item));
    }

    #[tokio::test]
    async fn test_update_rename_onto_existing_name_conflicts() {
        let store = MemoryItemStore::new();
        store.create(widget()).await.unwrap();
        let mut gadget = store
            .create(NewItem::new("Gadget", "A gadget", 1))
            .await
            .unwrap();
        let original = gadget.clone();

        gadget.apply(NewItem::new("Widget", "Renamed", 2));
        let result = store.update(gadget).await;

        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert_eq!(store.get(original.id).await.unwrap(), Some(original));
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let store = MemoryItemStore::new();
        let ghost = InventoryItem {
            id: 42,
            name: "Ghost".to_string(),
            description: "Never stored".to_string(),
            stock_count: 0,
        };
        assert!(matches!(
            store.update(ghost).await,
            Err(StoreError::NotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_delete_frees_name_and_never_reuses_id() {
        let store = MemoryItemStore::new();
        let created = store.create(widget()).await.unwrap();

        store.delete(created.id).await.unwrap();
        assert!(store.get(created.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete(created.id).await,
            Err(StoreError::NotFound(_))
        ));

        let recreated = store.create(widget()).await.unwrap();
        assert_ne!(recreated.id, created.id);
    }
}
