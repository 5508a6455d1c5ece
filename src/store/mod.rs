//! Entity Store
//!
//! Persistence boundary for inventory items. Handlers only see the
//! `ItemStore` trait, so backends and test doubles are interchangeable.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{InventoryItem, NewItem};

pub mod memory;

pub use memory::MemoryItemStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item not found: {0}")]
    NotFound(i64),
    /// Name uniqueness violated; carries the conflicting name
    #[error("conflict: an item named '{0}' already exists")]
    Conflict(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persists a new item and assigns its id.
    ///
    /// Fails with `Conflict` if another item already has the same name.
    async fn create(&self, item: NewItem) -> StoreResult<InventoryItem>;

    async fn get(&self, id: i64) -> StoreResult<Option<InventoryItem>>;

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<InventoryItem>>;

    /// Writes every field of `item` over the stored row with the same id.
    async fn update(&self, item: InventoryItem) -> StoreResult<InventoryItem>;

    async fn delete(&self, id: i64) -> StoreResult<()>;

    async fn count(&self) -> StoreResult<usize>;

    fn backend_name(&self) -> &'static str;
}
