//! Item Cache
//!
//! Read-through snapshot cache for inventory items. Snapshots are stored
//! as JSON text under `inventory_item_<id>` in the shared `CacheStore`.
//! Caching is best-effort: engine refusals and undecodable entries are
//! logged and otherwise ignored.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::models::ItemSnapshot;

/// Prefix shared by every item cache key
pub const CACHE_KEY_PREFIX: &str = "inventory_item";

#[derive(Clone)]
pub struct ItemCache {
    store: Arc<RwLock<CacheStore>>,
}

impl ItemCache {
    pub fn new(store: Arc<RwLock<CacheStore>>) -> Self {
        Self { store }
    }

    /// Cache key for an item id, e.g. `inventory_item_42`.
    pub fn key(id: i64) -> String {
        format!("{CACHE_KEY_PREFIX}_{id}")
    }

    /// Handle to the underlying engine (shared with the cleanup task).
    pub fn engine(&self) -> Arc<RwLock<CacheStore>> {
        self.store.clone()
    }

    pub async fn get(&self, id: i64) -> Option<ItemSnapshot> {
        let key = Self::key(id);
        // Write lock: a read updates LRU order and hit/miss counters
        let raw = self.store.write().await.get(&key)?;

        match serde_json::from_str(&raw) {
            Ok(snapshot) => {
                debug!("cache hit for {}", key);
                Some(snapshot)
            }
            Err(err) => {
                warn!("dropping undecodable cache entry {}: {}", key, err);
                self.store.write().await.delete(&key);
                None
            }
        }
    }

    pub async fn put(&self, snapshot: &ItemSnapshot) {
        let key = Self::key(snapshot.id);
        let raw = match serde_json::to_string(snapshot) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("failed to serialize snapshot for {}: {}", key, err);
                return;
            }
        };

        debug!("setting up cache for {}", key);
        if let Err(err) = self.store.write().await.set(key.clone(), raw, None) {
            warn!("cache refused {}: {}", key, err);
        }
    }

    /// Drops any cached snapshot for `id`; returns whether one was present.
    pub async fn invalidate(&self, id: i64) -> bool {
        let key = Self::key(id);
        let removed = self.store.write().await.delete(&key);
        if removed {
            debug!("invalidated cache entry {}", key);
        }
        removed
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}
