//! TTL Cleanup Task
//!
//! Background task that purges expired item snapshots from the cache.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ItemCache;

/// Spawns a task that calls `cleanup_expired` on the cache engine every
/// `cleanup_interval_secs` seconds (minimum one second).
///
/// Returns the task handle so the caller can abort it at shutdown.
pub fn spawn_cleanup_task(cache: ItemCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));
    let engine = cache.engine();

    tokio::spawn(async move {
        info!(
            "Starting item cache cleanup task with interval of {:?}",
            interval
        );

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = engine.write().await.cleanup_expired();
            if removed > 0 {
                info!("Item cache cleanup: removed {} expired snapshots", removed);
            } else {
                debug!("Item cache cleanup: nothing expired");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::cache::CacheStore;
    use crate::models::ItemSnapshot;

    fn snapshot(id: i64) -> ItemSnapshot {
        ItemSnapshot {
            id,
            name: format!("Item {id}"),
            description: "cached".to_string(),
            stock_count: 1,
        }
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_snapshots() {
        // Default TTL of one second for every put
        let cache = ItemCache::new(Arc::new(RwLock::new(CacheStore::new(100, 1))));
        cache.put(&snapshot(1)).await;

        let handle = spawn_cleanup_task(cache.clone(), 1);
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Removed by the task, so a later lookup cannot be the one expiring it
        assert_eq!(cache.engine().read().await.len(), 0);
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_live_snapshots() {
        let cache = ItemCache::new(Arc::new(RwLock::new(CacheStore::new(100, 3600))));
        cache.put(&snapshot(1)).await;

        let handle = spawn_cleanup_task(cache.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(cache.get(1).await, Some(snapshot(1)));
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = ItemCache::new(Arc::new(RwLock::new(CacheStore::new(100, 300))));

        let handle = spawn_cleanup_task(cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
