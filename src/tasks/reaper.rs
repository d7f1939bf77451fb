//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps expired entries out of the store.
///
/// The task runs in an infinite loop, sleeping for `interval` between
/// sweeps. Each sweep takes the exclusive lock and scans every entry,
/// removing the ones whose age exceeds `interval` — the same duration
/// serves as expiry window and polling period. An entry created right
/// after a tick therefore survives up to just under two intervals.
///
/// # Arguments
/// * `store` - Shared reference to the entry storage
/// * `interval` - Expiry window and sweep period
///
/// # Returns
/// A JoinHandle for the spawned task. The owning cache handle aborts it
/// on shutdown or drop.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new()));
/// let reaper = spawn_reaper_task(store.clone(), Duration::from_secs(20));
/// // Later, on shutdown:
/// reaper.abort();
/// ```
pub fn spawn_reaper_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("starting cache reaper with interval of {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire the exclusive lock and sweep expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.reap(interval)
            };

            if removed > 0 {
                info!("reaper: removed {} expired entries", removed);
            } else {
                debug!("reaper: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reaper_removes_expired_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new()));

        {
            let mut store_guard = store.write().await;
            store_guard.add("expire_soon".to_string(), b"value".to_vec());
        }

        // Sweep every 50ms; the entry expires after the first tick and is
        // gone by the second.
        let handle = spawn_reaper_task(store.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(150)).await;

        {
            let store_guard = store.read().await;
            assert!(
                store_guard.get("expire_soon").is_none(),
                "Expired entry should have been reaped"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_preserves_fresh_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new()));

        let handle = spawn_reaper_task(store.clone(), Duration::from_secs(3600));

        {
            let mut store_guard = store.write().await;
            store_guard.add("long_lived".to_string(), b"value".to_vec());
        }

        tokio::time::sleep(Duration::from_millis(100)).await;

        {
            let store_guard = store.read().await;
            assert_eq!(
                store_guard.get("long_lived"),
                Some(b"value".to_vec()),
                "Fresh entry should not be removed"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_can_be_aborted() {
        let store = Arc::new(RwLock::new(CacheStore::new()));

        let handle = spawn_reaper_task(store, Duration::from_millis(50));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
