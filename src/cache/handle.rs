//! Cache Handle Module
//!
//! Public async cache handle tying the store and the reaper task together.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// Concurrent TTL cache for raw response payloads.
///
/// One `interval` governs both how long an entry stays fresh and how often
/// the background reaper sweeps the store. Construction spawns the reaper;
/// dropping the handle (or calling [`shutdown`](Cache::shutdown)) aborts it,
/// so embedding the cache in a longer-lived process does not leak the task.
///
/// Reads take a shared lock and may proceed concurrently; `add` and the
/// reaper sweep each take the exclusive lock over the whole store. An entry
/// that has outlived `interval` is still served by [`get`](Cache::get) until
/// the next sweep removes it, so an entry's effective lifetime ranges from
/// just under one interval up to just under two. That staleness window is a
/// deliberate trade: one timer and an O(n) sweep per tick instead of per-key
/// scheduling.
#[derive(Debug)]
pub struct Cache {
    /// Shared entry storage
    store: Arc<RwLock<CacheStore>>,
    /// Expiry interval, also the reaper's polling period
    interval: Duration,
    /// Handle to the background reaper task
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper task.
    ///
    /// Must be called from within a tokio runtime. The reaper runs for the
    /// lifetime of this handle and is aborted when the handle is dropped.
    ///
    /// # Errors
    /// Returns [`PokedexError::InvalidInterval`] if `interval` is zero.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval);
        }

        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reaper_task(store.clone(), interval);

        Ok(Self {
            store,
            interval,
            reaper,
        })
    }

    // == Add ==
    /// Inserts or replaces the entry for `key` with `data` and the current
    /// timestamp.
    ///
    /// Takes the exclusive lock for the duration of the single-key write.
    /// Cannot fail; safe to call concurrently with `get` and the reaper.
    pub async fn add(&self, key: String, data: Vec<u8>) {
        let mut store = self.store.write().await;
        store.add(key, data);
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` on a miss.
    ///
    /// Takes the shared lock only and never mutates the store: a stale entry
    /// is returned as-is until the reaper removes it.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        let hit = store.get(key);
        match hit {
            Some(_) => debug!(key, "cache hit"),
            None => debug!(key, "cache miss"),
        }
        hit
    }

    // == Interval ==
    /// Returns the configured expiry/reap interval.
    #[allow(dead_code)]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries, including stale ones.
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache currently holds no entries.
    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the background reaper task.
    ///
    /// Stored entries stay readable afterwards; they are simply never
    /// evicted again. Dropping the handle has the same effect.
    #[allow(dead_code)]
    pub fn shutdown(&self) {
        self.reaper.abort();
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
