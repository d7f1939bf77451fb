//! Cache Store Module
//!
//! Synchronous HashMap storage underlying the shared cache handle.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage for cached payloads.
///
/// This is the single shared mutable resource of the cache. It holds no
/// locking itself; the [`Cache`](crate::cache::Cache) handle wraps it in an
/// `Arc<RwLock<...>>` so that any number of readers proceed concurrently
/// while writers and the reaper take exclusive access.
///
/// Keys are opaque caller-chosen identifiers (by convention the full request
/// URL); no normalization is performed here.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamped with the current time.
    ///
    /// Replacing an existing key swaps in a whole new entry: fresh data and a
    /// fresh creation timestamp. Cannot fail.
    pub fn add(&mut self, key: String, data: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(data));
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` if absent.
    ///
    /// Reads never check expiry: an entry whose age exceeds the configured
    /// interval is still returned until the next reaper sweep removes it.
    /// Absence is a normal outcome, not an error.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.data.clone())
    }

    // == Contains ==
    /// Checks whether `key` currently has an entry, stale or not.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Reap ==
    /// Removes every entry whose age exceeds `interval`.
    ///
    /// Full scan over the store; the reaper calls this once per tick under
    /// the exclusive lock. Returns the number of entries removed.
    pub fn reap(&mut self, interval: Duration) -> usize {
        let before = self.entries.len();

        self.entries.retain(|key, entry| {
            let expired = entry.is_expired(interval);
            if expired {
                debug!(key = %key, "reaping expired cache entry");
            }
            !expired
        });

        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new();

        store.add("key1".to_string(), b"value1".to_vec());

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new();

        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite_replaces_data() {
        let mut store = CacheStore::new();

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_refreshes_timestamp() {
        let mut store = CacheStore::new();
        let interval = Duration::from_millis(40);

        store.add("key1".to_string(), b"old".to_vec());
        sleep(Duration::from_millis(30));

        // Rewriting resets the entry's age, so it survives the next sweep.
        store.add("key1".to_string(), b"new".to_vec());
        sleep(Duration::from_millis(20));

        assert_eq!(store.reap(interval), 0);
        assert_eq!(store.get("key1"), Some(b"new".to_vec()));
    }

    #[test]
    fn test_store_get_does_not_expire_on_read() {
        let mut store = CacheStore::new();

        store.add("key1".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(20));

        // Entry is past the interval but no sweep has run yet.
        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert!(store.contains("key1"));
    }

    #[test]
    fn test_store_reap_removes_only_expired() {
        let mut store = CacheStore::new();

        store.add("old".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(30));
        store.add("fresh".to_string(), b"value2".to_vec());

        let removed = store.reap(Duration::from_millis(10));

        assert_eq!(removed, 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("fresh"), Some(b"value2".to_vec()));
    }

    #[test]
    fn test_store_reap_empty() {
        let mut store = CacheStore::new();

        assert_eq!(store.reap(Duration::from_secs(1)), 0);
        assert!(store.is_empty());
    }
}
