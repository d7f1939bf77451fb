//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload plus its creation timestamp.
///
/// Entries are immutable once created: overwriting a key via the store
/// replaces the whole entry (new data, new timestamp) rather than mutating
/// in place.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub data: Vec<u8>,
    /// Monotonic creation timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns the time elapsed since this entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry's age exceeds the given interval.
    ///
    /// Boundary condition: an entry is expired only when its age is strictly
    /// greater than the interval. An entry aged exactly `interval` is still
    /// fresh. Only the reaper acts on this; reads never consult it, so an
    /// expired entry stays visible until the next sweep removes it.
    pub fn is_expired(&self, interval: Duration) -> bool {
        self.age() > interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(b"payload".to_vec());

        assert_eq!(entry.data, b"payload");
        assert!(entry.age() < Duration::from_secs(1));
    }

    #[test]
    fn test_entry_not_expired_within_interval() {
        let entry = CacheEntry::new(b"payload".to_vec());

        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expires_after_interval() {
        let entry = CacheEntry::new(b"payload".to_vec());

        sleep(Duration::from_millis(30));

        assert!(entry.is_expired(Duration::from_millis(10)));
    }

    #[test]
    fn test_entry_age_grows() {
        let entry = CacheEntry::new(Vec::new());

        let first = entry.age();
        sleep(Duration::from_millis(10));
        let second = entry.age();

        assert!(second > first);
    }

    #[test]
    fn test_empty_payload_allowed() {
        let entry = CacheEntry::new(Vec::new());

        assert!(entry.data.is_empty());
        assert!(!entry.is_expired(Duration::from_secs(1)));
    }
}
