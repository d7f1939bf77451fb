//! Cache Module
//!
//! Concurrent in-memory response cache with time-based expiry.
//!
//! Entries share one global expiry interval; a background reaper task
//! removes the ones that outlive it. Reads never evict.

mod entry;
mod handle;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use store::CacheStore;
