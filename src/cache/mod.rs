//! Cache Module
//!
//! An in-memory key-value engine with TTL expiration and LRU eviction,
//! and the typed item snapshot cache built on top of it.

mod entry;
mod items;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use items::{ItemCache, CACHE_KEY_PREFIX};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::{CacheError, CacheStore};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 64 * 1024;
