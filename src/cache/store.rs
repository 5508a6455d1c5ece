//! Cache Store Module
//!
//! Key-value engine behind the item cache: HashMap storage, LRU eviction
//! and lazy plus periodic TTL expiration.

use std::collections::HashMap;

use thiserror::Error;

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_KEY_LENGTH, MAX_VALUE_SIZE};

/// Reasons the engine refuses a write.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("key exceeds maximum length of {} bytes", MAX_KEY_LENGTH)]
    KeyTooLong,
    #[error("value exceeds maximum size of {} bytes", MAX_VALUE_SIZE)]
    ValueTooLarge,
    #[error("cache is full and eviction failed")]
    Full,
}

// == Cache Store ==
#[derive(Debug)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    stats: CacheStats,
    /// Capacity; a value of 0 disables caching
    max_entries: usize,
    /// TTL in seconds applied when `set` gets no explicit TTL
    default_ttl: u64,
}

impl CacheStore {
    pub fn new(max_entries: usize, default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            default_ttl,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its TTL. Evicts the least recently used entry when at capacity.
    pub fn set(&mut self, key: String, value: String, ttl: Option<u64>) -> Result<(), CacheError> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::KeyTooLong);
        }
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::ValueTooLarge);
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            let evicted = self.lru.evict_oldest().ok_or(CacheError::Full)?;
            self.entries.remove(&evicted);
            self.stats.record_eviction();
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key.clone(), CacheEntry::new(value, Some(ttl)));
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns the live value for `key`, if any.
    ///
    /// An expired entry is dropped on the spot and counted as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let live = self.entries.get(key).map(|entry| !entry.is_expired());
        match live {
            Some(true) => {
                self.stats.record_hit();
                self.lru.touch(key);
                self.entries.get(key).map(|entry| entry.value.clone())
            }
            Some(false) => {
                self.remove_entry(key);
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes `key`; returns whether an entry was present.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.remove_entry(key);
        if removed {
            self.stats.record_invalidation();
        }
        removed
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were dropped.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.remove_entry(key);
        }
        expired.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remove_entry(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }
}
