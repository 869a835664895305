//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with lazy TTL expiration.
//! There is no eviction policy beyond TTL and no background sweep; expired
//! entries are detected and removed only when read. Unbounded growth is a
//! documented limitation for this small, short-lived cache.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, MAX_KEY_LENGTH};
use crate::error::{FetchError, Result};

// == Cache Store ==
/// In-memory key-value store with TTL expiration.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores a key-value pair with the given TTL.
    ///
    /// If the key already exists, the value is overwritten and the TTL is
    /// reset. Validation is strict: an empty or oversized key and a zero
    /// TTL are rejected rather than silently accepted.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The payload to store
    /// * `ttl` - Time-to-live for the entry, must be non-zero
    pub fn set(&mut self, key: String, value: Value, ttl: Duration) -> Result<()> {
        if key.is_empty() {
            return Err(FetchError::InvalidArgument(
                "Cache key cannot be empty".to_string(),
            ));
        }

        if key.len() > MAX_KEY_LENGTH {
            return Err(FetchError::InvalidArgument(format!(
                "Cache key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if ttl.is_zero() {
            return Err(FetchError::InvalidArgument(
                "Cache TTL must be greater than zero".to_string(),
            ));
        }

        let entry = CacheEntry::new(value, ttl);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` if the key was never set or has expired. In the
    /// expired case the entry is removed as a side effect (lazy expiration)
    /// and counted in the stats. Absence is not an error.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_expired();
                self.stats.record_miss();
                debug!(key, "evicted expired cache entry");
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Removes an entry by key, unconditionally.
    ///
    /// Returns whether an entry was present; removing an absent key is not
    /// an error.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Empties the store entirely. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Contains Key ==
    /// Checks whether an entry is physically present, expired or not.
    ///
    /// Internal inspection helper; `get` is the authoritative read path.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
