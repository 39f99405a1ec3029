//! Cache Engine Module
//!
//! Bounded cache combining the entry store with a fixed eviction strategy,
//! TTL expiry and hit/miss accounting.

use crate::cache::{
    CacheEntry, CacheStats, EntryStore, EvictionStrategy, StatsSummary, MAX_KEY_LENGTH,
    MAX_VALUE_SIZE,
};
use crate::error::{CacheError, Result};

// == Cache ==
/// Bounded key-value cache with a construction-time eviction strategy.
///
/// Capacity, default TTL and strategy are fixed for the cache lifetime.
/// Expiry is lazy: an expired entry is dropped by the lookup that finds it,
/// counting as both a miss and an eviction.
#[derive(Debug)]
pub struct Cache {
    /// Entry table plus ordering bookkeeping
    store: EntryStore,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Default TTL in seconds for entries without explicit TTL
    default_ttl: u64,
    /// Eviction strategy consulted when the store is full
    strategy: EvictionStrategy,
}

impl Cache {
    // == Constructor ==
    /// Creates a new cache.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold
    /// * `default_ttl` - Default TTL in seconds for entries without explicit TTL
    /// * `strategy` - Eviction strategy, fixed for the cache lifetime
    ///
    /// Fails with `InvalidConfig` if `capacity` is zero.
    pub fn new(capacity: usize, default_ttl: u64, strategy: EvictionStrategy) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "Capacity must be a positive number of entries".to_string(),
            ));
        }

        Ok(Self {
            store: EntryStore::new(),
            stats: CacheStats::new(),
            capacity,
            default_ttl,
            strategy,
        })
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists, the value is overwritten, the TTL reset
    /// and the access count cleared; the key keeps its insertion-order
    /// position. If the cache is at capacity and the key is new, one entry
    /// is first evicted according to the active strategy.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in seconds (uses default_ttl if None)
    pub fn set(&mut self, key: String, value: String, ttl: Option<u64>) -> Result<()> {
        // Validate key length
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        // Validate value size
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        // Check if key already exists (overwrite case)
        let is_overwrite = self.store.contains_key(&key);

        // If not overwriting and at capacity, evict one entry first
        if !is_overwrite && self.store.len() >= self.capacity {
            if let Some(victim) = self.strategy.choose_victim(&self.store) {
                self.store.remove(&victim);
                self.stats.record_eviction();
            }
        }

        // Use provided TTL or default
        let effective_ttl = ttl.unwrap_or(self.default_ttl);

        // Create and store entry
        self.store.insert(key, CacheEntry::new(value, effective_ttl));

        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A missing or expired key is a miss, reported as an absent value
    /// rather than an error. An expired entry is removed on lookup and the
    /// removal counts as an eviction.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<String> {
        let expired = match self.store.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            // Lazy expiry: drop the entry, count a miss and an eviction
            self.store.remove(key);
            self.stats.record_miss();
            self.stats.record_eviction();
            return None;
        }

        if let Some(entry) = self.store.get_mut(key) {
            entry.record_access();
            let value = entry.value.clone();

            if self.strategy == EvictionStrategy::Lru {
                self.store.touch(key);
            }

            self.stats.record_hit();
            return Some(value);
        }

        self.stats.record_miss();
        None
    }

    // == Evict ==
    /// Forces one eviction using the active strategy.
    ///
    /// Returns the evicted key, or None if the store is empty.
    pub fn evict(&mut self) -> Option<String> {
        let victim = self.strategy.choose_victim(&self.store)?;
        self.store.remove(&victim);
        self.stats.record_eviction();
        Some(victim)
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Explicit removal is not an eviction and leaves the eviction counter
    /// untouched. Returns whether the key was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.store.remove(key).is_some()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Each removal counts as an eviction. No lookup happened, so the miss
    /// counter is untouched. Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys = self.store.expired_keys();
        let count = expired_keys.len();

        for key in expired_keys {
            self.store.remove(&key);
            self.stats.record_eviction();
        }

        count
    }

    // == Stats ==
    /// Returns a snapshot of the raw counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Summary ==
    /// Builds the advisory statistics report.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary::new(
            self.store.len(),
            self.capacity,
            &self.stats,
            self.strategy,
            self.store.estimated_bytes(),
        )
    }

    // == Accessors ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the active eviction strategy.
    pub fn strategy(&self) -> EvictionStrategy {
        self.strategy
    }
}
