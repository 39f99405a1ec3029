//! Cache Statistics Module
//!
//! Tracks hit/miss/eviction counters and derives the advisory summary
//! report.

use serde::Serialize;

use crate::cache::EvictionStrategy;

// == Cache Stats ==
/// Monotonic performance counters for a cache instance.
///
/// Counters only ever increase for the cache's lifetime; the owning cache
/// is their sole mutator.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of lookups served from a live entry
    pub hits: u64,
    /// Number of lookups that found no live entry
    pub misses: u64,
    /// Number of entries removed by policy or expiry
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}

// == Stats Summary ==
/// Point-in-time report derived from cache state and counters.
///
/// Read-only and advisory: nothing in the cache depends on these values.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    /// Current number of entries
    pub size: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// Number of lookups served from a live entry
    pub hits: u64,
    /// Number of lookups that found no live entry
    pub misses: u64,
    /// hits / (hits + misses), 0.0 when no lookups have been made
    pub hit_ratio: f64,
    /// Number of entries removed by policy or expiry
    pub evictions: u64,
    /// Active eviction strategy name
    pub strategy: &'static str,
    /// Approximate bytes held by stored entries, advisory only
    pub memory_estimate: usize,
    /// Report creation time (RFC 3339)
    pub generated_at: String,
}

impl StatsSummary {
    // == Constructor ==
    /// Creates a summary from the current store size and counters.
    pub fn new(
        size: usize,
        capacity: usize,
        stats: &CacheStats,
        strategy: EvictionStrategy,
        memory_estimate: usize,
    ) -> Self {
        Self {
            size,
            capacity,
            hits: stats.hits,
            misses: stats.misses,
            hit_ratio: stats.hit_rate(),
            evictions: stats.evictions,
            strategy: strategy.as_str(),
            memory_estimate,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
