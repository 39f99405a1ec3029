//! Configuration Module
//!
//! Handles loading cache and workload configuration from environment
//! variables.

use std::env;

/// Simulation configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. Values are parsed leniently here; semantic validation (positive
/// capacity, recognized strategy name) happens when the cache is built.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Default TTL in seconds for entries without explicit TTL
    pub default_ttl: u64,
    /// Eviction strategy name (lru, lfu, fifo or ttl)
    pub strategy: String,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Number of long-TTL entries inserted before the main run
    pub warmup_entries: usize,
    /// Number of workload operations to issue
    pub operations: usize,
    /// Fraction of workload operations that are reads
    pub read_ratio: f64,
    /// Fraction of workload operations that are writes
    pub write_ratio: f64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `EVICTION_STRATEGY` - Strategy name (default: "lru")
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `WARMUP_ENTRIES` - Warmup entry count (default: 500)
    /// - `WORKLOAD_OPERATIONS` - Workload operation count (default: 5000)
    /// - `READ_RATIO` - Read fraction of the workload (default: 0.7)
    /// - `WRITE_RATIO` - Write fraction of the workload (default: 0.2)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            strategy: env::var("EVICTION_STRATEGY").unwrap_or_else(|_| "lru".to_string()),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            warmup_entries: env::var("WARMUP_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            operations: env::var("WORKLOAD_OPERATIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            read_ratio: env::var("READ_RATIO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.7),
            write_ratio: env::var("WRITE_RATIO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            default_ttl: 300,
            strategy: "lru".to_string(),
            cleanup_interval: 1,
            warmup_entries: 500,
            operations: 5000,
            read_ratio: 0.7,
            write_ratio: 0.2,
        }
    }
}
