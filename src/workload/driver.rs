//! Workload Driver Module
//!
//! Issues set/get/delete calls against a shared cache according to
//! configured ratios. The driver only ever goes through the cache's public
//! operations and keeps its own list of known keys.

use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::Cache;
use crate::workload::{generate_key, generate_value};

// == Constants ==
/// Smallest generated payload in bytes
const VALUE_MIN_BYTES: usize = 128;
/// Largest generated payload in bytes
const VALUE_MAX_BYTES: usize = 4096;
/// TTL in seconds for warmup entries
const WARMUP_TTL_SECS: u64 = 3600;
/// Known-key backlog is truncated beyond capacity times this factor
const KEY_BACKLOG_FACTOR: f64 = 1.5;

// == Workload Config ==
/// Operation mix for a workload run.
///
/// Ratios are evaluated in order: a draw below `read_ratio` is a read, below
/// `read_ratio + write_ratio` a write, anything above a delete. Reads and
/// deletes fall back to a write while no keys are known yet.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Fraction of operations that are reads
    pub read_ratio: f64,
    /// Fraction of operations that are writes
    pub write_ratio: f64,
    /// Fraction of operations that are deletes
    pub delete_ratio: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            read_ratio: 0.7,
            write_ratio: 0.2,
            delete_ratio: 0.1,
        }
    }
}

// == Workload Totals ==
/// Operation counts actually issued during a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkloadTotals {
    /// Number of get calls issued
    pub reads: usize,
    /// Number of set calls issued
    pub writes: usize,
    /// Number of delete calls issued
    pub deletes: usize,
}

// == Workload Driver ==
/// Generates keys and values and drives a shared cache under load.
pub struct WorkloadDriver {
    /// Shared cache handle; all calls go through the public operations
    cache: Arc<RwLock<Cache>>,
    /// Operation mix
    config: WorkloadConfig,
    /// Keys this driver has written and not yet deleted
    known_keys: Vec<String>,
}

impl WorkloadDriver {
    // == Constructor ==
    /// Creates a new driver over a shared cache.
    pub fn new(cache: Arc<RwLock<Cache>>, config: WorkloadConfig) -> Self {
        Self {
            cache,
            config,
            known_keys: Vec::new(),
        }
    }

    // == Warmup ==
    /// Pre-populates the cache with long-TTL entries.
    ///
    /// Warmup keys are not added to the known-key list; the main run works
    /// against its own key population.
    pub async fn warmup(&mut self, count: usize) {
        info!("Warming up cache with {} entries", count);

        for _ in 0..count {
            let key = generate_key("warmup");
            let size = rand::thread_rng().gen_range(VALUE_MIN_BYTES..=VALUE_MAX_BYTES);
            let value = generate_value(size);

            let mut cache = self.cache.write().await;
            let _ = cache.set(key, value, Some(WARMUP_TTL_SECS));
        }
    }

    // == Run ==
    /// Issues `operations` calls according to the configured ratios.
    ///
    /// Returns the counts of operations actually issued.
    pub async fn run(&mut self, operations: usize) -> WorkloadTotals {
        let capacity = self.cache.read().await.capacity();
        let backlog_limit = (capacity as f64 * KEY_BACKLOG_FACTOR) as usize;

        info!(
            "Running workload: {} operations ({:.0}% read / {:.0}% write / {:.0}% delete)",
            operations,
            self.config.read_ratio * 100.0,
            self.config.write_ratio * 100.0,
            self.config.delete_ratio * 100.0
        );

        let mut totals = WorkloadTotals::default();

        for _ in 0..operations {
            let roll: f64 = rand::thread_rng().gen();

            if roll < self.config.read_ratio && !self.known_keys.is_empty() {
                if let Some(key) = self.pick_known_key() {
                    self.cache.write().await.get(&key);
                    totals.reads += 1;
                }
            } else if roll < self.config.read_ratio + self.config.write_ratio {
                let key = generate_key("cache");
                let size = rand::thread_rng().gen_range(VALUE_MIN_BYTES..=VALUE_MAX_BYTES);
                let value = generate_value(size);

                let _ = self.cache.write().await.set(key.clone(), value, None);
                self.known_keys.push(key);
                totals.writes += 1;
            } else if !self.known_keys.is_empty() {
                let index = rand::thread_rng().gen_range(0..self.known_keys.len());
                let key = self.known_keys.remove(index);

                self.cache.write().await.delete(&key);
                totals.deletes += 1;
            }

            // Keep the backlog of known keys bounded
            if self.known_keys.len() > backlog_limit {
                self.known_keys.truncate(capacity);
            }
        }

        info!(
            "Workload complete: {} reads, {} writes, {} deletes issued",
            totals.reads, totals.writes, totals.deletes
        );

        totals
    }

    // == Pick Known Key ==
    /// Returns a random known key, or None if none have been written yet.
    fn pick_known_key(&self) -> Option<String> {
        if self.known_keys.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..self.known_keys.len());
        Some(self.known_keys[index].clone())
    }
}
