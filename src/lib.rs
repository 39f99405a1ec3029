//! Flexcache - A bounded in-memory cache with pluggable eviction strategies
//!
//! Provides TTL expiry, four eviction strategies (LRU, LFU, FIFO,
//! TTL-nearest) and hit/miss accounting behind a single synchronized
//! surface.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;
pub mod workload;

use std::sync::Arc;

use tokio::sync::RwLock;

pub use cache::{Cache, CacheStats, EvictionStrategy, StatsSummary};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_cleanup_task;
pub use workload::{WorkloadConfig, WorkloadDriver};

/// Shared, synchronized handle to a cache instance.
///
/// Every public cache operation mutates counters or ordering state, so
/// collaborators acquire the write lock; the read lock only serves
/// advisory stats reads.
pub type SharedCache = Arc<RwLock<Cache>>;
