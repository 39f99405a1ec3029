//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Expiry is otherwise lazy: an expired entry is dropped by the lookup that
//! finds it. The sweeper bounds how long dead entries can occupy slots
//! between lookups.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires the write lock on the cache to remove
/// expired entries.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<Cache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and sweep expired entries
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            // Log sweep statistics
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::EvictionStrategy;
    use std::time::Duration;

    fn shared_cache() -> Arc<RwLock<Cache>> {
        Arc::new(RwLock::new(
            Cache::new(100, 300, EvictionStrategy::Lru).unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = shared_cache();

        // Add an entry with very short TTL
        {
            let mut cache_guard = cache.write().await;
            cache_guard
                .set("expire_soon".to_string(), "value".to_string(), Some(1))
                .unwrap();
        }

        // Spawn cleanup task with 1 second interval
        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for entry to expire and cleanup to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Verify entry was removed without a lookup ever touching it
        {
            let cache_guard = cache.read().await;
            assert!(cache_guard.is_empty(), "Expired entry should have been swept");
            assert_eq!(cache_guard.stats().evictions, 1);
            assert_eq!(cache_guard.stats().misses, 0);
        }

        // Abort the cleanup task
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = shared_cache();

        // Add an entry with long TTL
        {
            let mut cache_guard = cache.write().await;
            cache_guard
                .set("long_lived".to_string(), "value".to_string(), Some(3600))
                .unwrap();
        }

        // Spawn cleanup task
        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for cleanup to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        // Verify entry still exists
        {
            let mut cache_guard = cache.write().await;
            let result = cache_guard.get("long_lived");
            assert_eq!(result, Some("value".to_string()));
        }

        // Abort the cleanup task
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = shared_cache();

        let handle = spawn_cleanup_task(cache, 1);

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
