//! Flexcache - eviction strategy simulation
//!
//! Builds a bounded cache from environment configuration, exercises it with
//! a randomized workload and reports the resulting statistics.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flexcache::{spawn_cleanup_task, Cache, Config, EvictionStrategy, WorkloadConfig, WorkloadDriver};

/// Main entry point for the flexcache simulation.
///
/// # Run Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the cache, failing fast on invalid configuration
/// 4. Start background TTL cleanup task
/// 5. Warm up the cache with long-TTL entries
/// 6. Run the randomized workload
/// 7. Report the statistics summary and shut down
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flexcache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting flexcache simulation");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, default_ttl={}s, strategy={}, cleanup_interval={}s",
        config.capacity, config.default_ttl, config.strategy, config.cleanup_interval
    );

    // Build the cache; unrecognized strategy names and zero capacity are
    // rejected here, before anything runs
    let strategy = EvictionStrategy::parse(&config.strategy)?;
    let cache = Cache::new(config.capacity, config.default_ttl, strategy)?;
    let shared = Arc::new(RwLock::new(cache));
    info!("Cache initialized with {} strategy", strategy);

    // Start background cleanup task
    let cleanup_handle = spawn_cleanup_task(shared.clone(), config.cleanup_interval);
    info!("Background cleanup task started");

    // Warm up, then run the main workload
    let workload_config = WorkloadConfig {
        read_ratio: config.read_ratio,
        write_ratio: config.write_ratio,
        delete_ratio: (1.0 - config.read_ratio - config.write_ratio).max(0.0),
    };
    let mut driver = WorkloadDriver::new(shared.clone(), workload_config);
    driver.warmup(config.warmup_entries).await;
    let totals = driver.run(config.operations).await;

    // Report the outcome
    let summary = shared.read().await.summary();
    info!(
        "Simulation complete: {} reads, {} writes, {} deletes issued",
        totals.reads, totals.writes, totals.deletes
    );
    info!(
        "Cache stats: {} hits, {} misses, hit ratio {:.2}%, {} evictions",
        summary.hits,
        summary.misses,
        summary.hit_ratio * 100.0,
        summary.evictions
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // Stop the cleanup task before exiting
    cleanup_handle.abort();

    Ok(())
}
