//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and access
//! metadata.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and bookkeeping metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
    /// Number of reads served from this entry
    pub access_count: u64,
    /// Timestamp of the most recent read, unset until first read
    pub last_access: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring after the given TTL.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds; zero yields an already-expired entry
    pub fn new(value: String, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            expires_at: now + ttl_seconds * 1000,
            access_count: 0,
            last_access: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time, so a lookup
    /// issued exactly at `expires_at` misses.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Record Access ==
    /// Marks a successful read: bumps the access count and stamps the
    /// access time.
    pub fn record_access(&mut self) {
        self.access_count += 1;
        self.last_access = Some(current_timestamp_ms());
    }

    // == Estimated Size ==
    /// Approximate footprint of this entry in bytes.
    ///
    /// Counts the payload plus fixed per-entry overhead. Advisory only.
    pub fn estimated_bytes(&self) -> usize {
        self.value.len() + std::mem::size_of::<Self>()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
