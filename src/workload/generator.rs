//! Workload Generation Module
//!
//! Random keys and payloads for exercising the cache.

use rand::distributions::{Alphanumeric, DistString};

// == Constants ==
/// Length of the random suffix appended to generated keys
const KEY_SUFFIX_LENGTH: usize = 16;

// == Key Generation ==
/// Generates a random cache key with the given prefix.
///
/// Keys look like `prefix:h7k2m9x1q4w8z3v6`.
pub fn generate_key(prefix: &str) -> String {
    let suffix = Alphanumeric
        .sample_string(&mut rand::thread_rng(), KEY_SUFFIX_LENGTH)
        .to_lowercase();
    format!("{}:{}", prefix, suffix)
}

// == Value Generation ==
/// Generates a random payload of the given size in bytes.
pub fn generate_value(size: usize) -> String {
    Alphanumeric.sample_string(&mut rand::thread_rng(), size)
}
