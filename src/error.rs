//! Error types for the cache engine
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache engine.
///
/// A failed lookup is not an error: `get` reports misses as an absent value.
/// The variants here cover rejected configuration and rejected input only.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Rejected configuration, raised once at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache engine.
pub type Result<T> = std::result::Result<T, CacheError>;
