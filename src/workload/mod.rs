//! Workload Module
//!
//! Load generation against the cache's public operations.
//!
//! The driver is a stand-in for any cache client: it issues reads, writes
//! and deletes according to configured ratios and never inspects cache
//! internals.

mod driver;
mod generator;

pub use driver::{WorkloadConfig, WorkloadDriver, WorkloadTotals};
pub use generator::{generate_key, generate_value};
