//! Eviction Policy Module
//!
//! Strategy selection and victim choice for a full cache.

use std::fmt;

use serde::Serialize;

use crate::cache::{CacheEntry, EntryStore};
use crate::error::{CacheError, Result};

// == Eviction Strategy ==
/// Eviction strategy, selected at construction and fixed for the cache
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionStrategy {
    /// Least recently used
    Lru,
    /// Least frequently used
    Lfu,
    /// First in, first out
    Fifo,
    /// Nearest expiration time
    Ttl,
}

impl EvictionStrategy {
    // == Parse ==
    /// Parses a strategy name.
    ///
    /// Accepts "lru", "lfu", "fifo" and "ttl" (case-insensitive); any other
    /// name is rejected with `InvalidConfig`.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "lru" => Ok(Self::Lru),
            "lfu" => Ok(Self::Lfu),
            "fifo" => Ok(Self::Fifo),
            "ttl" => Ok(Self::Ttl),
            other => Err(CacheError::InvalidConfig(format!(
                "Unknown eviction strategy '{}' (expected lru, lfu, fifo or ttl)",
                other
            ))),
        }
    }

    // == As Str ==
    /// Returns the canonical strategy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lru => "lru",
            Self::Lfu => "lfu",
            Self::Fifo => "fifo",
            Self::Ttl => "ttl",
        }
    }

    // == Choose Victim ==
    /// Picks the key to remove from a full store.
    ///
    /// Pure with respect to the store: the caller performs the removal.
    /// Returns None only when the store is empty.
    ///
    /// # Victim selection
    /// - Lru: least recently accessed key
    /// - Lfu: minimum access count, earliest-inserted key winning ties
    /// - Fifo: earliest-inserted key, reads ignored
    /// - Ttl: smallest expiration time, whether or not already expired
    pub fn choose_victim(&self, store: &EntryStore) -> Option<String> {
        match self {
            Self::Lru => store.least_recent().cloned(),
            Self::Fifo => store.oldest_inserted().cloned(),
            Self::Lfu => min_by_insertion(store, |entry| entry.access_count),
            Self::Ttl => min_by_insertion(store, |entry| entry.expires_at),
        }
    }
}

impl fmt::Display for EvictionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Scan Helper ==
/// Scans entries in insertion order and returns the key minimizing `metric`.
///
/// The strict comparison means the earliest-inserted key wins ties.
fn min_by_insertion<F>(store: &EntryStore, metric: F) -> Option<String>
where
    F: Fn(&CacheEntry) -> u64,
{
    let mut best: Option<(&String, u64)> = None;
    for (key, entry) in store.iter_oldest_first() {
        let candidate = metric(entry);
        match best {
            Some((_, current)) if candidate >= current => {}
            _ => best = Some((key, candidate)),
        }
    }
    best.map(|(key, _)| key.clone())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(keys: &[&str]) -> EntryStore {
        let mut store = EntryStore::new();
        for key in keys {
            store.insert(key.to_string(), CacheEntry::new("value".to_string(), 300));
        }
        store
    }

    #[test]
    fn test_parse_valid_names() {
        assert_eq!(EvictionStrategy::parse("lru").unwrap(), EvictionStrategy::Lru);
        assert_eq!(EvictionStrategy::parse("lfu").unwrap(), EvictionStrategy::Lfu);
        assert_eq!(EvictionStrategy::parse("fifo").unwrap(), EvictionStrategy::Fifo);
        assert_eq!(EvictionStrategy::parse("ttl").unwrap(), EvictionStrategy::Ttl);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(EvictionStrategy::parse("LRU").unwrap(), EvictionStrategy::Lru);
        assert_eq!(EvictionStrategy::parse("Fifo").unwrap(), EvictionStrategy::Fifo);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let result = EvictionStrategy::parse("random");
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_as_str_round_trip() {
        for strategy in [
            EvictionStrategy::Lru,
            EvictionStrategy::Lfu,
            EvictionStrategy::Fifo,
            EvictionStrategy::Ttl,
        ] {
            assert_eq!(EvictionStrategy::parse(strategy.as_str()).unwrap(), strategy);
        }
    }

    #[test]
    fn test_choose_victim_empty_store() {
        let store = EntryStore::new();
        for strategy in [
            EvictionStrategy::Lru,
            EvictionStrategy::Lfu,
            EvictionStrategy::Fifo,
            EvictionStrategy::Ttl,
        ] {
            assert_eq!(strategy.choose_victim(&store), None);
        }
    }

    #[test]
    fn test_lru_picks_least_recent() {
        let mut store = store_with(&["a", "b", "c"]);

        // Touch "a" so "b" becomes least recent
        store.touch("a");

        let victim = EvictionStrategy::Lru.choose_victim(&store);
        assert_eq!(victim, Some("b".to_string()));
    }

    #[test]
    fn test_fifo_picks_earliest_inserted() {
        let mut store = store_with(&["a", "b", "c"]);

        // Recency changes must not matter for FIFO
        store.touch("a");

        let victim = EvictionStrategy::Fifo.choose_victim(&store);
        assert_eq!(victim, Some("a".to_string()));
    }

    #[test]
    fn test_lfu_picks_minimum_access_count() {
        let mut store = store_with(&["a", "b", "c"]);

        store.get_mut("a").unwrap().record_access();
        store.get_mut("b").unwrap().record_access();
        store.get_mut("b").unwrap().record_access();

        let victim = EvictionStrategy::Lfu.choose_victim(&store);
        assert_eq!(victim, Some("c".to_string()));
    }

    #[test]
    fn test_lfu_tie_broken_by_earliest_insertion() {
        let store = store_with(&["a", "b", "c"]);

        // All counts equal: earliest inserted wins
        let victim = EvictionStrategy::Lfu.choose_victim(&store);
        assert_eq!(victim, Some("a".to_string()));
    }

    #[test]
    fn test_ttl_picks_nearest_expiry() {
        let mut store = EntryStore::new();
        store.insert("slow".to_string(), CacheEntry::new("v".to_string(), 600));
        store.insert("fast".to_string(), CacheEntry::new("v".to_string(), 5));
        store.insert("medium".to_string(), CacheEntry::new("v".to_string(), 60));

        let victim = EvictionStrategy::Ttl.choose_victim(&store);
        assert_eq!(victim, Some("fast".to_string()));
    }

    #[test]
    fn test_ttl_prefers_already_expired() {
        let mut store = EntryStore::new();
        store.insert("live".to_string(), CacheEntry::new("v".to_string(), 300));
        store.insert("dead".to_string(), CacheEntry::new("v".to_string(), 0));

        let victim = EvictionStrategy::Ttl.choose_victim(&store);
        assert_eq!(victim, Some("dead".to_string()));
    }
}
