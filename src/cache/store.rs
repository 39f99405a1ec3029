//! Entry Store Module
//!
//! Keyed entry table plus the ordering bookkeeping that eviction strategies
//! read. Capacity enforcement lives in the owning cache, not here.

use std::collections::HashMap;

use crate::cache::{CacheEntry, KeyOrder};

// == Entry Store ==
/// Keyed table of cache entries with recency and insertion ordering.
#[derive(Debug, Default)]
pub struct EntryStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Access recency, front = most recently used
    recency: KeyOrder,
    /// Insertion order, front = newest; overwrites keep their position
    insertion: KeyOrder,
}

impl EntryStore {
    // == Constructor ==
    /// Creates a new empty entry store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Inserts or overwrites an entry.
    ///
    /// A new key joins the insertion order; an overwritten key keeps its
    /// original insertion position. Recency is refreshed either way.
    pub fn insert(&mut self, key: String, entry: CacheEntry) {
        self.insertion.insert(&key);
        self.recency.touch(&key);
        self.entries.insert(key, entry);
    }

    // == Remove ==
    /// Removes an entry and all of its ordering state.
    ///
    /// Returns the removed entry, or None if the key was absent.
    pub fn remove(&mut self, key: &str) -> Option<CacheEntry> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.recency.remove(key);
            self.insertion.remove(key);
        }
        removed
    }

    // == Get ==
    /// Returns a reference to an entry without affecting any ordering.
    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to an entry without affecting any ordering.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut CacheEntry> {
        self.entries.get_mut(key)
    }

    // == Contains ==
    /// Checks if a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Touch ==
    /// Marks a key as most recently used.
    pub fn touch(&mut self, key: &str) {
        self.recency.touch(key);
    }

    // == Ordering Views ==
    /// Returns the least recently used key.
    pub fn least_recent(&self) -> Option<&String> {
        self.recency.peek_oldest()
    }

    /// Returns the earliest-inserted key still present.
    pub fn oldest_inserted(&self) -> Option<&String> {
        self.insertion.peek_oldest()
    }

    /// Iterates entries from earliest inserted to latest.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = (&String, &CacheEntry)> {
        self.insertion
            .iter_oldest_first()
            .filter_map(move |key| self.entries.get(key).map(|entry| (key, entry)))
    }

    // == Expired Keys ==
    /// Collects the keys of all currently expired entries.
    pub fn expired_keys(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect()
    }

    // == Estimated Size ==
    /// Approximate bytes held by stored keys and entries. Advisory only.
    pub fn estimated_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, entry)| key.len() + entry.estimated_bytes())
            .sum()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str) -> CacheEntry {
        CacheEntry::new(value.to_string(), 300)
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = EntryStore::new();

        store.insert("key1".to_string(), entry("value1"));

        assert_eq!(store.len(), 1);
        assert!(store.contains_key("key1"));
        assert_eq!(store.get("key1").unwrap().value, "value1");
    }

    #[test]
    fn test_store_remove_clears_ordering() {
        let mut store = EntryStore::new();

        store.insert("key1".to_string(), entry("value1"));
        store.insert("key2".to_string(), entry("value2"));

        let removed = store.remove("key1");

        assert!(removed.is_some());
        assert_eq!(store.len(), 1);
        assert_eq!(store.least_recent(), Some(&"key2".to_string()));
        assert_eq!(store.oldest_inserted(), Some(&"key2".to_string()));
    }

    #[test]
    fn test_store_remove_nonexistent() {
        let mut store = EntryStore::new();

        assert!(store.remove("nonexistent").is_none());
    }

    #[test]
    fn test_overwrite_keeps_insertion_position() {
        let mut store = EntryStore::new();

        store.insert("key1".to_string(), entry("value1"));
        store.insert("key2".to_string(), entry("value2"));

        // Overwrite the first key; it must remain earliest-inserted
        store.insert("key1".to_string(), entry("value1b"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.oldest_inserted(), Some(&"key1".to_string()));
        assert_eq!(store.get("key1").unwrap().value, "value1b");
    }

    #[test]
    fn test_overwrite_refreshes_recency() {
        let mut store = EntryStore::new();

        store.insert("key1".to_string(), entry("value1"));
        store.insert("key2".to_string(), entry("value2"));

        // key1 becomes most recent again
        store.insert("key1".to_string(), entry("value1b"));

        assert_eq!(store.least_recent(), Some(&"key2".to_string()));
    }

    #[test]
    fn test_touch_changes_least_recent() {
        let mut store = EntryStore::new();

        store.insert("key1".to_string(), entry("value1"));
        store.insert("key2".to_string(), entry("value2"));

        assert_eq!(store.least_recent(), Some(&"key1".to_string()));

        store.touch("key1");

        assert_eq!(store.least_recent(), Some(&"key2".to_string()));
    }

    #[test]
    fn test_iter_oldest_first_follows_insertion() {
        let mut store = EntryStore::new();

        store.insert("a".to_string(), entry("1"));
        store.insert("b".to_string(), entry("2"));
        store.insert("c".to_string(), entry("3"));

        // Reads must not disturb insertion order
        store.touch("a");

        let keys: Vec<&String> = store.iter_oldest_first().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_expired_keys() {
        let mut store = EntryStore::new();

        store.insert("live".to_string(), CacheEntry::new("v".to_string(), 300));
        store.insert("dead".to_string(), CacheEntry::new("v".to_string(), 0));

        let expired = store.expired_keys();
        assert_eq!(expired, vec!["dead".to_string()]);
    }

    #[test]
    fn test_estimated_bytes_grows_with_entries() {
        let mut store = EntryStore::new();

        assert_eq!(store.estimated_bytes(), 0);

        store.insert("key1".to_string(), entry("value1"));
        let one = store.estimated_bytes();
        store.insert("key2".to_string(), entry("value2"));

        assert!(store.estimated_bytes() > one);
    }
}
