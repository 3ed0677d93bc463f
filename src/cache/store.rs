//! Response Cache Module
//!
//! Bounded TTL cache mapping request fingerprints to cached response
//! payloads, with FIFO eviction under capacity pressure.

use std::collections::HashMap;

use serde_json::Value;

use crate::cache::{CacheEntry, InsertionOrder, MAX_KEY_LENGTH};
use crate::error::{CacheError, Result};

// == Response Cache ==
/// In-memory, time-bounded cache of response payloads keyed by request
/// fingerprint.
///
/// Expiry is lazy: an expired entry is removed the first time `get` sees
/// it, or by [`sweep_expired`](Self::sweep_expired). Capacity is enforced
/// on insert by evicting the oldest-inserted entry (FIFO). Absence of a
/// key is a normal outcome, never an error.
#[derive(Debug)]
pub struct ResponseCache {
    /// Fingerprint-keyed storage
    entries: HashMap<String, CacheEntry>,
    /// First-insertion order for FIFO eviction
    order: InsertionOrder,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL in milliseconds applied when callers pass no explicit TTL
    default_ttl_ms: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold, > 0
    /// * `default_ttl_ms` - TTL in milliseconds for entries stored without
    ///   an explicit TTL, > 0
    ///
    /// # Errors
    /// Returns a precondition violation if either argument is zero.
    pub fn new(max_entries: usize, default_ttl_ms: u64) -> Result<Self> {
        if max_entries == 0 {
            return Err(CacheError::InvalidCapacity);
        }
        if default_ttl_ms == 0 {
            return Err(CacheError::InvalidTtl(default_ttl_ms));
        }

        Ok(Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            max_entries,
            default_ttl_ms,
        })
    }

    // == Get ==
    /// Looks up a cached payload by fingerprint.
    ///
    /// Returns `Ok(Some(value))` for a live entry and `Ok(None)` when the
    /// key is absent or the entry has expired. An expired entry found here
    /// is removed as a side effect.
    ///
    /// # Errors
    /// Returns a precondition violation for an empty key.
    pub fn get(&mut self, key: &str) -> Result<Option<Value>> {
        if key.is_empty() {
            return Err(CacheError::EmptyKey);
        }

        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                // Lazy expiry: drop the stale entry now
                self.entries.remove(key);
                self.order.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    // == Set ==
    /// Stores a payload under a fingerprint with a TTL.
    ///
    /// Overwriting an existing key replaces the value and resets its
    /// expiry but keeps its insertion-order position and never triggers
    /// eviction. Inserting a new key at capacity first evicts the
    /// oldest-inserted entry, so eviction is a one-in-one-out step under
    /// the caller's lock.
    ///
    /// # Arguments
    /// * `key` - The request fingerprint
    /// * `value` - The response payload to cache
    /// * `ttl_ms` - Optional TTL in milliseconds (default TTL if None), > 0
    ///
    /// # Errors
    /// Returns a precondition violation for an empty or oversized key, or
    /// an explicit TTL of zero.
    pub fn set(&mut self, key: String, value: Value, ttl_ms: Option<u64>) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::EmptyKey);
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::KeyTooLong(key.len()));
        }
        if let Some(0) = ttl_ms {
            return Err(CacheError::InvalidTtl(0));
        }

        let is_overwrite = self.entries.contains_key(&key);

        // New key at capacity: evict the oldest-inserted entry first
        if !is_overwrite && self.entries.len() >= self.max_entries {
            let victim = self.order.evict_oldest().ok_or_else(|| {
                CacheError::Internal("capacity reached with empty insertion queue".to_string())
            })?;
            self.entries.remove(&victim);
        }

        let effective_ttl = ttl_ms.unwrap_or(self.default_ttl_ms);
        let entry = CacheEntry::new(value, effective_ttl);
        self.entries.insert(key.clone(), entry);

        if !is_overwrite {
            self.order.record(&key);
        }

        Ok(())
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Used by the background sweep
    /// task to bound memory under low read volume; correctness never
    /// depends on it.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.order.remove(&key);
        }

        count
    }

    // == Clear ==
    /// Empties the store. Maintenance/tests only.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    // == Length ==
    /// Returns the current entry count, including stale-but-unswept
    /// entries (lazy expiry means this may overcount until the next get
    /// or sweep).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the configured maximum entry count.
    #[allow(dead_code)]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    fn cache() -> ResponseCache {
        ResponseCache::new(100, 300_000).unwrap()
    }

    #[test]
    fn test_cache_new() {
        let cache = cache();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.max_entries(), 100);
    }

    #[test]
    fn test_cache_rejects_zero_capacity() {
        let result = ResponseCache::new(0, 300_000);
        assert!(matches!(result, Err(CacheError::InvalidCapacity)));
    }

    #[test]
    fn test_cache_rejects_zero_default_ttl() {
        let result = ResponseCache::new(100, 0);
        assert!(matches!(result, Err(CacheError::InvalidTtl(0))));
    }

    #[test]
    fn test_set_and_get() {
        let mut cache = cache();

        cache.set("fp1".to_string(), json!({"msg": "hi"}), None).unwrap();
        let value = cache.get("fp1").unwrap();

        assert_eq!(value, Some(json!({"msg": "hi"})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_absent_is_none_not_error() {
        let mut cache = cache();

        let result = cache.get("nonexistent");
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_get_empty_key_fails_fast() {
        let mut cache = cache();

        let result = cache.get("");
        assert!(matches!(result, Err(CacheError::EmptyKey)));
    }

    #[test]
    fn test_set_empty_key_fails_fast() {
        let mut cache = cache();

        let result = cache.set(String::new(), json!("v"), None);
        assert!(matches!(result, Err(CacheError::EmptyKey)));
    }

    #[test]
    fn test_set_zero_ttl_fails_fast() {
        let mut cache = cache();

        let result = cache.set("k".to_string(), json!("v"), Some(0));
        assert!(matches!(result, Err(CacheError::InvalidTtl(0))));
    }

    #[test]
    fn test_set_huge_ttl_stays_live() {
        let mut cache = cache();

        // Client-supplied TTLs are unbounded; the maximum must not wrap
        // the expiry into the past
        cache.set("k".to_string(), json!("v"), Some(u64::MAX)).unwrap();

        assert_eq!(cache.get("k").unwrap(), Some(json!("v")));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.sweep_expired(), 0);
    }

    #[test]
    fn test_set_key_too_long() {
        let mut cache = cache();
        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);

        let result = cache.set(long_key, json!("v"), None);
        assert!(matches!(result, Err(CacheError::KeyTooLong(_))));
    }

    #[test]
    fn test_overwrite_keeps_size_and_returns_new_value() {
        let mut cache = cache();

        cache.set("k".to_string(), json!("v1"), None).unwrap();
        cache.set("k".to_string(), json!("v2"), None).unwrap();

        assert_eq!(cache.get("k").unwrap(), Some(json!("v2")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_ttl_expiration() {
        let mut cache = cache();

        cache.set("fp".to_string(), json!("short lived"), Some(100)).unwrap();

        assert_eq!(cache.get("fp").unwrap(), Some(json!("short lived")));

        sleep(Duration::from_millis(150));

        // Expired entry reads as absent and is removed
        assert_eq!(cache.get("fp").unwrap(), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut cache = ResponseCache::new(3, 300_000).unwrap();

        cache.set("a".to_string(), json!(1), None).unwrap();
        cache.set("b".to_string(), json!(2), None).unwrap();
        cache.set("c".to_string(), json!(3), None).unwrap();

        // Cache is full; adding "d" evicts "a" (oldest inserted)
        cache.set("d".to_string(), json!(4), None).unwrap();

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("a").unwrap(), None);
        assert_eq!(cache.get("b").unwrap(), Some(json!(2)));
        assert_eq!(cache.get("c").unwrap(), Some(json!(3)));
        assert_eq!(cache.get("d").unwrap(), Some(json!(4)));
    }

    #[test]
    fn test_get_does_not_protect_from_eviction() {
        let mut cache = ResponseCache::new(3, 300_000).unwrap();

        cache.set("a".to_string(), json!(1), None).unwrap();
        cache.set("b".to_string(), json!(2), None).unwrap();
        cache.set("c".to_string(), json!(3), None).unwrap();

        // FIFO: reading "a" does not refresh its position
        cache.get("a").unwrap();
        cache.set("d".to_string(), json!(4), None).unwrap();

        assert_eq!(cache.get("a").unwrap(), None);
        assert_eq!(cache.get("b").unwrap(), Some(json!(2)));
    }

    #[test]
    fn test_overwrite_does_not_refresh_insertion_order() {
        let mut cache = ResponseCache::new(2, 300_000).unwrap();

        cache.set("a".to_string(), json!(1), None).unwrap();
        cache.set("b".to_string(), json!(2), None).unwrap();

        // Overwrite of "a" keeps it the oldest insertion
        cache.set("a".to_string(), json!(10), None).unwrap();
        cache.set("c".to_string(), json!(3), None).unwrap();

        assert_eq!(cache.get("a").unwrap(), None);
        assert_eq!(cache.get("b").unwrap(), Some(json!(2)));
        assert_eq!(cache.get("c").unwrap(), Some(json!(3)));
    }

    #[test]
    fn test_sweep_expired() {
        let mut cache = cache();

        cache.set("soon".to_string(), json!(1), Some(100)).unwrap();
        cache.set("later".to_string(), json!(2), Some(60_000)).unwrap();

        sleep(Duration::from_millis(150));

        let removed = cache.sweep_expired();
        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("later").unwrap(), Some(json!(2)));
    }

    #[test]
    fn test_clear() {
        let mut cache = cache();

        cache.set("k1".to_string(), json!(1), None).unwrap();
        cache.set("k2".to_string(), json!(2), None).unwrap();
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get("k1").unwrap(), None);
    }

    #[test]
    fn test_expired_entries_count_toward_capacity_until_swept() {
        let mut cache = ResponseCache::new(2, 300_000).unwrap();

        cache.set("stale".to_string(), json!(1), Some(50)).unwrap();
        cache.set("live".to_string(), json!(2), None).unwrap();

        sleep(Duration::from_millis(100));

        // "stale" is expired but unswept, so it still holds a slot and is
        // the FIFO victim for the next insert
        assert_eq!(cache.len(), 2);
        cache.set("new".to_string(), json!(3), None).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("live").unwrap(), Some(json!(2)));
        assert_eq!(cache.get("new").unwrap(), Some(json!(3)));
    }
}
