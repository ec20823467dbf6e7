//! Cache Store Module
//!
//! Bounded key/value store combining HashMap storage with LRU tracking and
//! TTL expiry. Knows nothing about operations or invalidation rules; those
//! live in the policy and wrapper layers.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheSnapshot, CacheStats, LruTracker};

// == Cache Store ==
/// Generic bounded store with TTL expiry and LRU eviction.
///
/// Values are cloned out on every hit; callers never receive a handle into
/// the store's internal structure. All methods are synchronous, bounded map
/// operations — hosts running concurrent flows serialize access externally
/// (see [`SharedStore`](crate::cache::SharedStore)).
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Recency order for eviction
    lru: LruTracker,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Maximum number of entries retained
    max_size: usize,
    /// TTL applied to entries at access time
    ttl: Duration,
    /// When false, lookups miss and inserts are dropped
    enabled: bool,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a store with the given capacity and TTL in seconds.
    pub fn new(max_size: usize, ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_size,
            ttl: Duration::from_secs(ttl_seconds),
            enabled: true,
        }
    }

    // == Get ==
    /// Looks up a key, returning a clone of the value on a hit.
    ///
    /// An absent key, or one whose entry has outlived the *current* TTL,
    /// is a miss; expired entries are removed on the spot. A hit bumps the
    /// key to most recently used.
    ///
    /// While the store is disabled every lookup reports a miss without
    /// consulting storage or moving the counters.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if !self.enabled {
            return None;
        }

        match self.entries.get(key) {
            Some(entry) if entry.is_expired(self.ttl) => {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                self.lru.touch(key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a value under a key.
    ///
    /// An existing key is overwritten with a fresh timestamp. A new key at
    /// capacity evicts exactly the least recently used entry first. With
    /// `max_size == 0` nothing is ever retained, and while the store is
    /// disabled every put is dropped.
    pub fn put(&mut self, key: String, value: V) {
        if !self.enabled || self.max_size == 0 {
            return;
        }

        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_size {
            self.evict_one();
        }

        self.entries.insert(key.clone(), CacheEntry::new(value));
        self.lru.touch(&key);
    }

    // == Invalidate ==
    /// Removes every entry whose key satisfies the predicate. Returns the
    /// number removed. Counters are untouched.
    pub fn invalidate<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let doomed: Vec<String> = self
            .entries
            .keys()
            .filter(|key| predicate(key))
            .cloned()
            .collect();

        for key in &doomed {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        doomed.len()
    }

    // == Invalidate Prefix ==
    /// Removes every entry cached for the given read operation.
    ///
    /// The match is `operation:` including the separator, so purging
    /// `get_device` leaves `get_device_status` entries alone.
    pub fn invalidate_prefix(&mut self, operation: &str) -> usize {
        let prefix = format!("{}:", operation);
        self.invalidate(|key| key.starts_with(&prefix))
    }

    // == Invalidate All ==
    /// Empties the store unconditionally. Counters are untouched; this is
    /// the policy-driven purge, not the caller-facing clear.
    pub fn invalidate_all(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        removed
    }

    // == Clear ==
    /// Empties the store and resets the counters. This is the explicit
    /// caller action; write-triggered invalidation never resets counters.
    pub fn clear(&mut self) {
        self.invalidate_all();
        self.stats.reset();
    }

    // == Sweep Expired ==
    /// Proactively removes entries that have outlived the current TTL.
    /// Returns the number removed; counters are untouched.
    pub fn sweep_expired(&mut self) -> usize {
        let ttl = self.ttl;
        self.invalidate_entries(|entry| entry.is_expired(ttl))
    }

    fn invalidate_entries<F>(&mut self, doomed: F) -> usize
    where
        F: Fn(&CacheEntry<V>) -> bool,
    {
        let keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| doomed(entry))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        keys.len()
    }

    fn evict_one(&mut self) {
        if let Some(oldest) = self.lru.evict_oldest() {
            self.entries.remove(&oldest);
            self.stats.record_eviction();
        }
    }

    // == Policy Mutators ==
    /// Enables or disables the store. Disabling does not destroy entries;
    /// re-enabling resumes from whatever the store holds, still subject to
    /// TTL at access time.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Changes the TTL for all subsequent accesses. Existing entries are
    /// judged against the new value, so lowering it can retroactively
    /// expire entries that were valid a moment ago.
    pub fn set_ttl(&mut self, ttl_seconds: u64) {
        self.ttl = Duration::from_secs(ttl_seconds);
    }

    /// Changes the capacity bound. Shrinking below the current size evicts
    /// least recently used entries immediately so the bound always holds.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        while self.entries.len() > self.max_size {
            self.evict_one();
        }
    }

    // == Stats ==
    /// Point-in-time snapshot of configuration and counters.
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            enabled: self.enabled,
            size: self.entries.len(),
            max_size: self.max_size,
            ttl_seconds: self.ttl.as_secs(),
            hits: self.stats.hits,
            misses: self.stats.misses,
            evictions: self.stats.evictions,
            hit_rate: self.stats.hit_rate(),
        }
    }

    /// Zeroes the counters without touching stored entries.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // == Accessors ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl.as_secs()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn store() -> CacheStore<String> {
        CacheStore::new(100, 300)
    }

    #[test]
    fn test_put_and_get() {
        let mut cache = store();

        cache.put("list_devices:aa".into(), "devices".into());

        assert_eq!(cache.get("list_devices:aa"), Some("devices".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_absent_is_miss() {
        let mut cache = store();

        assert_eq!(cache.get("missing"), None);
        assert_eq!(cache.snapshot().misses, 1);
    }

    #[test]
    fn test_overwrite_keeps_latest_value() {
        let mut cache = store();

        cache.put("k".into(), "v1".into());
        cache.put("k".into(), "v2".into());

        assert_eq!(cache.get("k"), Some("v2".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_ttl_expiry_on_access() {
        let mut cache = CacheStore::new(100, 1);

        cache.put("k".into(), "v".into());
        assert_eq!(cache.get("k"), Some("v".to_string()));

        sleep(Duration::from_millis(1100));

        assert_eq!(cache.get("k"), None);
        // The expired entry was removed lazily.
        assert!(cache.is_empty());

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.hits, 1);
        assert_eq!(snapshot.misses, 1);
    }

    #[test]
    fn test_zero_ttl_always_misses_but_still_stores() {
        let mut cache: CacheStore<String> = CacheStore::new(100, 0);

        cache.put("k".into(), "v".into());
        assert_eq!(cache.len(), 1, "puts still land with ttl = 0");

        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.snapshot().misses, 1);
    }

    #[test]
    fn test_lowering_ttl_expires_existing_entries() {
        let mut cache: CacheStore<String> = CacheStore::new(100, 300);

        cache.put("k".into(), "v".into());
        assert!(cache.get("k").is_some());

        cache.set_ttl(0);
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_lru_eviction_at_capacity() {
        let mut cache: CacheStore<String> = CacheStore::new(3, 300);

        cache.put("a".into(), "1".into());
        cache.put("b".into(), "2".into());
        cache.put("c".into(), "3".into());
        cache.put("d".into(), "4".into());

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("a"), None, "oldest entry evicted");
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
        assert!(cache.get("d").is_some());
        assert_eq!(cache.snapshot().evictions, 1);
    }

    #[test]
    fn test_recency_bump_protects_from_eviction() {
        let mut cache: CacheStore<String> = CacheStore::new(2, 300);

        cache.put("a".into(), "1".into());
        cache.put("b".into(), "2".into());
        cache.get("a");
        cache.put("c".into(), "3".into());

        assert!(cache.get("a").is_some());
        assert_eq!(cache.get("b"), None, "b was least recently used");
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_max_size_one_keeps_only_latest() {
        let mut cache: CacheStore<String> = CacheStore::new(1, 300);

        cache.put("a".into(), "1".into());
        cache.put("b".into(), "2".into());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a"), None);
        assert!(cache.get("b").is_some());
    }

    #[test]
    fn test_max_size_zero_retains_nothing() {
        let mut cache: CacheStore<String> = CacheStore::new(0, 300);

        cache.put("a".into(), "1".into());

        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn test_shrinking_max_size_evicts_lru_entries() {
        let mut cache: CacheStore<String> = CacheStore::new(3, 300);

        cache.put("a".into(), "1".into());
        cache.put("b".into(), "2".into());
        cache.put("c".into(), "3".into());
        cache.get("a"); // most recently used

        cache.set_max_size(1);

        assert_eq!(cache.len(), 1);
        assert!(cache.get("a").is_some());
    }

    #[test]
    fn test_invalidate_prefix_respects_separator() {
        let mut cache = store();

        cache.put("get_device:aa".into(), "one".into());
        cache.put("get_device:bb".into(), "two".into());
        cache.put("get_device_status:cc".into(), "status".into());

        let removed = cache.invalidate_prefix("get_device");

        assert_eq!(removed, 2);
        assert_eq!(cache.get("get_device:aa"), None);
        assert_eq!(cache.get("get_device:bb"), None);
        assert!(
            cache.get("get_device_status:cc").is_some(),
            "longer operation name shares a prefix but is a different class"
        );
    }

    #[test]
    fn test_invalidate_missing_prefix_is_silent() {
        let mut cache = store();

        cache.put("list_rules:aa".into(), "rules".into());

        assert_eq!(cache.invalidate_prefix("list_devices"), 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_all_preserves_counters() {
        let mut cache = store();

        cache.put("k".into(), "v".into());
        cache.get("k");
        cache.get("missing");

        let removed = cache.invalidate_all();

        assert_eq!(removed, 1);
        assert!(cache.is_empty());
        let snapshot = cache.snapshot();
        assert_eq!(snapshot.hits, 1);
        assert_eq!(snapshot.misses, 1);
    }

    #[test]
    fn test_clear_resets_counters() {
        let mut cache = store();

        cache.put("k".into(), "v".into());
        cache.get("k");
        cache.get("missing");

        cache.clear();

        assert!(cache.is_empty());
        let snapshot = cache.snapshot();
        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.misses, 0);
    }

    #[test]
    fn test_disabled_get_misses_without_counting() {
        let mut cache = store();

        cache.put("k".into(), "v".into());
        cache.set_enabled(false);

        assert_eq!(cache.get("k"), None);
        let snapshot = cache.snapshot();
        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.misses, 0);
    }

    #[test]
    fn test_disabled_put_is_dropped() {
        let mut cache = store();

        cache.set_enabled(false);
        cache.put("k".into(), "v".into());
        cache.set_enabled(true);

        assert_eq!(cache.get("k"), None, "entry put while disabled never existed");
    }

    #[test]
    fn test_reenabling_resumes_with_prior_entries() {
        let mut cache = store();

        cache.put("k".into(), "v".into());
        cache.set_enabled(false);
        assert_eq!(cache.get("k"), None);
        cache.set_enabled(true);

        assert_eq!(
            cache.get("k"),
            Some("v".to_string()),
            "entries from before the disabled window are still live"
        );
    }

    #[test]
    fn test_sweep_expired_removes_only_stale_entries() {
        let mut cache: CacheStore<String> = CacheStore::new(100, 1);

        cache.put("old".into(), "1".into());
        sleep(Duration::from_millis(1100));
        cache.put("fresh".into(), "2".into());

        // "old" is past the 1 s TTL, "fresh" is not.
        let swept = cache.sweep_expired();

        assert_eq!(swept, 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("fresh").is_some());
    }

    #[test]
    fn test_snapshot_reflects_configuration() {
        let mut cache = store();
        cache.put("k".into(), "v".into());

        let snapshot = cache.snapshot();
        assert!(snapshot.enabled);
        assert_eq!(snapshot.size, 1);
        assert_eq!(snapshot.max_size, 100);
        assert_eq!(snapshot.ttl_seconds, 300);
    }
}
