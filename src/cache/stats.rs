//! Cache Statistics Module
//!
//! Hit/miss/eviction counters and the snapshot reported to callers.

use serde::Serialize;

// == Cache Stats ==
/// Running counters for cache effectiveness.
///
/// Counters only move on `get` traffic and LRU eviction. Invalidation and
/// expiry sweeps never reset them; only an explicit reset does.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that fell through to the executor (absent or expired)
    pub misses: u64,
    /// Entries removed by LRU eviction
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// `hits / (hits + misses)`, or `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Cache Snapshot ==
/// Point-in-time view of a store: configuration plus counters.
#[derive(Debug, Clone, Serialize)]
pub struct CacheSnapshot {
    /// Whether lookups and inserts are currently active
    pub enabled: bool,
    /// Entries currently held
    pub size: usize,
    /// Capacity bound
    pub max_size: usize,
    /// TTL applied to entries at access time
    pub ttl_seconds: u64,
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that fell through
    pub misses: u64,
    /// Entries removed by LRU eviction
    pub evictions: u64,
    /// `hits / (hits + misses)`, `0.0` before any lookup
    pub hit_rate: f64,
}
