//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached result together with its insertion instant.
///
/// Entries do not carry their own expiry deadline: the store judges an
/// entry's age against whatever TTL is in force at access time, so a TTL
/// change applies retroactively to everything already stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached result
    pub value: V,
    /// When the entry was inserted (monotonic clock)
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }

    // == Is Expired ==
    /// Checks the entry against a TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is
    /// already expired, so a zero TTL expires every entry on first access.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}
