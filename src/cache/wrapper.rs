//! Caching Wrapper Module
//!
//! Composes key derivation, the store, and the invalidation policy around a
//! call-execution boundary.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{cache_key, CacheSnapshot, CacheStore, InvalidationPolicy, InvalidationScope};

/// A store shared between a wrapper and its host (admin surface, cleanup
/// task). All mutation funnels through this lock.
pub type SharedStore<V> = Arc<RwLock<CacheStore<V>>>;

// == Call Classification ==
/// Whether a call may be served from cache or must always execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// May be served from cache; cached on a successful miss
    Read,
    /// Always executes; triggers invalidation on success
    Write,
}

// == Call Descriptor ==
/// Everything the cache needs to know about one call: its identifier, its
/// parameter set, and its read/write class. What the call actually does is
/// the executor's business.
#[derive(Debug, Clone)]
pub struct CallDescriptor {
    /// Operation identifier (tool name, HTTP verb, ...)
    pub operation: String,
    /// Parameter set, canonicalized during key derivation
    pub params: Value,
    /// Read/write classification
    pub kind: CallKind,
}

impl CallDescriptor {
    pub fn read(operation: impl Into<String>, params: Value) -> Self {
        Self {
            operation: operation.into(),
            params,
            kind: CallKind::Read,
        }
    }

    pub fn write(operation: impl Into<String>, params: Value) -> Self {
        Self {
            operation: operation.into(),
            params,
            kind: CallKind::Write,
        }
    }
}

// == Caching Wrapper ==
/// Routes calls through the cache.
///
/// Reads consult the store before invoking the executor and cache the result
/// of a successful miss. Writes always invoke the executor and, once it has
/// succeeded, purge whatever the policy declares stale. Executor failures
/// pass through with their original error type; a failed read is never
/// cached and a failed write never invalidates.
///
/// The store lock is held only for the bounded map operations, never across
/// the executor's await.
#[derive(Debug)]
pub struct CachingWrapper<V> {
    store: SharedStore<V>,
    policy: InvalidationPolicy,
}

impl<V: Clone> CachingWrapper<V> {
    // == Constructor ==
    pub fn new(store: SharedStore<V>, policy: InvalidationPolicy) -> Self {
        Self { store, policy }
    }

    /// The shared store, for hosts that mount an admin surface or cleanup
    /// task over the same cache.
    pub fn store(&self) -> SharedStore<V> {
        Arc::clone(&self.store)
    }

    // == Execute ==
    /// Runs a call through the cache, deferring to `executor` whenever the
    /// upstream must actually be invoked.
    pub async fn execute<E, F, Fut>(&self, call: &CallDescriptor, executor: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        match call.kind {
            CallKind::Read => self.execute_read(call, executor).await,
            CallKind::Write => self.execute_write(call, executor).await,
        }
    }

    async fn execute_read<E, F, Fut>(&self, call: &CallDescriptor, executor: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let key = cache_key(&call.operation, &call.params);

        // Write lock: a hit bumps recency and the counters.
        if let Some(value) = self.store.write().await.get(&key) {
            debug!(operation = %call.operation, %key, "cache hit");
            return Ok(value);
        }

        debug!(operation = %call.operation, %key, "cache miss");
        let value = executor().await?;
        self.store.write().await.put(key, value.clone());
        Ok(value)
    }

    async fn execute_write<E, F, Fut>(&self, call: &CallDescriptor, executor: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        // The write must be confirmed successful before anything is purged;
        // a failed write leaves stale-but-valid entries in place.
        let value = executor().await?;

        match self.policy.scope(&call.operation) {
            Some(InvalidationScope::All) => {
                let removed = self.store.write().await.invalidate_all();
                debug!(
                    operation = %call.operation,
                    removed, "cache cleared after write"
                );
            }
            Some(InvalidationScope::Prefixes(prefixes)) => {
                let mut store = self.store.write().await;
                let mut removed = 0;
                for prefix in prefixes {
                    removed += store.invalidate_prefix(prefix);
                }
                drop(store);
                if removed > 0 {
                    debug!(
                        operation = %call.operation,
                        removed, "invalidated cached reads after write"
                    );
                }
            }
            None => {}
        }

        Ok(value)
    }

    // == Cache Surface ==
    /// Point-in-time statistics snapshot.
    pub async fn stats(&self) -> CacheSnapshot {
        self.store.read().await.snapshot()
    }

    /// Empties the cache and resets its counters.
    pub async fn clear_cache(&self) {
        self.store.write().await.clear();
    }

    pub async fn set_enabled(&self, enabled: bool) {
        self.store.write().await.set_enabled(enabled);
    }

    pub async fn set_ttl(&self, ttl_seconds: u64) {
        self.store.write().await.set_ttl(ttl_seconds);
    }

    pub async fn set_max_size(&self, max_size: usize) {
        self.store.write().await.set_max_size(max_size);
    }
}
