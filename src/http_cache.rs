//! HTTP Cache Module
//!
//! Server-side cache instantiation, wrapped around raw upstream HTTP verbs.
//! Only GET responses are cached; any successful mutating verb clears the
//! entire store. Precision is sacrificed for correctness here because the
//! upstream write surface cannot be inferred from a generic HTTP wrapper.

use std::future::Future;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::cache::{
    CacheSnapshot, CacheStore, CachingWrapper, CallDescriptor, InvalidationPolicy, SharedStore,
    DEFAULT_MAX_SIZE, DEFAULT_TTL_SECONDS,
};

/// HTTP verbs treated as writes against the upstream API.
pub const MUTATING_METHODS: &[&str] = &["POST", "PUT", "DELETE", "PATCH"];

/// Coarse policy: every mutating verb purges the whole store.
fn http_verb_policy() -> InvalidationPolicy {
    MUTATING_METHODS
        .iter()
        .fold(InvalidationPolicy::new(), |policy, method| {
            policy.rule_all(method)
        })
}

// == HTTP Cache ==
/// Caching layer a server process holds in front of its upstream requests.
///
/// Keys derive from the verb plus the request's URL and query parameters,
/// so the same resource fetched with different parameters caches
/// separately. Verbs that are neither GET nor mutating (HEAD, OPTIONS)
/// bypass the cache.
#[derive(Debug)]
pub struct HttpCache {
    wrapper: CachingWrapper<Value>,
}

impl HttpCache {
    // == Constructors ==
    /// Creates a cache with the given capacity and TTL in seconds.
    pub fn new(max_size: usize, ttl_seconds: u64) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(max_size, ttl_seconds)));
        Self::with_store(store)
    }

    /// Wraps an existing shared store, for hosts that also mount the admin
    /// surface or cleanup task over the same cache.
    pub fn with_store(store: SharedStore<Value>) -> Self {
        Self {
            wrapper: CachingWrapper::new(store, http_verb_policy()),
        }
    }

    /// The shared store backing this cache.
    pub fn store(&self) -> SharedStore<Value> {
        self.wrapper.store()
    }

    // == Request ==
    /// Routes one upstream request through the cache. `executor` performs
    /// the actual HTTP call and is only invoked when the cache cannot
    /// answer; its failure passes through untouched and, per the write
    /// rules, a failed mutating request clears nothing.
    pub async fn request<E, F, Fut>(
        &self,
        method: &str,
        url: &str,
        params: Value,
        executor: F,
    ) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        let method = method.to_ascii_uppercase();
        let request = json!({ "url": url, "params": params });

        let call = if method == "GET" {
            CallDescriptor::read(&method, request)
        } else if MUTATING_METHODS.contains(&method.as_str()) {
            CallDescriptor::write(&method, request)
        } else {
            return executor().await;
        };

        self.wrapper.execute(&call, executor).await
    }

    // == Cache Surface ==
    pub async fn stats(&self) -> CacheSnapshot {
        self.wrapper.stats().await
    }

    pub async fn clear_cache(&self) {
        self.wrapper.clear_cache().await;
    }

    pub async fn set_enabled(&self, enabled: bool) {
        self.wrapper.set_enabled(enabled).await;
    }

    pub async fn set_ttl(&self, ttl_seconds: u64) {
        self.wrapper.set_ttl(ttl_seconds).await;
    }

    pub async fn set_max_size(&self, max_size: usize) {
        self.wrapper.set_max_size(max_size).await;
    }
}

impl Default for HttpCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE, DEFAULT_TTL_SECONDS)
    }
}
