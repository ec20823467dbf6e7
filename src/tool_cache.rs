//! Tool Cache Module
//!
//! Client-side cache instantiation, wrapped around logical device-control
//! operations (tool calls). Carries the read/write classification tables and
//! the fine-grained invalidation rules for the device-control API.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{
    CacheSnapshot, CacheStore, CachingWrapper, CallDescriptor, CallKind, InvalidationPolicy,
    SharedStore, DEFAULT_MAX_SIZE, DEFAULT_TTL_SECONDS,
};

// == Operation Classification ==
/// Read-only operations that may be served from cache.
pub const CACHEABLE_OPERATIONS: &[&str] = &[
    "list_locations",
    "get_location",
    "list_devices",
    "get_device",
    "get_location_rooms",
    "get_room",
    "list_modes",
    "get_current_mode",
    "list_scenes",
    "get_scene",
    "list_rules",
    "get_rule",
    "get_device_components",
    "get_device_capabilities",
    "get_device_health",
];

/// Mutating operations that may invalidate cached reads.
pub const WRITE_OPERATIONS: &[&str] = &[
    "execute_command",
    "create_location",
    "update_location",
    "delete_location",
    "create_room",
    "update_room",
    "delete_room",
    "set_mode",
    "execute_scene",
    "update_device",
    "delete_device",
    "create_rule",
    "update_rule",
    "delete_rule",
    "execute_rule",
];

/// Fine-grained invalidation rules: each write purges only the read classes
/// it can actually make stale. `execute_rule` changes device state, not the
/// rule list, so it purges nothing; `execute_scene` carries no rule at all.
pub fn device_api_policy() -> InvalidationPolicy {
    InvalidationPolicy::new()
        .rule("execute_command", &["get_device_status", "get_device"])
        .rule("update_device", &["list_devices", "get_device"])
        .rule("delete_device", &["list_devices"])
        .rule("create_location", &["list_locations"])
        .rule("update_location", &["list_locations", "get_location"])
        .rule("delete_location", &["list_locations"])
        .rule("create_room", &["get_location_rooms"])
        .rule("update_room", &["get_location_rooms", "get_room"])
        .rule("delete_room", &["get_location_rooms"])
        .rule("set_mode", &["get_current_mode"])
        .rule("create_rule", &["list_rules"])
        .rule("update_rule", &["list_rules", "get_rule"])
        .rule("delete_rule", &["list_rules", "get_rule"])
        .rule("execute_rule", &[])
}

fn classify(operation: &str) -> Option<CallKind> {
    if CACHEABLE_OPERATIONS.contains(&operation) {
        Some(CallKind::Read)
    } else if WRITE_OPERATIONS.contains(&operation) {
        Some(CallKind::Write)
    } else {
        None
    }
}

// == Tool Cache ==
/// Caching layer a client holds in front of its tool-call boundary.
///
/// The client routes every call through [`ToolCache::call`], supplying the
/// executor that performs the actual remote invocation. Operations outside
/// both classification tables bypass the cache entirely.
#[derive(Debug)]
pub struct ToolCache {
    wrapper: CachingWrapper<Value>,
}

impl ToolCache {
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
            wrapper: CachingWrapper::new(store, device_api_policy()),
        }
    }

    /// The shared store backing this cache.
    pub fn store(&self) -> SharedStore<Value> {
        self.wrapper.store()
    }

    // == Call ==
    /// Routes one tool call through the cache.
    ///
    /// Cacheable reads are served from the store when possible; writes
    /// always execute and purge their declared read classes on success;
    /// unclassified operations go straight to the executor.
    pub async fn call<E, F, Fut>(&self, operation: &str, params: Value, executor: F) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        let call = match classify(operation) {
            Some(CallKind::Read) => CallDescriptor::read(operation, params),
            Some(CallKind::Write) => CallDescriptor::write(operation, params),
            None => return executor().await,
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

impl Default for ToolCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE, DEFAULT_TTL_SECONDS)
    }
}
