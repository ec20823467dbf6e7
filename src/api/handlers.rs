//! API Handlers
//!
//! HTTP request handlers for the cache administration surface.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::cache::{CacheStore, SharedStore};
use crate::error::{CacheError, Result};
use crate::models::{ClearResponse, ConfigResponse, ConfigUpdateRequest, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the same shared store a host hands to its `ToolCache` or
/// `HttpCache`, so the admin surface observes and controls the live cache.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: SharedStore<Value>,
}

impl AppState {
    /// Creates a new AppState owning a fresh store.
    pub fn new(cache: CacheStore<Value>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(CacheStore::new(config.max_entries, config.ttl_seconds))
    }

    /// Wraps an existing shared store.
    pub fn with_store(cache: SharedStore<Value>) -> Self {
        Self { cache }
    }
}

/// Handler for GET /stats
///
/// Returns the current cache snapshot: configuration plus counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.snapshot()))
}

/// Handler for POST /clear
///
/// Empties the cache and resets its counters.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.len();
    cache.clear();

    Json(ClearResponse::new(cleared))
}

/// Handler for PUT /config
///
/// Applies a partial configuration update; omitted fields stay unchanged.
pub async fn config_handler(
    State(state): State<AppState>,
    Json(req): Json<ConfigUpdateRequest>,
) -> Result<Json<ConfigResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    if let Some(enabled) = req.enabled {
        cache.set_enabled(enabled);
    }
    if let Some(ttl_seconds) = req.ttl_seconds {
        cache.set_ttl(ttl_seconds);
    }
    if let Some(max_size) = req.max_size {
        cache.set_max_size(max_size);
    }

    Ok(Json(ConfigResponse::new(&cache.snapshot())))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
