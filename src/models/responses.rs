//! Response DTOs for the cache administration API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheSnapshot;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
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

impl From<CacheSnapshot> for StatsResponse {
    fn from(snapshot: CacheSnapshot) -> Self {
        Self {
            enabled: snapshot.enabled,
            size: snapshot.size,
            max_size: snapshot.max_size,
            ttl_seconds: snapshot.ttl_seconds,
            hits: snapshot.hits,
            misses: snapshot.misses,
            evictions: snapshot.evictions,
            hit_rate: snapshot.hit_rate,
        }
    }
}

/// Response body for the clear operation (POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries removed
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cache cleared, {} entries removed", cleared),
            cleared,
        }
    }
}

/// Response body for the config update operation (PUT /config)
///
/// Echoes the configuration now in force.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    /// Success message
    pub message: String,
    /// Whether the cache is enabled
    pub enabled: bool,
    /// TTL now in force
    pub ttl_seconds: u64,
    /// Capacity bound now in force
    pub max_size: usize,
}

impl ConfigResponse {
    pub fn new(snapshot: &CacheSnapshot) -> Self {
        Self {
            message: "Cache configuration updated".to_string(),
            enabled: snapshot.enabled,
            ttl_seconds: snapshot.ttl_seconds,
            max_size: snapshot.max_size,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> CacheSnapshot {
        CacheSnapshot {
            enabled: true,
            size: 2,
            max_size: 100,
            ttl_seconds: 300,
            hits: 6,
            misses: 2,
            evictions: 0,
            hit_rate: 0.75,
        }
    }

    #[test]
    fn test_stats_response_from_snapshot() {
        let resp = StatsResponse::from(snapshot());
        assert_eq!(resp.size, 2);
        assert_eq!(resp.hits, 6);
        assert!((resp.hit_rate - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear_response_serialize() {
        let resp = ClearResponse::new(5);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"cleared\":5"));
        assert!(json.contains("5 entries removed"));
    }

    #[test]
    fn test_config_response_echoes_snapshot() {
        let resp = ConfigResponse::new(&snapshot());
        assert!(resp.enabled);
        assert_eq!(resp.ttl_seconds, 300);
        assert_eq!(resp.max_size, 100);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
