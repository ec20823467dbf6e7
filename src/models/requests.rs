//! Request DTOs for the cache administration API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the config update operation (PUT /config)
///
/// All fields are optional; omitted fields are left unchanged. A body with
/// no fields at all is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigUpdateRequest {
    /// Enable or disable the cache
    #[serde(default)]
    pub enabled: Option<bool>,
    /// New TTL in seconds, applied retroactively at access time
    #[serde(default)]
    pub ttl_seconds: Option<u64>,
    /// New capacity bound; shrinking evicts LRU entries immediately
    #[serde(default)]
    pub max_size: Option<usize>,
}

impl ConfigUpdateRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.enabled.is_none() && self.ttl_seconds.is_none() && self.max_size.is_none() {
            return Some(
                "At least one of enabled, ttl_seconds, max_size must be provided".to_string(),
            );
        }
        None
    }
}
