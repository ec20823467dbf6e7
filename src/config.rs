//! Configuration Module
//!
//! Loads cache service configuration from environment variables.

use std::env;

use crate::cache::{DEFAULT_MAX_SIZE, DEFAULT_TTL_SECONDS};

/// Cache service configuration.
///
/// All values can be set via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache retains
    pub max_entries: usize,
    /// TTL in seconds applied to entries at access time
    pub ttl_seconds: u64,
    /// HTTP port for the administration surface
    pub server_port: u16,
    /// Interval in seconds between expired-entry sweeps
    pub cleanup_interval: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cached entries (default: 1000)
    /// - `CACHE_TTL` - TTL in seconds (default: 300)
    /// - `SERVER_PORT` - Admin HTTP port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_SIZE),
            ttl_seconds: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECONDS),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_SIZE,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            server_port: 3000,
            cleanup_interval: 1,
        }
    }
}
