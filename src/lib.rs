//! Callcache - TTL + LRU caching layer for device-control API calls
//!
//! Provides a bounded cache with deterministic key derivation and
//! write-triggered selective invalidation, instantiated client-side around
//! logical tool calls ([`ToolCache`]) and server-side around raw upstream
//! HTTP verbs ([`HttpCache`]), plus an HTTP administration surface.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod http_cache;
pub mod models;
pub mod tasks;
pub mod tool_cache;

pub use api::AppState;
pub use config::Config;
pub use http_cache::HttpCache;
pub use tasks::spawn_cleanup_task;
pub use tool_cache::ToolCache;
