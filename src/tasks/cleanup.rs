//! TTL Sweep Task
//!
//! Background task that proactively removes expired cache entries, so an
//! idle cache does not hold dead entries until the next lookup touches them.

use std::time::Duration;

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task loops forever, sleeping for the configured interval between
/// sweeps, and takes the store's write lock only for the sweep itself.
///
/// # Arguments
/// * `cache` - Shared reference to the cache store
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task; abort it during graceful shutdown.
pub fn spawn_cleanup_task(cache: SharedStore<Value>, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
