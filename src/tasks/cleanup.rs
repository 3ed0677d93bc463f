//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//! Lazy expiry at lookup time is the correctness contract; this sweep
//! only bounds memory growth under low read volume.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Spawns a background task that periodically sweeps expired cache
/// entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the cache to remove
/// expired entries.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort the task during
/// graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<ResponseCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(ResponseCache::new(100, 300_000).unwrap()));

        // Add an entry with a very short TTL
        {
            let mut cache_guard = cache.write().await;
            cache_guard
                .set("expire_soon".to_string(), json!("v"), Some(200))
                .unwrap();
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for the entry to expire and the sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        {
            let cache_guard = cache.read().await;
            assert_eq!(
                cache_guard.len(),
                0,
                "Expired entry should have been swept without a lookup"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Arc::new(RwLock::new(ResponseCache::new(100, 300_000).unwrap()));

        {
            let mut cache_guard = cache.write().await;
            cache_guard
                .set("long_lived".to_string(), json!("v"), Some(3_600_000))
                .unwrap();
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            let result = cache_guard.get("long_lived").unwrap();
            assert_eq!(result, Some(json!("v")), "Valid entry should survive the sweep");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache = Arc::new(RwLock::new(ResponseCache::new(100, 300_000).unwrap()));

        let handle = spawn_cleanup_task(cache, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
