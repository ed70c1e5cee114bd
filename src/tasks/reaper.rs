//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background task that sweeps expired entries out of the store.
///
/// The task sleeps for `interval` between sweeps, so the first sweep happens
/// one full interval after spawn, never immediately. Each sweep takes the
/// write lock and removes every entry older than `interval`, which bounds how
/// long a stale entry can outlive its freshness window at one interval.
///
/// The task ends when `true` arrives on the shutdown channel or when the
/// sender side is dropped (i.e. the owning cache is gone). Both are observed
/// between ticks, so a sweep in progress always finishes cleanly.
///
/// # Arguments
/// * `store` - shared store to sweep
/// * `interval` - freshness window and sweep period
/// * `shutdown` - stop signal, flipped to `true` during teardown
///
/// # Returns
/// A JoinHandle the owner awaits during graceful shutdown.
pub fn spawn_reaper_task(
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("starting cache reaper with interval {:?}", interval);

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {
                    let removed = {
                        let mut store = store.write().await;
                        store.purge_expired(interval)
                    };

                    if removed > 0 {
                        info!("reaper removed {} expired entries", removed);
                    } else {
                        debug!("reaper found no expired entries");
                    }
                }
                changed = shutdown.changed() => {
                    // A closed channel means every cache handle is gone;
                    // either way the sweep is over
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        debug!("cache reaper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reaper_removes_expired_entries() {
        let interval = Duration::from_millis(50);
        let store = Arc::new(RwLock::new(CacheStore::new()));
        {
            let mut guard = store.write().await;
            guard.put("doomed".to_string(), b"value".to_vec());
        }

        let (tx, rx) = watch::channel(false);
        let handle = spawn_reaper_task(Arc::clone(&store), interval, rx);

        // Wait past expiry and at least one sweep
        tokio::time::sleep(interval * 3).await;

        {
            let mut guard = store.write().await;
            assert_eq!(guard.get("doomed"), None, "expired entry should be swept");
            assert!(guard.stats().reaped >= 1);
        }

        let _ = tx.send(true);
        let _ = handle.await;
    }

    #[tokio::test]
    async fn test_reaper_preserves_fresh_entries() {
        let interval = Duration::from_millis(50);
        let store = Arc::new(RwLock::new(CacheStore::new()));

        let (tx, rx) = watch::channel(false);
        let handle = spawn_reaper_task(Arc::clone(&store), interval, rx);

        // Keep re-inserting so the entry never outlives the window
        for _ in 0..4 {
            {
                let mut guard = store.write().await;
                guard.put("alive".to_string(), b"value".to_vec());
            }
            tokio::time::sleep(interval / 2).await;
        }

        {
            let mut guard = store.write().await;
            assert_eq!(guard.get("alive"), Some(b"value".to_vec()));
        }

        let _ = tx.send(true);
        let _ = handle.await;
    }

    #[tokio::test]
    async fn test_reaper_stops_on_signal() {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let (tx, rx) = watch::channel(false);
        let handle = spawn_reaper_task(store, Duration::from_millis(50), rx);

        tx.send(true).expect("reaper should still be listening");
        handle.await.expect("reaper should exit cleanly");
    }

    #[tokio::test]
    async fn test_reaper_stops_when_sender_dropped() {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let (tx, rx) = watch::channel(false);
        let handle = spawn_reaper_task(store, Duration::from_millis(50), rx);

        drop(tx);
        handle.await.expect("reaper should exit when channel closes");
    }
}
