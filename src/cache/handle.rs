//! Cache Handle Module
//!
//! The shared, clonable front door to the expiring cache.
//!
//! A `Cache` is a thin handle over one heap-allocated store guarded by a
//! single `RwLock`. Cloning the handle shares that same store and lock, so
//! there is no way to end up with two independent maps. The handle also owns
//! the background reaper spawned at construction and the channel used to stop
//! it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// Shared handle to a time-bounded in-memory cache.
///
/// Entries live for at most one `interval` past their freshness window: the
/// reaper sweeps the map once per interval and removes everything older than
/// the interval. `get` never checks age itself, so a logically stale entry
/// may still be served until the next sweep.
#[derive(Debug, Clone)]
pub struct Cache {
    inner: Arc<CacheInner>,
}

#[derive(Debug)]
struct CacheInner {
    /// The one shared store; all clones of the handle point here
    store: Arc<RwLock<CacheStore>>,
    /// Freshness window and reaper period, fixed at construction
    interval: Duration,
    /// Stop signal observed by the reaper between ticks
    shutdown: watch::Sender<bool>,
    /// Reaper task handle, taken once by `shutdown`
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and spawns its reaper task.
    ///
    /// The reaper's first sweep happens one full `interval` after creation,
    /// and then once per interval until `shutdown` is called or every handle
    /// is dropped.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper_task(Arc::clone(&store), interval, shutdown_rx);

        Self {
            inner: Arc::new(CacheInner {
                store,
                interval,
                shutdown,
                reaper: Mutex::new(Some(reaper)),
            }),
        }
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`, stamped with the current
    /// instant. Always succeeds.
    pub async fn put(&self, key: impl Into<String>, value: Vec<u8>) {
        self.inner.store.write().await.put(key.into(), value);
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` when absent.
    ///
    /// Takes the write lock: hit/miss counters mutate on every lookup.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.store.write().await.get(key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.inner.store.read().await.stats()
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.inner.store.read().await.len()
    }

    /// The freshness window this cache was built with.
    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to observe the signal.
    ///
    /// Safe to call more than once; later calls return immediately. Entries
    /// are not cleared; the cache stays readable, it just stops sweeping.
    pub async fn shutdown(&self) {
        let _ = self.inner.shutdown.send(true);

        let handle = self.inner.reaper.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(80);

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let cache = Cache::new(INTERVAL);

        cache.put("key", b"value".to_vec()).await;

        assert_eq!(cache.get("key").await, Some(b"value".to_vec()));
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_fresh_entry_survives_within_interval() {
        let cache = Cache::new(INTERVAL);

        cache.put("key", b"value".to_vec()).await;
        tokio::time::sleep(INTERVAL / 2).await;

        assert_eq!(cache.get("key").await, Some(b"value".to_vec()));
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_reaper_removes_expired_entry() {
        let cache = Cache::new(INTERVAL);

        cache.put("key", b"value".to_vec()).await;

        // Past expiry plus at least one reaper period
        tokio::time::sleep(INTERVAL * 3).await;

        assert_eq!(cache.get("key").await, None);
        assert!(cache.stats().await.reaped >= 1);
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_reaper_first_tick_is_not_immediate() {
        let cache = Cache::new(INTERVAL);

        cache.put("key", b"value".to_vec()).await;

        // Well before the first sweep nothing has been reaped
        tokio::time::sleep(INTERVAL / 4).await;
        assert_eq!(cache.stats().await.reaped, 0);
        assert_eq!(cache.len().await, 1);
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_clones_share_one_map() {
        let cache = Cache::new(INTERVAL);
        let clone = cache.clone();

        clone.put("key", b"value".to_vec()).await;

        assert_eq!(cache.get("key").await, Some(b"value".to_vec()));
        assert_eq!(cache.len().await, clone.len().await);
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_reaper() {
        let cache = Cache::new(INTERVAL);

        cache.shutdown().await;

        // With the reaper gone, even ancient entries stay in the map
        cache.put("key", b"value".to_vec()).await;
        tokio::time::sleep(INTERVAL * 3).await;
        assert_eq!(cache.get("key").await, Some(b"value".to_vec()));
    }

    #[tokio::test]
    async fn test_shutdown_is_idempotent() {
        let cache = Cache::new(INTERVAL);

        cache.shutdown().await;
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_concurrent_writers_and_readers() {
        // Interval far above the test's runtime so the reaper never interferes
        let cache = Cache::new(Duration::from_secs(30));
        let mut handles = Vec::new();

        // Writers on distinct keys
        for writer in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for round in 0..20 {
                    let key = format!("writer-{writer}");
                    let value = format!("writer-{writer}-round-{round}").into_bytes();
                    cache.put(key, value).await;
                }
            }));
        }

        // Readers polling arbitrary keys; every observed value must be one
        // the matching writer actually produced, never a torn mix
        for reader in 0..4 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for round in 0..40 {
                    let key = format!("writer-{}", (reader + round) % 8);
                    if let Some(bytes) = cache.get(&key).await {
                        let text = String::from_utf8(bytes).expect("payload is utf-8");
                        assert!(
                            text.starts_with(&format!("{key}-round-")),
                            "torn or misfiled value: {text}"
                        );
                    }
                    tokio::task::yield_now().await;
                }
            }));
        }

        for handle in handles {
            handle.await.expect("task panicked");
        }

        // Every writer's key holds its final round
        for writer in 0..8 {
            let key = format!("writer-{writer}");
            let expected = format!("writer-{writer}-round-19").into_bytes();
            assert_eq!(cache.get(&key).await, Some(expected));
        }
        cache.shutdown().await;
    }
}
