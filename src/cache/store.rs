//! Cache Store Module
//!
//! The guarded map at the heart of the cache: plain HashMap storage with
//! time-based expiry swept by the background reaper.
//!
//! Every operation here is infallible. The cache is a best-effort
//! accelerator, never a source of truth, so callers must already cope with a
//! miss; there is nothing useful for `put` or `get` to fail with.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage with insertion timestamps.
///
/// Expiry is NOT checked on `get`: an entry that has outlived the freshness
/// window is still served until the next reaper sweep removes it. That sweep
/// runs once per interval, which bounds staleness at one full interval.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new, empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores a payload under `key`, replacing any previous entry wholesale
    /// and resetting its insertion timestamp.
    ///
    /// Any string is a valid key and any byte sequence (including empty) is a
    /// valid payload.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the payload stored under `key`, however old it is.
    ///
    /// Returns `None` only when the key is absent (never inserted, or already
    /// reaped). An empty payload comes back as `Some(vec![])`, distinct from
    /// absence.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Purge Expired ==
    /// Removes every entry older than `interval`.
    ///
    /// Returns the number of entries removed. Called by the reaper under the
    /// write lock; O(n) in the current entry count.
    pub fn purge_expired(&mut self, interval: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(interval));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
