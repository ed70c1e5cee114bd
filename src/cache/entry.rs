//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry: an opaque byte payload stamped with its
/// insertion time.
///
/// Both fields are immutable after insertion; a later `put` on the same key
/// replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// Monotonic insertion timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks if the entry has outlived the freshness window.
    ///
    /// Boundary condition: an entry is expired only when its age is strictly
    /// greater than the interval, so an entry exactly `interval` old survives
    /// the reaper tick it coincides with.
    pub fn is_expired(&self, interval: Duration) -> bool {
        self.age() > interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_fresh_after_creation() {
        let entry = CacheEntry::new(b"payload".to_vec());

        assert_eq!(entry.value, b"payload");
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(b"payload".to_vec());

        sleep(Duration::from_millis(30));

        assert!(entry.is_expired(Duration::from_millis(10)));
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_age_grows() {
        let entry = CacheEntry::new(Vec::new());
        let first = entry.age();

        sleep(Duration::from_millis(10));

        assert!(entry.age() > first);
    }

    #[test]
    fn test_expiry_requires_age_beyond_interval() {
        let interval = Duration::from_secs(10);

        let young = CacheEntry {
            value: Vec::new(),
            created_at: Instant::now() - interval / 2,
        };
        assert!(!young.is_expired(interval));

        let stale = CacheEntry {
            value: Vec::new(),
            created_at: Instant::now() - interval * 2,
        };
        assert!(stale.is_expired(interval));
    }
}
