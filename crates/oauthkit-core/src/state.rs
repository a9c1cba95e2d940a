//! Shared replay-protection state.
//!
//! Provides [`NonceCache`], a thread-safe concurrent record of the
//! `(timestamp, nonce)` pairs already presented to the verifier.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

/// Thread-safe record of seen `(timestamp, nonce)` pairs.
///
/// Uses `DashMap` so concurrent authentication attempts never contend on a
/// single lock.
///
/// # Examples
///
/// ```
/// use oauthkit_core::NonceCache;
///
/// let cache = NonceCache::new();
/// assert!(cache.insert(1_341_176_111, "fNyKdt8Z"));
/// assert!(!cache.insert(1_341_176_111, "fNyKdt8Z"));
/// ```
#[derive(Debug, Default)]
pub struct NonceCache {
    inner: DashMap<(u64, String), ()>,
}

impl NonceCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Record a `(timestamp, nonce)` pair.
    ///
    /// Returns `true` if the pair was not seen before, `false` if it is a
    /// replay. The check and the insert happen atomically.
    pub fn insert(&self, timestamp: u64, nonce: &str) -> bool {
        match self.inner.entry((timestamp, nonce.to_owned())) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(());
                true
            }
        }
    }

    /// Whether the pair has been recorded.
    #[must_use]
    pub fn contains(&self, timestamp: u64, nonce: &str) -> bool {
        self.inner.contains_key(&(timestamp, nonce.to_owned()))
    }

    /// Drop every entry whose timestamp is strictly older than `cutoff`.
    ///
    /// Returns the number of evicted entries.
    pub fn evict_older_than(&self, cutoff: u64) -> usize {
        let before = self.inner.len();
        self.inner.retain(|(timestamp, _), _| *timestamp >= cutoff);
        let evicted = before.saturating_sub(self.inner.len());
        if evicted > 0 {
            debug!(evicted, cutoff, "Evicted stale nonces");
        }
        evicted
    }

    /// Reset all state in the cache.
    pub fn reset(&self) {
        self.inner.clear();
    }

    /// Number of recorded pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
