//! Timestamp and nonce validation.
//!
//! The strategy delegates freshness entirely to a [`NonceValidator`]; it
//! imposes no time window of its own. [`MemoryNonceValidator`] is a
//! single-process implementation built on [`oauthkit_core::NonceCache`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use oauthkit_core::{NonceCache, OAuthConfig};
use tracing::debug;

/// The verdict of a nonce validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceVerdict {
    /// The `(timestamp, nonce)` pair has not been used and is acceptable.
    Fresh,
    /// The pair was used before or the timestamp is unacceptable.
    Replayed,
}

/// Trait for checking timestamp/nonce freshness.
#[async_trait]
pub trait NonceValidator: Send + Sync {
    /// Validate the `(timestamp, nonce)` pair of a request.
    async fn validate_nonce(&self, timestamp: u64, nonce: &str) -> anyhow::Result<NonceVerdict>;
}

/// In-memory nonce validator with a symmetric timestamp window.
///
/// Timestamps further than `window` from the current time are refused, and
/// each `(timestamp, nonce)` pair is accepted once. Entries that fall out of
/// the window are evicted on each call.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use oauthkit_auth::replay::MemoryNonceValidator;
///
/// let validator = MemoryNonceValidator::new(Duration::from_secs(300));
/// assert!(validator.cache().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryNonceValidator {
    cache: Arc<NonceCache>,
    window: Duration,
}

impl MemoryNonceValidator {
    /// Create a validator with its own cache.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self::with_cache(Arc::new(NonceCache::new()), window)
    }

    /// Create a validator using the configured nonce window.
    #[must_use]
    pub fn from_config(config: &OAuthConfig) -> Self {
        Self::new(config.nonce_window())
    }

    /// Create a validator over a shared cache.
    #[must_use]
    pub fn with_cache(cache: Arc<NonceCache>, window: Duration) -> Self {
        Self { cache, window }
    }

    /// The underlying nonce cache.
    #[must_use]
    pub fn cache(&self) -> &NonceCache {
        &self.cache
    }

    /// Validate against an explicit current time, in Unix seconds.
    #[must_use]
    pub fn check_at(&self, now: u64, timestamp: u64, nonce: &str) -> NonceVerdict {
        let window = self.window.as_secs();
        self.cache.evict_older_than(now.saturating_sub(window));

        if now.abs_diff(timestamp) > window {
            debug!(timestamp, now, window, "Timestamp outside accepted window");
            return NonceVerdict::Replayed;
        }

        if self.cache.insert(timestamp, nonce) {
            NonceVerdict::Fresh
        } else {
            debug!(timestamp, nonce, "Nonce already used");
            NonceVerdict::Replayed
        }
    }
}

#[async_trait]
impl NonceValidator for MemoryNonceValidator {
    async fn validate_nonce(&self, timestamp: u64, nonce: &str) -> anyhow::Result<NonceVerdict> {
        let now = u64::try_from(Utc::now().timestamp())?;
        Ok(self.check_at(now, timestamp, nonce))
    }
}
