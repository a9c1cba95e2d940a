//! Consumer and token lookup collaborators.
//!
//! This module defines the [`ConsumerLookup`] and [`TokenLookup`] traits the
//! strategy uses to resolve identities and shared secrets, along with
//! [`StaticConsumerStore`] and [`StaticTokenStore`] for testing and
//! development use cases.
//!
//! A lookup has three outcomes: `Ok(Lookup::Found(..))`, an explicit
//! `Ok(Lookup::Rejected)`, or `Err(..)` when the backing store itself fails.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// The result of a successful lookup call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The key is known and authorized.
    Found(T),
    /// The key is unknown or not authorized.
    Rejected,
}

impl<T> Lookup<T> {
    /// Convert an `Option` into a lookup result, rejecting `None`.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Rejected, Self::Found)
    }
}

/// A consumer (client application) resolved from its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumer<I> {
    /// Application-defined identity.
    pub identity: I,
    /// Shared secret used to sign requests.
    pub secret: String,
}

/// A request or access token resolved from its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenGrant {
    /// Token secret used to sign requests.
    pub secret: String,
    /// Extra information merged into the authentication info.
    pub info: Option<Map<String, Value>>,
}

impl TokenGrant {
    /// A grant carrying only a secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            info: None,
        }
    }

    /// Attach extra information to the grant.
    #[must_use]
    pub fn with_info(mut self, info: Map<String, Value>) -> Self {
        self.info = Some(info);
        self
    }
}

/// Trait for resolving consumers by consumer key.
///
/// Implementations may back this with a database, configuration file,
/// or any other consumer registry.
#[async_trait]
pub trait ConsumerLookup: Send + Sync {
    /// Identity type handed back on successful authentication.
    type Identity;

    /// Resolve the consumer for `consumer_key`.
    async fn lookup_consumer(
        &self,
        consumer_key: &str,
    ) -> anyhow::Result<Lookup<Consumer<Self::Identity>>>;
}

/// Trait for resolving request/access tokens.
///
/// Only called after the consumer has been resolved.
#[async_trait]
pub trait TokenLookup: Send + Sync {
    /// Resolve the secret and extra info for `token`.
    async fn lookup_token(&self, token: &str) -> anyhow::Result<Lookup<TokenGrant>>;
}

/// A simple in-memory consumer registry backed by a `HashMap`.
///
/// Suitable for testing and development environments. For production use,
/// implement [`ConsumerLookup`] over a secure store.
///
/// # Examples
///
/// ```
/// use oauthkit_auth::lookup::StaticConsumerStore;
///
/// let store = StaticConsumerStore::new(vec![
///     ("abc123".to_owned(), "user-1".to_owned(), "ssh-secret".to_owned()),
/// ]);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StaticConsumerStore<I> {
    consumers: HashMap<String, Consumer<I>>,
}

impl<I> StaticConsumerStore<I> {
    /// Create a store from `(consumer_key, identity, secret)` triples.
    pub fn new(consumers: impl IntoIterator<Item = (String, I, String)>) -> Self {
        Self {
            consumers: consumers
                .into_iter()
                .map(|(key, identity, secret)| (key, Consumer { identity, secret }))
                .collect(),
        }
    }

    /// Number of registered consumers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    /// Whether no consumer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }
}

#[async_trait]
impl<I> ConsumerLookup for StaticConsumerStore<I>
where
    I: Clone + Send + Sync,
{
    type Identity = I;

    async fn lookup_consumer(&self, consumer_key: &str) -> anyhow::Result<Lookup<Consumer<I>>> {
        Ok(Lookup::from_option(self.consumers.get(consumer_key).cloned()))
    }
}

/// A simple in-memory token registry backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenStore {
    tokens: HashMap<String, TokenGrant>,
}

impl StaticTokenStore {
    /// Create a store from `(token, grant)` pairs.
    pub fn new(tokens: impl IntoIterator<Item = (String, TokenGrant)>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }
}

#[async_trait]
impl TokenLookup for StaticTokenStore {
    async fn lookup_token(&self, token: &str) -> anyhow::Result<Lookup<TokenGrant>> {
        Ok(Lookup::from_option(self.tokens.get(token).cloned()))
    }
}
