//! The OAuth consumer authentication strategy.
//!
//! [`ConsumerStrategy::authenticate`] runs the verification pipeline:
//!
//! 1. Locate and parse the OAuth credential set.
//! 2. Resolve the consumer through the [`ConsumerLookup`].
//! 3. Resolve the token through the [`TokenLookup`], when one is present.
//! 4. Rebuild the base string and verify the signature.
//! 5. Validate timestamp and nonce, when a [`NonceValidator`] is configured.
//!
//! Every stage can end the attempt early; the result is always a single
//! [`Outcome`].

use std::fmt;
use std::sync::Arc;

use oauthkit_core::OAuthConfig;
use tracing::{debug, warn};

use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::lookup::{ConsumerLookup, Lookup, TokenLookup};
use crate::outcome::{AuthInfo, Outcome, Problem};
use crate::replay::{NonceValidator, NonceVerdict};
use crate::request::SignedRequest;
use crate::signature::verify_signature;

/// Name under which hosts register this strategy.
pub const STRATEGY_NAME: &str = "oauth";

/// Verifies OAuth 1.0 signed requests on behalf of consumers.
///
/// Cloning is cheap; clones share collaborators and configuration, and
/// concurrent attempts do not coordinate with each other.
pub struct ConsumerStrategy<I> {
    consumers: Arc<dyn ConsumerLookup<Identity = I>>,
    tokens: Arc<dyn TokenLookup>,
    nonces: Option<Arc<dyn NonceValidator>>,
    config: Arc<OAuthConfig>,
}

impl<I> Clone for ConsumerStrategy<I> {
    fn clone(&self) -> Self {
        Self {
            consumers: Arc::clone(&self.consumers),
            tokens: Arc::clone(&self.tokens),
            nonces: self.nonces.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<I> fmt::Debug for ConsumerStrategy<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsumerStrategy")
            .field("validates_nonces", &self.nonces.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<I: Send + 'static> ConsumerStrategy<I> {
    /// Strategy name used for routing.
    pub const NAME: &'static str = STRATEGY_NAME;

    /// Start building a strategy.
    #[must_use]
    pub fn builder() -> ConsumerStrategyBuilder<I> {
        ConsumerStrategyBuilder::default()
    }

    /// Strategy name used for routing.
    #[must_use]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// Authenticate a request.
    ///
    /// Never fails outright: structural problems and collaborator errors are
    /// reported as [`Outcome::Failed`].
    pub async fn authenticate(&self, request: &SignedRequest<'_>) -> Outcome<I> {
        let Some(limit) = self.config.attempt_timeout() else {
            return self.run(request).await;
        };

        if let Ok(outcome) = tokio::time::timeout(limit, self.run(request)).await {
            outcome
        } else {
            warn!(timeout = ?limit, "OAuth authentication attempt timed out");
            Outcome::Failed(AuthError::Timeout)
        }
    }

    async fn run(&self, request: &SignedRequest<'_>) -> Outcome<I> {
        match self.verify(request).await {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(error = %err, "OAuth authentication failed");
                Outcome::Failed(err)
            }
        }
    }

    async fn verify(&self, request: &SignedRequest<'_>) -> Result<Outcome<I>, AuthError> {
        let credentials = Credentials::from_request(request, self.config.ignore_version)?;

        debug!(
            consumer_key = %credentials.consumer_key,
            token = ?credentials.token,
            method = %credentials.signature_method,
            "Verifying OAuth request"
        );

        let consumer = match self
            .consumers
            .lookup_consumer(&credentials.consumer_key)
            .await
            .inspect_err(|err| warn!(error = %err, "Consumer lookup failed"))?
        {
            Lookup::Found(consumer) => consumer,
            Lookup::Rejected => {
                debug!(consumer_key = %credentials.consumer_key, "Consumer rejected");
                return Ok(self.challenge(Problem::ConsumerKeyRejected));
            }
        };

        let grant = match credentials.token.as_deref() {
            Some(token) => match self
                .tokens
                .lookup_token(token)
                .await
                .inspect_err(|err| warn!(error = %err, "Token lookup failed"))?
            {
                Lookup::Found(grant) => Some(grant),
                Lookup::Rejected => {
                    debug!(token, "Token rejected");
                    return Ok(self.challenge(Problem::TokenRejected));
                }
            },
            None => None,
        };

        let token_secret = grant.as_ref().map_or("", |g| g.secret.as_str());
        let signature_ok = verify_signature(
            &credentials,
            request,
            &consumer.secret,
            token_secret,
            self.config.trust_proxy,
        )?;
        if !signature_ok {
            return Ok(self.challenge(Problem::SignatureInvalid));
        }

        if let Some(nonces) = &self.nonces {
            let verdict = nonces
                .validate_nonce(credentials.timestamp, &credentials.nonce)
                .await
                .inspect_err(|err| warn!(error = %err, "Nonce validation failed"))?;
            if verdict == NonceVerdict::Replayed {
                debug!(timestamp = credentials.timestamp, nonce = %credentials.nonce, "Nonce refused");
                return Ok(self.challenge(Problem::NonceUsed));
            }
        }

        debug!(consumer_key = %credentials.consumer_key, "OAuth verification succeeded");
        let info = AuthInfo::new(&credentials, grant.and_then(|g| g.info));
        Ok(Outcome::Authenticated {
            identity: consumer.identity,
            info,
        })
    }

    fn challenge(&self, problem: Problem) -> Outcome<I> {
        Outcome::challenge(&self.config.realm, problem)
    }
}

/// Builder for [`ConsumerStrategy`].
///
/// Both lookups are required; [`build`](Self::build) fails without them.
pub struct ConsumerStrategyBuilder<I> {
    consumers: Option<Arc<dyn ConsumerLookup<Identity = I>>>,
    tokens: Option<Arc<dyn TokenLookup>>,
    nonces: Option<Arc<dyn NonceValidator>>,
    config: OAuthConfig,
}

impl<I> Default for ConsumerStrategyBuilder<I> {
    fn default() -> Self {
        Self {
            consumers: None,
            tokens: None,
            nonces: None,
            config: OAuthConfig::default(),
        }
    }
}

impl<I> fmt::Debug for ConsumerStrategyBuilder<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsumerStrategyBuilder")
            .field("has_consumer_lookup", &self.consumers.is_some())
            .field("has_token_lookup", &self.tokens.is_some())
            .field("has_nonce_validator", &self.nonces.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl<I: Send + 'static> ConsumerStrategyBuilder<I> {
    /// Set the consumer lookup.
    #[must_use]
    pub fn consumer_lookup(mut self, lookup: impl ConsumerLookup<Identity = I> + 'static) -> Self {
        self.consumers = Some(Arc::new(lookup));
        self
    }

    /// Set the token lookup.
    #[must_use]
    pub fn token_lookup(mut self, lookup: impl TokenLookup + 'static) -> Self {
        self.tokens = Some(Arc::new(lookup));
        self
    }

    /// Set the optional timestamp/nonce validator.
    #[must_use]
    pub fn nonce_validator(mut self, validator: impl NonceValidator + 'static) -> Self {
        self.nonces = Some(Arc::new(validator));
        self
    }

    /// Replace the default configuration.
    #[must_use]
    pub fn config(mut self, config: OAuthConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCollaborator`] if the consumer or token
    /// lookup was not provided.
    pub fn build(self) -> Result<ConsumerStrategy<I>, AuthError> {
        let consumers = self
            .consumers
            .ok_or(AuthError::MissingCollaborator("consumer lookup"))?;
        let tokens = self
            .tokens
            .ok_or(AuthError::MissingCollaborator("token lookup"))?;

        Ok(ConsumerStrategy {
            consumers,
            tokens,
            nonces: self.nonces,
            config: Arc::new(self.config),
        })
    }
}
