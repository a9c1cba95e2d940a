//! Terminal outcomes of an authentication attempt.
//!
//! Every attempt ends in exactly one [`Outcome`]. Hosts either match on it
//! directly or hand it to an [`OutcomeHandler`] through [`Outcome::dispatch`],
//! which consumes the outcome so it cannot be delivered twice.

use std::fmt;

use http::HeaderValue;
use http::header::InvalidHeaderValue;
use oauthkit_core::Realm;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::credentials::Credentials;
use crate::error::AuthError;

/// The authentication scheme reported in [`AuthInfo::scheme`].
pub const AUTH_SCHEME: &str = "OAuth";

/// Problem codes from the OAuth Problem Reporting extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// The consumer key is unknown or not authorized.
    ConsumerKeyRejected,
    /// The token is unknown, expired, or not authorized.
    TokenRejected,
    /// The timestamp/nonce pair was refused.
    NonceUsed,
    /// The signature does not match.
    SignatureInvalid,
}

impl Problem {
    /// The wire value of the problem code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConsumerKeyRejected => "consumer_key_rejected",
            Self::TokenRejected => "token_rejected",
            Self::NonceUsed => "nonce_used",
            Self::SignatureInvalid => "signature_invalid",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `WWW-Authenticate` challenge.
///
/// # Examples
///
/// ```
/// use oauthkit_auth::outcome::{Challenge, Problem};
/// use oauthkit_core::Realm;
///
/// let challenge = Challenge::new(Realm::default(), Problem::NonceUsed);
/// assert_eq!(
///     challenge.to_string(),
///     r#"OAuth realm="Clients", oauth_problem="nonce_used""#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    realm: Realm,
    problem: Problem,
}

impl Challenge {
    /// Create a challenge for `problem` in `realm`.
    #[must_use]
    pub fn new(realm: Realm, problem: Problem) -> Self {
        Self { realm, problem }
    }

    /// The realm of the challenge.
    #[must_use]
    pub fn realm(&self) -> &Realm {
        &self.realm
    }

    /// The reported problem.
    #[must_use]
    pub fn problem(&self) -> Problem {
        self.problem
    }

    /// Render the challenge as a `WWW-Authenticate` header value.
    pub fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.to_string())
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{AUTH_SCHEME} realm=\"{}\", oauth_problem=\"{}\"",
            self.realm, self.problem
        )
    }
}

/// Protocol values echoed back to the host on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OAuthInfo {
    /// `oauth_callback`, if sent.
    #[serde(rename = "callbackURL", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// `oauth_token`, if sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// `oauth_verifier`, if sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifier: Option<String>,
}

/// Information attached to a successful authentication.
///
/// Serializes as `{"scheme": "OAuth", "oauth": {...}, ...extra}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthInfo {
    /// Always [`AUTH_SCHEME`].
    pub scheme: &'static str,
    /// Protocol values of the request.
    pub oauth: OAuthInfo,
    /// Extra info supplied by the token lookup.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthInfo {
    /// Build the info for `credentials`, merging `extra` at the top level.
    ///
    /// Extra keys named `scheme` or `oauth` are dropped.
    #[must_use]
    pub fn new(credentials: &Credentials, extra: Option<Map<String, Value>>) -> Self {
        let mut extra = extra.unwrap_or_default();
        extra.remove("scheme");
        extra.remove("oauth");

        Self {
            scheme: AUTH_SCHEME,
            oauth: OAuthInfo {
                callback_url: credentials.callback.clone(),
                token: credentials.token.clone(),
                verifier: credentials.verifier.clone(),
            },
            extra,
        }
    }

    /// Look up an extra info value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// The single terminal result of an authentication attempt.
#[derive(Debug)]
pub enum Outcome<I> {
    /// The request is authentic.
    Authenticated {
        /// The consumer identity.
        identity: I,
        /// Protocol and extra information.
        info: AuthInfo,
    },
    /// The request was refused; the client may retry with other credentials.
    Challenged {
        /// The `WWW-Authenticate` challenge.
        challenge: Challenge,
        /// Status override; `None` lets the host choose its default.
        status: Option<http::StatusCode>,
    },
    /// The request could not be evaluated.
    Failed(AuthError),
}

impl<I> Outcome<I> {
    pub(crate) fn challenge(realm: &Realm, problem: Problem) -> Self {
        Self::Challenged {
            challenge: Challenge::new(realm.clone(), problem),
            status: None,
        }
    }

    /// Whether the attempt succeeded.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Deliver the outcome to exactly one of the handler's actions.
    pub fn dispatch<H>(self, handler: &mut H) -> H::Output
    where
        H: OutcomeHandler<I> + ?Sized,
    {
        match self {
            Self::Authenticated { identity, info } => handler.on_success(identity, info),
            Self::Challenged { challenge, status } => handler.on_challenge(challenge, status),
            Self::Failed(err) => handler.on_error(err),
        }
    }
}

/// Host-side actions for the three terminal outcomes.
pub trait OutcomeHandler<I> {
    /// Value produced by every action, e.g. an HTTP response.
    type Output;

    /// The request is authentic.
    fn on_success(&mut self, identity: I, info: AuthInfo) -> Self::Output;

    /// The request must be challenged.
    fn on_challenge(&mut self, challenge: Challenge, status: Option<http::StatusCode>)
    -> Self::Output;

    /// The request could not be evaluated.
    fn on_error(&mut self, err: AuthError) -> Self::Output;
}
