//! OAuth 1.0 consumer request authentication for OAuthKit.
//!
//! This crate implements the provider side of OAuth 1.0 (RFC 5849): given an
//! incoming HTTP request carrying OAuth protocol parameters, it decides whether
//! the request was signed by a known consumer, optionally on behalf of a
//! request or access token.
//!
//! # Overview
//!
//! The [`ConsumerStrategy`] parses the credential set, resolves the consumer
//! and token through pluggable lookups, rebuilds the signature base string,
//! verifies the signature, and finally checks timestamp/nonce freshness. The
//! result is a single [`Outcome`]: authenticated, challenged (with a
//! `WWW-Authenticate` value such as
//! `OAuth realm="Clients", oauth_problem="consumer_key_rejected"`), or failed.
//!
//! # Usage
//!
//! ```rust
//! use oauthkit_auth::{ConsumerStrategy, Outcome, SignedRequest};
//! use oauthkit_auth::lookup::{StaticConsumerStore, StaticTokenStore};
//!
//! # async fn run() {
//! let strategy = ConsumerStrategy::builder()
//!     .consumer_lookup(StaticConsumerStore::new(vec![(
//!         "abc123".to_owned(),
//!         "client-1".to_owned(),
//!         "ssh-secret".to_owned(),
//!     )]))
//!     .token_lookup(StaticTokenStore::default())
//!     .build()
//!     .expect("both lookups are set");
//!
//! let (parts, ()) = http::Request::builder()
//!     .uri("http://127.0.0.1:3000/photos")
//!     .body(())
//!     .unwrap()
//!     .into_parts();
//!
//! match strategy.authenticate(&SignedRequest::new(&parts)).await {
//!     Outcome::Authenticated { identity, .. } => println!("hello {identity}"),
//!     Outcome::Challenged { challenge, .. } => println!("401: {challenge}"),
//!     Outcome::Failed(err) => println!("500: {err}"),
//! }
//! # }
//! ```
//!
//! # Modules
//!
//! - [`base_string`] - Signature base string construction
//! - [`credentials`] - Locating and parsing the OAuth credential set
//! - [`error`] - Authentication error types
//! - [`header`] - `Authorization: OAuth` header parsing
//! - [`lookup`] - Consumer and token lookup traits and in-memory stores
//! - [`outcome`] - Terminal outcomes, challenges, and host dispatch
//! - [`replay`] - Timestamp/nonce validation
//! - [`request`] - The request view handed to the verifier
//! - [`signature`] - Signature methods and verification
//! - [`strategy`] - The authentication pipeline

pub mod base_string;
pub mod credentials;
pub mod error;
pub mod header;
pub mod lookup;
pub mod outcome;
pub mod replay;
pub mod request;
pub mod signature;
pub mod strategy;

pub use credentials::Credentials;
pub use error::AuthError;
pub use lookup::{Consumer, ConsumerLookup, Lookup, TokenGrant, TokenLookup};
pub use outcome::{AuthInfo, Challenge, Outcome, OutcomeHandler, Problem};
pub use replay::{MemoryNonceValidator, NonceValidator, NonceVerdict};
pub use request::SignedRequest;
pub use signature::SignatureMethod;
pub use strategy::{ConsumerStrategy, ConsumerStrategyBuilder, STRATEGY_NAME};
