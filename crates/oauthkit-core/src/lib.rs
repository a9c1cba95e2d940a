//! Core types, configuration, and shared state for OAuthKit.
//!
//! This crate provides the building blocks shared by the OAuth 1.0 provider
//! side: the verifier configuration, the protection realm used in challenges,
//! and a concurrent nonce cache that replay validators can build on.

mod config;
mod error;
mod state;
mod types;

pub use config::OAuthConfig;
pub use error::{CoreError, CoreResult};
pub use state::NonceCache;
pub use types::Realm;
