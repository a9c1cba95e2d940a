//! Configuration management for the OAuth consumer verifier.
//!
//! All configuration can be driven by environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OAUTH_REALM` | `Clients` | Realm advertised in challenges |
//! | `OAUTH_IGNORE_VERSION` | `false` | Accept any `oauth_version` value |
//! | `OAUTH_TRUST_PROXY` | `false` | Honour `X-Forwarded-Proto` / `X-Forwarded-Host` |
//! | `OAUTH_NONCE_WINDOW_SECS` | `300` | Accepted timestamp skew for the in-memory nonce validator |
//! | `OAUTH_ATTEMPT_TIMEOUT_MS` | *(unset)* | Upper bound for one authentication attempt |

use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::types::Realm;

/// Configuration for OAuth 1.0 request verification.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OAuthConfig {
    /// Realm used in every challenge.
    pub realm: Realm,
    /// Skip the `oauth_version == "1.0"` check.
    pub ignore_version: bool,
    /// Reconstruct the request URL from proxy forwarding headers.
    pub trust_proxy: bool,
    /// Maximum distance, in seconds, between a request timestamp and now.
    pub nonce_window_secs: u64,
    /// Optional deadline, in milliseconds, for a whole authentication attempt.
    pub attempt_timeout_ms: Option<u64>,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            realm: Realm::default(),
            ignore_version: false,
            trust_proxy: false,
            nonce_window_secs: 300,
            attempt_timeout_ms: None,
        }
    }
}

impl OAuthConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Unset variables keep their default value.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let mut config = Self::default();

        if let Some(v) = var("OAUTH_REALM") {
            config.realm = Realm::new(v)?;
        }
        if let Some(v) = var("OAUTH_IGNORE_VERSION") {
            config.ignore_version = parse_flag(&v);
        }
        if let Some(v) = var("OAUTH_TRUST_PROXY") {
            config.trust_proxy = parse_flag(&v);
        }
        if let Some(v) = var("OAUTH_NONCE_WINDOW_SECS") {
            config.nonce_window_secs = parse_number("OAUTH_NONCE_WINDOW_SECS", v)?;
        }
        if let Some(v) = var("OAUTH_ATTEMPT_TIMEOUT_MS") {
            config.attempt_timeout_ms = Some(parse_number("OAUTH_ATTEMPT_TIMEOUT_MS", v)?);
        }

        Ok(config)
    }

    /// The accepted timestamp skew as a [`Duration`].
    #[must_use]
    pub fn nonce_window(&self) -> Duration {
        Duration::from_secs(self.nonce_window_secs)
    }

    /// The attempt deadline as a [`Duration`], if one is configured.
    #[must_use]
    pub fn attempt_timeout(&self) -> Option<Duration> {
        self.attempt_timeout_ms.map(Duration::from_millis)
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn parse_number(name: &'static str, value: String) -> CoreResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::InvalidEnvValue { name, value })
}
