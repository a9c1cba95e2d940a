//! OAuth 1.0 signature computation and verification.
//!
//! The signature is computed over the base string (see [`crate::base_string`])
//! with the key:
//!
//! ```text
//! encode(consumer_secret) & encode(token_secret)
//! ```
//!
//! where the token secret is empty for two-legged requests. Supported methods:
//!
//! - `HMAC-SHA1`: `Base64(HMAC-SHA1(key, base_string))`
//! - `HMAC-SHA256`: `Base64(HMAC-SHA256(key, base_string))`
//! - `PLAINTEXT`: the key itself

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha1::Sha1;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::base_string::{build_base_string, normalize_params, percent_encode, request_base_url};
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::request::SignedRequest;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// A signature method this verifier can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureMethod {
    /// `HMAC-SHA1` (RFC 5849, section 3.4.2).
    HmacSha1,
    /// `HMAC-SHA256`, the common SHA-2 variant of `HMAC-SHA1`.
    HmacSha256,
    /// `PLAINTEXT` (RFC 5849, section 3.4.4).
    Plaintext,
}

impl SignatureMethod {
    /// The wire name of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HmacSha1 => "HMAC-SHA1",
            Self::HmacSha256 => "HMAC-SHA256",
            Self::Plaintext => "PLAINTEXT",
        }
    }
}

impl FromStr for SignatureMethod {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HMAC-SHA1" => Ok(Self::HmacSha1),
            "HMAC-SHA256" => Ok(Self::HmacSha256),
            "PLAINTEXT" => Ok(Self::Plaintext),
            other => Err(AuthError::UnsupportedSignatureMethod(other.to_owned())),
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the signing key from the consumer and token secrets.
///
/// # Examples
///
/// ```
/// use oauthkit_auth::signature::signing_key;
///
/// assert_eq!(signing_key("ssh-secret", ""), "ssh-secret&");
/// assert_eq!(signing_key("a&b", "c d"), "a%26b&c%20d");
/// ```
#[must_use]
pub fn signing_key(consumer_secret: &str, token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    )
}

/// Compute the signature of `base_string` under `key`.
#[must_use]
pub fn compute_signature(method: SignatureMethod, key: &str, base_string: &str) -> String {
    match method {
        SignatureMethod::HmacSha1 => {
            let mut mac =
                HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can accept any key length");
            mac.update(base_string.as_bytes());
            BASE64.encode(mac.finalize().into_bytes())
        }
        SignatureMethod::HmacSha256 => {
            let mut mac = HmacSha256::new_from_slice(key.as_bytes())
                .expect("HMAC can accept any key length");
            mac.update(base_string.as_bytes());
            BASE64.encode(mac.finalize().into_bytes())
        }
        SignatureMethod::Plaintext => key.to_owned(),
    }
}

/// Build the signature base string of an incoming request.
///
/// # Errors
///
/// Returns [`AuthError::MalformedCredentials`] if the request host cannot be
/// determined.
pub fn request_base_string(
    credentials: &Credentials,
    request: &SignedRequest<'_>,
    trust_proxy: bool,
) -> Result<String, AuthError> {
    let base_url = request_base_url(request, trust_proxy)?;
    let params = normalize_params(&credentials.signature_params(request));
    Ok(build_base_string(request.method(), &base_url, &params))
}

/// Verify the signature carried by `credentials`.
///
/// Returns `Ok(true)` when the supplied signature matches, `Ok(false)` when
/// it does not.
///
/// # Errors
///
/// Returns [`AuthError::UnsupportedSignatureMethod`] if the declared method
/// is not implemented, and [`AuthError::MalformedCredentials`] if the request
/// host cannot be determined.
pub fn verify_signature(
    credentials: &Credentials,
    request: &SignedRequest<'_>,
    consumer_secret: &str,
    token_secret: &str,
    trust_proxy: bool,
) -> Result<bool, AuthError> {
    let method: SignatureMethod = credentials.signature_method.parse()?;

    let base_string = request_base_string(credentials, request, trust_proxy)?;
    debug!(base_string = %base_string, %method, "Built signature base string");

    let key = signing_key(consumer_secret, token_secret);
    let expected = compute_signature(method, &key, &base_string);

    let matched: bool = credentials
        .signature
        .as_bytes()
        .ct_eq(expected.as_bytes())
        .into();
    if !matched {
        debug!(
            consumer_key = %credentials.consumer_key,
            provided = %credentials.signature,
            "Signature mismatch"
        );
    }
    Ok(matched)
}
