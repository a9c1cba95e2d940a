//! Extraction of the OAuth credential set from a request.
//!
//! Protocol parameters may arrive in exactly one of three places:
//!
//! 1. the `Authorization: OAuth ...` header,
//! 2. the query string (recognised by the presence of `oauth_signature`),
//! 3. an `application/x-www-form-urlencoded` body (same rule).
//!
//! Presenting them in more than one place, or in none, is a structural error.

use tracing::debug;

use crate::error::AuthError;
use crate::header::{is_oauth, parse_authorization_header};
use crate::request::SignedRequest;

/// The only protocol version this verifier accepts.
pub const OAUTH_VERSION: &str = "1.0";

const SIGNATURE_PARAM: &str = "oauth_signature";

const REQUIRED_PARAMS: [&str; 6] = [
    "oauth_consumer_key",
    "oauth_signature_method",
    "oauth_signature",
    "oauth_timestamp",
    "oauth_nonce",
    "oauth_version",
];

/// Where the protocol parameters were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// The `Authorization` header.
    Header,
    /// The request URI query string.
    Query,
    /// A form-encoded request body.
    Body,
}

/// The parsed OAuth protocol parameters of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// `oauth_consumer_key`.
    pub consumer_key: String,
    /// `oauth_token`, absent for two-legged requests.
    pub token: Option<String>,
    /// `oauth_signature`, already percent-decoded.
    pub signature: String,
    /// `oauth_signature_method` as sent by the client.
    pub signature_method: String,
    /// `oauth_timestamp` in seconds since the Unix epoch.
    pub timestamp: u64,
    /// `oauth_nonce`.
    pub nonce: String,
    /// `oauth_version`.
    pub version: String,
    /// `oauth_callback`.
    pub callback: Option<String>,
    /// `oauth_verifier`.
    pub verifier: Option<String>,
    /// Every parameter of the credential source, in the order received.
    pub params: Vec<(String, String)>,
    /// Where the parameters were found.
    pub source: CredentialSource,
}

impl Credentials {
    /// Locate and parse the credential set of a request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedCredentials`] if no source or more than
    /// one source carries credentials, or a required parameter is missing, and
    /// [`AuthError::UnsupportedVersion`] if `oauth_version` is not `1.0` and
    /// `ignore_version` is not set.
    pub fn from_request(request: &SignedRequest<'_>, ignore_version: bool) -> Result<Self, AuthError> {
        let mut found: Vec<(CredentialSource, Vec<(String, String)>)> = Vec::new();

        if let Some(header) = request.authorization().filter(|h| is_oauth(h)) {
            found.push((CredentialSource::Header, parse_authorization_header(header)?));
        }

        let query = request.query_pairs();
        if has_signature(&query) {
            found.push((CredentialSource::Query, query));
        }

        let form = request.form_pairs();
        if has_signature(&form) {
            found.push((CredentialSource::Body, form));
        }

        if found.len() > 1 {
            return Err(AuthError::malformed(
                "credentials supplied in more than one location",
            ));
        }
        let (source, params) = found
            .pop()
            .ok_or_else(|| AuthError::malformed("no OAuth credentials in request"))?;

        debug!(?source, "Located OAuth credentials");

        let credentials = Self::from_params(params, source)?;
        if !ignore_version && credentials.version != OAUTH_VERSION {
            return Err(AuthError::UnsupportedVersion(credentials.version));
        }
        Ok(credentials)
    }

    /// Build a credential set from decoded protocol parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedCredentials`] if a required parameter is
    /// missing or empty, an `oauth_*` parameter repeats, or the timestamp is
    /// not a plain string of ASCII digits.
    pub fn from_params(
        params: Vec<(String, String)>,
        source: CredentialSource,
    ) -> Result<Self, AuthError> {
        for (i, (name, _)) in params.iter().enumerate() {
            let repeated = params[..i].iter().any(|(earlier, _)| earlier == name);
            if name.starts_with("oauth_") && repeated {
                return Err(AuthError::malformed(format!("duplicate parameter: {name}")));
            }
        }

        for name in REQUIRED_PARAMS {
            if lookup(&params, name).is_none() {
                return Err(AuthError::malformed(format!("missing parameter: {name}")));
            }
        }

        let required = |name: &str| lookup(&params, name).unwrap_or_default().to_owned();
        let optional = |name: &str| lookup(&params, name).map(ToOwned::to_owned);

        let raw_timestamp = required("oauth_timestamp");
        let timestamp = Some(raw_timestamp.as_str())
            .filter(|t| t.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|t| t.parse::<u64>().ok())
            .ok_or_else(|| AuthError::malformed(format!("invalid oauth_timestamp: {raw_timestamp}")))?;

        Ok(Self {
            consumer_key: required("oauth_consumer_key"),
            token: optional("oauth_token"),
            signature: required(SIGNATURE_PARAM),
            signature_method: required("oauth_signature_method"),
            timestamp,
            nonce: required("oauth_nonce"),
            version: required("oauth_version"),
            callback: optional("oauth_callback"),
            verifier: optional("oauth_verifier"),
            params,
            source,
        })
    }

    /// The parameters that take part in the signature base string.
    ///
    /// Credential-source parameters, plus query parameters, plus form body
    /// parameters; each source is counted once. `oauth_signature` is still
    /// present and removed during normalization.
    #[must_use]
    pub fn signature_params(&self, request: &SignedRequest<'_>) -> Vec<(String, String)> {
        let mut all = Vec::new();
        if self.source == CredentialSource::Header {
            all.extend(self.params.iter().cloned());
        }
        all.extend(request.query_pairs());
        all.extend(request.form_pairs());
        all
    }
}

/// First non-empty value for `name`.
fn lookup<'p>(params: &'p [(String, String)], name: &str) -> Option<&'p str> {
    params
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

fn has_signature(params: &[(String, String)]) -> bool {
    params.iter().any(|(k, _)| k == SIGNATURE_PARAM)
}
