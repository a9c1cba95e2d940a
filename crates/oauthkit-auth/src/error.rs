//! Error types for OAuth 1.0 request authentication.
//!
//! [`AuthError`] covers the conditions that make a request impossible to
//! evaluate (structural errors), failures reported by the lookup and replay
//! collaborators, and mistakes made while assembling a strategy. Explicit
//! rejections are not errors: they become challenges.

/// Errors that can terminate an authentication attempt.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The OAuth protocol parameters are absent, duplicated across sources,
    /// or missing a required field.
    #[error("Malformed OAuth credentials: {0}")]
    MalformedCredentials(String),

    /// The `oauth_signature_method` is not one this verifier implements.
    #[error("Unsupported signature method: {0}")]
    UnsupportedSignatureMethod(String),

    /// The `oauth_version` is not `1.0`.
    #[error("Unsupported OAuth version: {0}")]
    UnsupportedVersion(String),

    /// A strategy was built without one of its required collaborators.
    #[error("Missing required collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// The attempt did not finish within the configured deadline.
    #[error("Authentication attempt timed out")]
    Timeout,

    /// A lookup or validation collaborator reported an error.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl AuthError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCredentials(reason.into())
    }
}
