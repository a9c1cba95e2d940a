//! Error types for the OAuthKit core.

/// Core error type for OAuthKit infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The realm cannot be embedded in a quoted challenge parameter.
    #[error("invalid realm: {0:?} (must be non-empty printable ASCII without quotes or backslashes)")]
    InvalidRealm(String),

    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidEnvValue {
        /// Name of the environment variable.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Convenience result type for OAuthKit core operations.
pub type CoreResult<T> = Result<T, CoreError>;
