//! Common type definitions shared across OAuthKit crates.

use std::fmt;

/// Protection realm advertised in `WWW-Authenticate` challenges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Realm(String);

impl Realm {
    /// Default realm used for consumer authentication.
    pub const DEFAULT: &'static str = "Clients";

    /// Create a new realm.
    ///
    /// # Errors
    /// Returns an error if the realm is empty or contains characters that
    /// cannot appear inside a quoted-string challenge parameter.
    pub fn new(realm: impl Into<String>) -> Result<Self, crate::CoreError> {
        let realm = realm.into();
        let printable = realm
            .chars()
            .all(|c| c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\');
        if realm.is_empty() || !printable {
            return Err(crate::CoreError::InvalidRealm(realm));
        }
        Ok(Self(realm))
    }

    /// Get the realm as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl TryFrom<String> for Realm {
    type Error = crate::CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Realm> for String {
    fn from(realm: Realm) -> Self {
        realm.0
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
