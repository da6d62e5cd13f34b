//! Public tokens.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The opaque, URL-safe string exposed in place of a canonical identifier.
///
/// Tokens are minted by the per-namespace codec and carry no contract beyond
/// being over the 62-character alphabet and at least [`PublicToken::MIN_LEN`]
/// characters long. Callers must not parse them, order them, or rely on any
/// particular length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicToken(String);

impl PublicToken {
    /// Minimum length of every minted token.
    pub const MIN_LEN: usize = 10;

    /// Wrap an already-encoded token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PublicToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PublicToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PublicToken> for String {
    fn from(token: PublicToken) -> Self {
        token.0
    }
}
