//! Token error model.

use thiserror::Error;

/// Result type used across the token domain.
pub type TokenResult<T> = Result<T, TokenError>;

/// Token-level error.
///
/// Keep this focused on deterministic input failures (malformed identifiers,
/// undecodable tokens). Whether a decoded identifier refers to a live entity
/// is the data-access layer's concern, not the codec's.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// An identifier was not a 24-character hexadecimal string.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A token could not be decoded in the namespace it was presented to.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// A namespace name outside the closed entity-kind set.
    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),
}

impl TokenError {
    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    pub fn malformed_token(msg: impl Into<String>) -> Self {
        Self::MalformedToken(msg.into())
    }

    pub fn unknown_namespace(msg: impl Into<String>) -> Self {
        Self::UnknownNamespace(msg.into())
    }
}
