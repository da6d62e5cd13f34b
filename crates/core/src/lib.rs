//! `maskid-core` — identifier-masking domain vocabulary.
//!
//! This crate contains **pure domain** types (no encoding machinery): the
//! canonical entity identifier, the entity namespaces, the public token, and
//! the error taxonomy shared by the codec layer and its consumers.

pub mod error;
pub mod id;
pub mod namespace;
pub mod token;

pub use error::{TokenError, TokenResult};
pub use id::EntityId;
pub use namespace::Namespace;
pub use token::PublicToken;
