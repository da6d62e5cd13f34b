//! `maskid-codec` — reversible, namespace-isolated encoding of canonical
//! entity identifiers into short public tokens.
//!
//! A canonical identifier (24 hex characters) is split into three 32-bit
//! words and run through a salted, alphabet-permuted positional encoder; the
//! salt mixes a process-wide base secret with the namespace name, so each
//! entity kind gets its own bijection. Tokens are non-sequential and
//! unguessable in the casual sense only: this is display obfuscation, never
//! an access-control mechanism.

pub mod codec;
pub mod config;
mod hashids;
pub mod registry;

pub use codec::NamespaceCodec;
pub use config::{BaseSecret, SECRET_ENV_VAR};
pub use registry::CodecRegistry;
