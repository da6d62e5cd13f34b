//! Per-namespace identifier codec.

use maskid_core::{EntityId, Namespace, PublicToken, TokenError, TokenResult};

use crate::config::BaseSecret;
use crate::hashids::HashidEngine;

/// Bidirectional mapping between canonical identifiers and public tokens for
/// a single namespace.
///
/// Stateless after construction; `encode` and `decode` are pure functions of
/// the input and the configured salt, so one instance may be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct NamespaceCodec {
    namespace: Namespace,
    engine: HashidEngine,
}

impl NamespaceCodec {
    /// Build the codec for one namespace. The salt mixes the namespace name
    /// into the base secret, which is what keeps tokens minted under
    /// different namespaces mutually undecodable.
    pub fn new(secret: &BaseSecret, namespace: Namespace) -> Self {
        let salt = secret.salt_for(namespace);
        Self {
            namespace,
            engine: HashidEngine::new(&salt, PublicToken::MIN_LEN),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Mint the public token for an identifier.
    ///
    /// Total: every `EntityId` encodes, the same identifier always yields
    /// the same token, and distinct identifiers never collide.
    pub fn encode(&self, id: EntityId) -> PublicToken {
        let [a, b, c] = id.triple();
        let token = self
            .engine
            .encode(&[u64::from(a), u64::from(b), u64::from(c)]);
        PublicToken::new(token)
    }

    /// Recover the identifier a token was minted from.
    ///
    /// A token minted under another namespace, or any other string, fails
    /// with [`TokenError::MalformedToken`]: the engine rejects what it
    /// cannot re-encode to the same string, and anything that does decode
    /// must still be exactly three 32-bit words.
    pub fn decode(&self, token: &str) -> TokenResult<EntityId> {
        let numbers = self.engine.decode(token).ok_or_else(|| {
            TokenError::malformed_token(format!(
                "token is not decodable under namespace {}",
                self.namespace
            ))
        })?;

        if numbers.len() != 3 {
            return Err(TokenError::malformed_token(format!(
                "expected 3 encoded words, got {}",
                numbers.len()
            )));
        }

        let mut words = [0u32; 3];
        for (word, &n) in words.iter_mut().zip(&numbers) {
            *word = u32::try_from(n).map_err(|_| {
                TokenError::malformed_token("encoded word does not fit 32 bits")
            })?;
        }
        Ok(EntityId::from_triple(words))
    }
}
