//! Per-namespace codec registry.

use maskid_core::{EntityId, Namespace, PublicToken, TokenResult};

use crate::codec::NamespaceCodec;
use crate::config::BaseSecret;

/// One codec per namespace, built once at startup from the base secret.
///
/// Consumers receive a `&CodecRegistry` rather than reaching for ambient
/// globals, so tests can build isolated registries with distinct secrets.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    codecs: [NamespaceCodec; Namespace::ALL.len()],
}

impl CodecRegistry {
    pub fn new(secret: &BaseSecret) -> Self {
        Self {
            codecs: Namespace::ALL.map(|ns| NamespaceCodec::new(secret, ns)),
        }
    }

    /// The codec serving one namespace.
    pub fn codec(&self, namespace: Namespace) -> &NamespaceCodec {
        &self.codecs[namespace.index()]
    }

    /// Mint the public token for an identifier under a namespace.
    pub fn encode(&self, namespace: Namespace, id: EntityId) -> PublicToken {
        self.codec(namespace).encode(id)
    }

    /// Recover the identifier a token was minted from under a namespace.
    pub fn decode(&self, namespace: Namespace, token: &str) -> TokenResult<EntityId> {
        self.codec(namespace).decode(token)
    }

    /// The namespaces this registry serves.
    pub fn namespaces(&self) -> impl Iterator<Item = Namespace> + '_ {
        self.codecs.iter().map(NamespaceCodec::namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_serves_every_namespace() {
        let registry = CodecRegistry::new(&BaseSecret::new("registry-test"));
        let served: Vec<Namespace> = registry.namespaces().collect();
        assert_eq!(served, Namespace::ALL);
        for ns in Namespace::ALL {
            assert_eq!(registry.codec(ns).namespace(), ns);
        }
    }

    #[test]
    fn registry_round_trips_through_every_namespace() {
        let registry = CodecRegistry::new(&BaseSecret::new("registry-test"));
        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        for ns in Namespace::ALL {
            let token = registry.encode(ns, id);
            assert_eq!(registry.decode(ns, token.as_str()).unwrap(), id);
        }
    }

    #[test]
    fn same_identifier_gets_a_distinct_token_per_namespace() {
        let registry = CodecRegistry::new(&BaseSecret::new("registry-test"));
        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        let tokens: Vec<PublicToken> =
            Namespace::ALL.iter().map(|&ns| registry.encode(ns, id)).collect();
        for (i, a) in tokens.iter().enumerate() {
            for b in &tokens[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn registries_with_distinct_secrets_disagree() {
        let a = CodecRegistry::new(&BaseSecret::new("secret-a"));
        let b = CodecRegistry::new(&BaseSecret::new("secret-b"));
        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_ne!(
            a.encode(Namespace::Invoices, id),
            b.encode(Namespace::Invoices, id)
        );
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        let registry = CodecRegistry::new(&BaseSecret::new("registry-test"));
        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        let expected = registry.encode(Namespace::Users, id);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        let token = registry.encode(Namespace::Users, id);
                        assert_eq!(token, expected);
                        assert_eq!(registry.decode(Namespace::Users, token.as_str()).unwrap(), id);
                    }
                });
            }
        });
    }
}
