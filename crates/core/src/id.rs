//! Canonical entity identifiers as minted by the backing data store.

use core::fmt;
use core::str::FromStr;

use crate::error::{TokenError, TokenResult};

/// Canonical identifier of a stored entity: 24 hexadecimal characters
/// (12 bytes) assigned by the backing store's primary-key generator.
///
/// Parsing accepts either letter case and normalizes to lowercase. The value
/// is held as three big-endian 32-bit words, which is also the numeric form
/// the token codec consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntityId([u32; 3]);

impl EntityId {
    /// Length of the canonical hexadecimal representation.
    pub const HEX_LEN: usize = 24;

    /// Parse an identifier from its hexadecimal representation.
    ///
    /// Anything that is not exactly 24 hex characters is rejected before any
    /// encoding work happens.
    pub fn parse(s: &str) -> TokenResult<Self> {
        if s.len() != Self::HEX_LEN {
            return Err(TokenError::invalid_identifier(format!(
                "expected {} hex characters, got {}",
                Self::HEX_LEN,
                s.len()
            )));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TokenError::invalid_identifier(
                "identifier contains non-hexadecimal characters",
            ));
        }
        let mut words = [0u32; 3];
        for (i, word) in words.iter_mut().enumerate() {
            // 8 ASCII hex digits always fit a u32, so this cannot fail after
            // the checks above.
            *word = u32::from_str_radix(&s[i * 8..(i + 1) * 8], 16)
                .map_err(|e| TokenError::invalid_identifier(e.to_string()))?;
        }
        Ok(Self(words))
    }

    /// The three big-endian 32-bit words of the identifier, in order.
    pub const fn triple(self) -> [u32; 3] {
        self.0
    }

    /// Reassemble an identifier from its numeric triple.
    ///
    /// Total: every triple formats back to exactly 24 hex characters.
    pub const fn from_triple(words: [u32; 3]) -> Self {
        Self(words)
    }

    /// The canonical lowercase hexadecimal representation.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}{:08x}{:08x}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for EntityId {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_lowercase_hex() {
        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn parse_normalizes_uppercase_to_lowercase() {
        let id = EntityId::parse("507F1F77BCF86CD799439011").unwrap();
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
        assert_eq!(id, EntityId::parse("507f1f77bcf86cd799439011").unwrap());
    }

    #[test]
    fn parse_rejects_empty_string() {
        let err = EntityId::parse("").unwrap_err();
        assert!(matches!(err, TokenError::InvalidIdentifier(_)));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(EntityId::parse("507f1f77bcf86cd79943901").is_err());
        assert!(EntityId::parse("507f1f77bcf86cd7994390111").is_err());
    }

    #[test]
    fn parse_rejects_non_hex_characters() {
        // 'g' is one past the hex digit range.
        assert!(EntityId::parse("g07f1f77bcf86cd799439011").is_err());
        // A sign would be accepted by from_str_radix, so it must be caught
        // by the character check first.
        assert!(EntityId::parse("+07f1f77bcf86cd799439011").is_err());
        assert!(EntityId::parse("507f1f77bcf86cd79943901 ").is_err());
    }

    #[test]
    fn parse_rejects_multibyte_input_of_24_bytes() {
        // 23 characters, 24 bytes: length check passes, hex check must not.
        let s = "é0000000000000000000000";
        assert_eq!(s.len(), 24);
        assert!(EntityId::parse(s).is_err());
    }

    #[test]
    fn triple_splits_into_big_endian_words() {
        let id = EntityId::parse("000000010000000200000003").unwrap();
        assert_eq!(id.triple(), [1, 2, 3]);

        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.triple(), [0x507f_1f77, 0xbcf8_6cd7, 0x9943_9011]);
    }

    #[test]
    fn from_triple_inverts_triple() {
        let id = EntityId::from_triple([0, u32::MAX, 7]);
        assert_eq!(id.to_string(), "00000000ffffffff00000007");
        assert_eq!(EntityId::from_triple(id.triple()), id);
    }

    #[test]
    fn boundary_identifiers_round_trip() {
        let zero = EntityId::parse("000000000000000000000000").unwrap();
        assert_eq!(zero.triple(), [0, 0, 0]);
        assert_eq!(zero.to_string(), "000000000000000000000000");

        let max = EntityId::parse("ffffffffffffffffffffffff").unwrap();
        assert_eq!(max.triple(), [u32::MAX; 3]);
        assert_eq!(max.to_string(), "ffffffffffffffffffffffff");
    }

    #[test]
    fn from_str_round_trips() {
        let id: EntityId = "507f1f77bcf86cd799439011".parse().unwrap();
        let again: EntityId = id.to_string().parse().unwrap();
        assert_eq!(id, again);
    }

    #[test]
    fn serde_uses_hex_string_representation() {
        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"507f1f77bcf86cd799439011\"");
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_invalid_identifier() {
        let result: Result<EntityId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(result.is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: every 24-hex string parses and displays as its
            /// lowercase form.
            #[test]
            fn parse_display_is_lowercase_normalization(s in "[0-9a-fA-F]{24}") {
                let id = EntityId::parse(&s).unwrap();
                prop_assert_eq!(id.to_string(), s.to_ascii_lowercase());
            }

            /// Property: display then parse is the identity.
            #[test]
            fn display_parse_is_identity(words in proptest::array::uniform3(any::<u32>())) {
                let id = EntityId::from_triple(words);
                let again = EntityId::parse(&id.to_string()).unwrap();
                prop_assert_eq!(again, id);
                prop_assert_eq!(again.triple(), words);
            }

            /// Property: strings of the wrong length never parse.
            #[test]
            fn wrong_length_never_parses(s in "[0-9a-f]{0,23}|[0-9a-f]{25,40}") {
                prop_assert!(EntityId::parse(&s).is_err());
            }
        }
    }
}
