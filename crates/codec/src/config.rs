//! Base-secret configuration.

use core::fmt;
use std::env;

use maskid_core::Namespace;

/// Environment variable holding the process-wide base secret.
pub const SECRET_ENV_VAR: &str = "MASKID_SECRET";

/// Used by [`BaseSecret::from_env`] when the variable is unset or blank.
/// Not a secret: tokens minted with it are reproducible by anyone, which is
/// acceptable for local development only.
const DEV_FALLBACK: &str = "maskid-dev-secret";

/// Process-wide base secret that per-namespace salts derive from.
///
/// Changing the secret changes every minted token, so it must be stable
/// across the deployments that exchange tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct BaseSecret(String);

impl BaseSecret {
    /// Wrap an explicitly supplied secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Read the secret from [`SECRET_ENV_VAR`], falling back to the insecure
    /// dev default when unset or blank.
    ///
    /// The fallback weakens token unguessability across deployments sharing
    /// it, so taking it is logged at WARN. Call this once at startup.
    pub fn from_env() -> Self {
        Self::resolve(env::var(SECRET_ENV_VAR).ok())
    }

    fn resolve(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self(v),
            _ => {
                tracing::warn!("{SECRET_ENV_VAR} not set; using insecure dev default");
                Self(DEV_FALLBACK.to_string())
            }
        }
    }

    /// Salt for one namespace's codec: `base + "-" + namespace`.
    pub(crate) fn salt_for(&self, namespace: Namespace) -> String {
        format!("{}-{}", self.0, namespace)
    }
}

impl fmt::Debug for BaseSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BaseSecret(<redacted>)")
    }
}
