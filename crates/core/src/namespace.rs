//! Entity namespaces.
//!
//! Each namespace owns an independent token codec; a token minted for one
//! kind of entity is not meaningful under another.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// The closed set of entity kinds that expose public tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Invoices,
    Products,
    Suppliers,
    Customers,
    Employees,
    Users,
    Companies,
    Estimates,
}

impl Namespace {
    /// Every namespace, in declaration order. Declaration order is also the
    /// `index` order, which the codec registry relies on.
    pub const ALL: [Namespace; 8] = [
        Namespace::Invoices,
        Namespace::Products,
        Namespace::Suppliers,
        Namespace::Customers,
        Namespace::Employees,
        Namespace::Users,
        Namespace::Companies,
        Namespace::Estimates,
    ];

    /// The namespace's canonical lowercase name, as mixed into codec salts.
    pub const fn as_str(self) -> &'static str {
        match self {
            Namespace::Invoices => "invoices",
            Namespace::Products => "products",
            Namespace::Suppliers => "suppliers",
            Namespace::Customers => "customers",
            Namespace::Employees => "employees",
            Namespace::Users => "users",
            Namespace::Companies => "companies",
            Namespace::Estimates => "estimates",
        }
    }

    /// Stable position of this namespace within [`Namespace::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::ALL
            .into_iter()
            .find(|ns| ns.as_str() == s)
            .ok_or_else(|| TokenError::unknown_namespace(s))
    }
}
