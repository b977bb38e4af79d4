//! Principal roles for authorization.

use serde::{Deserialize, Serialize};

/// Role tags for the four parties on the platform.
///
/// A principal may hold several roles (a restaurant owner who also
/// orders food holds both `Restaurant` and `Customer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Orders food
    Customer,
    /// Delivers orders
    Courier,
    /// Prepares orders, manages its menu
    Restaurant,
    /// Full administrative access
    Admin,
}

impl Role {
    /// Parse a role tag from a string (case-insensitive).
    /// Used when loading role sets from the credential store.
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "customer" => Some(Role::Customer),
            "courier" => Some(Role::Courier),
            "restaurant" => Some(Role::Restaurant),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Courier => write!(f, "courier"),
            Role::Restaurant => write!(f, "restaurant"),
            Role::Admin => write!(f, "admin"),
        }
    }
}
