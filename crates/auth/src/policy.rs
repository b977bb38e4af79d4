//! Role gate over an explicit route policy table
//!
//! Required roles are not attached to handlers; they live in one
//! inspectable table keyed by route template (axum's matched path, e.g.
//! `/v1/orders/{id}`), populated at startup and read per request.

use std::collections::{HashMap, HashSet};

use crate::error::AuthError;
use crate::roles::Role;
use crate::store::Principal;

/// Startup-populated map from route template to required role set.
#[derive(Debug, Clone, Default)]
pub struct RoutePolicy {
    rules: HashMap<String, HashSet<Role>>,
}

impl RoutePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the roles permitted on a route. Later declarations for
    /// the same route replace earlier ones.
    pub fn require(mut self, route: &str, roles: &[Role]) -> Self {
        self.rules
            .insert(route.to_string(), roles.iter().copied().collect());
        self
    }

    /// Merge another table into this one (used when composing domain
    /// routers into one application).
    pub fn merge(mut self, other: RoutePolicy) -> Self {
        self.rules.extend(other.rules);
        self
    }

    /// Roles required on a route, if any were declared.
    pub fn required_roles(&self, route: &str) -> Option<&HashSet<Role>> {
        self.rules.get(route)
    }

    /// Decide allow/deny for an authenticated principal on a route.
    ///
    /// Precondition: the session pipeline has already resolved the
    /// principal. This gate never sees unauthenticated requests; the
    /// `Authorized` extractor enforces that ordering by construction.
    ///
    /// A route with no declared roles (or an empty set) admits any
    /// authenticated principal. Otherwise one overlapping role
    /// suffices; all-of semantics are deliberately not offered.
    pub fn authorize(&self, principal: &Principal, route: &str) -> Result<(), AuthError> {
        let required = match self.rules.get(route) {
            None => return Ok(()),
            Some(required) if required.is_empty() => return Ok(()),
            Some(required) => required,
        };

        if principal.roles.iter().any(|role| required.contains(role)) {
            return Ok(());
        }

        tracing::warn!(
            email = %principal.email,
            resource = %route,
            "Role gate denied request"
        );
        Err(AuthError::Forbidden {
            email: principal.email.clone(),
            resource: route.to_string(),
        })
    }
}
