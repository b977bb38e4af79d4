//! Credential store: durable principal records
//!
//! The store is the one shared resource the auth core reads. Principal
//! resolution never mutates the record it reads, so concurrent lookups
//! need no coordination here.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AuthError;
use crate::roles::Role;

/// Identity resolved from a valid token. Read-only to the guard layer
/// within a request's lifetime.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<Role>,
}

impl Principal {
    /// Check whether the principal holds a role tag
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// A principal together with its stored password hash. Only the login
/// path sees this; the hash never travels past the store layer.
#[derive(Debug, Clone)]
pub struct StoredPrincipal {
    pub principal: Principal,
    pub password_hash: String,
}

/// Lookup seam over the durable credential records.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Resolve a principal by id. `Ok(None)` means the principal no
    /// longer exists (deleted account); tokens for it must stop working.
    async fn find_principal(&self, id: Uuid) -> Result<Option<Principal>, AuthError>;

    /// Look up login credentials by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredPrincipal>, AuthError>;
}

/// Row type for principal lookup
#[derive(sqlx::FromRow)]
struct PrincipalRow {
    id: Uuid,
    email: String,
    roles: Vec<String>,
    password_hash: String,
}

impl PrincipalRow {
    fn into_stored(self) -> StoredPrincipal {
        // Unknown tags in the roles column are skipped, not fatal: a
        // principal with a stale tag keeps its remaining roles.
        let roles = self
            .roles
            .iter()
            .filter_map(|tag| {
                let role = Role::parse(tag);
                if role.is_none() {
                    tracing::warn!(tag = %tag, principal_id = %self.id, "Unknown role tag in store");
                }
                role
            })
            .collect();

        StoredPrincipal {
            principal: Principal {
                id: self.id,
                email: self.email,
                roles,
            },
            password_hash: self.password_hash,
        }
    }
}

/// PostgreSQL-backed credential store (runtime `query_as`, no macros).
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_principal(&self, id: Uuid) -> Result<Option<Principal>, AuthError> {
        let row: Option<PrincipalRow> = sqlx::query_as(
            r#"
            SELECT id, email, roles, password_hash
            FROM principals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, principal_id = %id, "Failed to load principal");
            AuthError::StoreUnavailable
        })?;

        Ok(row.map(|r| r.into_stored().principal))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredPrincipal>, AuthError> {
        let row: Option<PrincipalRow> = sqlx::query_as(
            r#"
            SELECT id, email, roles, password_hash
            FROM principals
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to load principal by email");
            AuthError::StoreUnavailable
        })?;

        Ok(row.map(PrincipalRow::into_stored))
    }
}

/// In-memory credential store for tests and local demos.
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    records: Arc<RwLock<HashMap<Uuid, StoredPrincipal>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a principal record, returning its id.
    pub async fn insert(&self, record: StoredPrincipal) -> Uuid {
        let id = record.principal.id;
        self.records.write().await.insert(id, record);
        id
    }

    /// Remove a principal record (simulates account deletion).
    pub async fn remove(&self, id: Uuid) -> bool {
        self.records.write().await.remove(&id).is_some()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_principal(&self, id: Uuid) -> Result<Option<Principal>, AuthError> {
        Ok(self
            .records
            .read()
            .await
            .get(&id)
            .map(|r| r.principal.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredPrincipal>, AuthError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .find(|r| r.principal.email == email)
            .cloned())
    }
}
