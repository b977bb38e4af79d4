//! Per-request session pipeline
//!
//! Authentication runs as a fixed sequence of named stages:
//! Extract (bearer token from the Authorization header) → Verify
//! (signature + expiry against the class's secret) → Resolve (principal
//! lookup in the credential store). Authorization (the role gate) is a
//! separate stage layered on top by the `Authorized` extractor.
//!
//! Two logical guards share one `Authenticator`: the access-scoped
//! guard and the refresh-scoped guard differ only in which secret the
//! Verify stage uses, and the two secrets are distinct by construction
//! (`AuthConfig::new`).

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;
use uuid::Uuid;

use crate::claims::TokenClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::store::{CredentialStore, Principal};
use crate::tokens::{self, TokenPair};

/// Which secret the Verify stage checks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Short-lived per-request credential (15 minutes)
    Access,
    /// Long-lived rotation credential (30 days)
    Refresh,
}

/// Owns the signing configuration and the credential store, and runs
/// the session pipeline for inbound requests.
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    config: AuthConfig,
}

impl Authenticator {
    pub fn new(store: Arc<dyn CredentialStore>, config: AuthConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Mint a fresh access/refresh pair for a principal. Stateless: no
    /// store write happens here.
    pub fn issue_pair(&self, principal_id: Uuid) -> Result<TokenPair, AuthError> {
        tokens::issue_pair(&self.config, principal_id)
    }

    /// Run Extract → Verify → Resolve for one request.
    pub async fn authenticate(
        &self,
        headers: &HeaderMap,
        class: TokenClass,
    ) -> Result<Principal, AuthError> {
        let token = Self::extract(headers)?;
        let claims = self.verify(&token, class)?;
        self.resolve(&claims).await
    }

    /// Verify email/password credentials at login and resolve the
    /// principal. Unknown email and wrong password are indistinguishable
    /// to the caller.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        let record = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !dishpatch_common::verify_password(password, &record.password_hash) {
            tracing::debug!("Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(record.principal)
    }

    /// Stage 1 — Extract: pull the bearer token out of the
    /// Authorization header. Absence is rejected before any
    /// verification is attempted.
    fn extract(headers: &HeaderMap) -> Result<String, AuthError> {
        let header = headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;
        tokens::extract_bearer_token(header)
    }

    /// Stage 2 — Verify: signature and expiry against the secret for
    /// the requested token class.
    fn verify(&self, token: &str, class: TokenClass) -> Result<TokenClaims, AuthError> {
        let secret = match class {
            TokenClass::Access => self.config.access_secret(),
            TokenClass::Refresh => self.config.refresh_secret(),
        };
        tokens::verify_at(token, secret, Utc::now())
    }

    /// Stage 3 — Resolve: a valid token must still resolve to a real
    /// principal at request time, not just at issuance time.
    async fn resolve(&self, claims: &TokenClaims) -> Result<Principal, AuthError> {
        let id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidSubject)?;

        self.store
            .find_principal(id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(principal_id = %id, "Token subject no longer resolves");
                AuthError::PrincipalNotFound
            })
    }
}
