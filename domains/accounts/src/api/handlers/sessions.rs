//! Session lifecycle handlers
//!
//! Implements:
//! - POST /v1/auth/login — Exchange email/password for a token pair
//! - POST /v1/auth/refresh — Rotate a refresh token into a fresh pair
//! - GET /v1/auth/whoami — Return the principal behind an access token

use crate::api::AccountsState;
use axum::{extract::State, Json};
use dishpatch_auth::{AuthError, AuthUser, RefreshUser, Role, TokenPair};
use dishpatch_common::ValidatedJson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request body
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Principal view for auth introspection
#[derive(Debug, Serialize)]
pub struct PrincipalResponse {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<Role>,
}

/// POST /v1/auth/login — Exchange email/password for a token pair.
///
/// Unknown email and wrong password both return 401
/// `INVALID_CREDENTIALS`.
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenPair>, AuthError> {
    let principal = state
        .auth
        .verify_credentials(&request.email, &request.password)
        .await?;

    let pair = state.auth.issue_pair(principal.id)?;
    tracing::info!(principal_id = %principal.id, "Login succeeded");

    Ok(Json(pair))
}

/// POST /v1/auth/refresh — Rotate a refresh token into a fresh pair.
///
/// The `RefreshUser` extractor has already verified the token against
/// the refresh secret and re-resolved the principal, so an expired or
/// forged refresh token (or a deleted account) never reaches this body:
/// the client gets 401 and must log in again. Nothing is written before
/// the new pair exists, so a retry after a network failure is safe.
///
/// The rotated-away refresh token is not blacklisted, and the previous
/// access token keeps its remaining lifetime; expiry is the only bound.
pub async fn refresh(
    State(state): State<AccountsState>,
    RefreshUser(principal): RefreshUser,
) -> Result<Json<TokenPair>, AuthError> {
    let pair = state.auth.issue_pair(principal.id)?;
    tracing::info!(principal_id = %principal.id, "Refresh rotation succeeded");

    Ok(Json(pair))
}

/// GET /v1/auth/whoami — Return the principal behind an access token
pub async fn whoami(AuthUser(principal): AuthUser) -> Json<PrincipalResponse> {
    Json(PrincipalResponse {
        id: principal.id,
        email: principal.email,
        roles: principal.roles,
    })
}
