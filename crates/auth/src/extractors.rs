//! Axum extractors for authentication and authorization
//!
//! Generic over any state `S` where `Authenticator: FromRef<S>` (and,
//! for `Authorized`, `RoutePolicy: FromRef<S>`). This is axum's
//! idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts, MatchedPath},
    http::request::Parts,
};

use crate::error::AuthError;
use crate::pipeline::{Authenticator, TokenClass};
use crate::policy::RoutePolicy;
use crate::store::Principal;

/// Principal authenticated with an access token.
#[derive(Debug)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    Authenticator: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let auth = Authenticator::from_ref(state);
        let principal = auth.authenticate(&parts.headers, TokenClass::Access).await?;
        Ok(AuthUser(principal))
    }
}

/// Principal authenticated with a refresh token.
///
/// Used only by the rotation endpoint. The refresh-scoped guard shares
/// no secret with the access-scoped one, so an access token presented
/// here fails verification.
#[derive(Debug)]
pub struct RefreshUser(pub Principal);

impl<S> FromRequestParts<S> for RefreshUser
where
    Authenticator: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let auth = Authenticator::from_ref(state);
        let principal = auth
            .authenticate(&parts.headers, TokenClass::Refresh)
            .await?;
        Ok(RefreshUser(principal))
    }
}

/// Session guard plus role gate, in that order.
///
/// Composes `AuthUser` first, so the role gate can never observe a
/// request without a resolved principal. The route identifier for the
/// policy lookup is the matched route template (`/v1/orders/{id}`, not
/// the concrete URI); a request with no recorded template is denied
/// rather than looked up by its raw path.
#[derive(Debug)]
pub struct Authorized(pub Principal);

impl<S> FromRequestParts<S> for Authorized
where
    Authenticator: FromRef<S>,
    RoutePolicy: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(principal) = AuthUser::from_request_parts(parts, state).await?;

        // The policy table is keyed by route template. A templated route
        // looked up by its concrete path would never match its declared
        // roles, so a missing template denies instead of guessing.
        let Some(route) = parts
            .extensions
            .get::<MatchedPath>()
            .map(|m| m.as_str().to_string())
        else {
            tracing::warn!(path = %parts.uri.path(), "No matched route template for authorization");
            return Err(AuthError::Forbidden {
                email: principal.email.clone(),
                resource: parts.uri.path().to_string(),
            });
        };

        let policy = RoutePolicy::from_ref(state);
        policy.authorize(&principal, &route)?;

        Ok(Authorized(principal))
    }
}
