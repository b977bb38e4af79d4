//! Token issuance and verification
//!
//! Access and refresh tokens are HS256 JWTs signed with distinct secrets.
//! Issuance is stateless: no server-side record is written, validity is
//! solely a function of signature and expiry.

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use uuid::Uuid;

use crate::claims::TokenClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// An access/refresh pair, always minted together from the same
/// principal id at the same issuance instant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Issue an access/refresh pair for a principal.
pub fn issue_pair(config: &AuthConfig, principal_id: Uuid) -> Result<TokenPair, AuthError> {
    issue_pair_at(config, principal_id, Utc::now())
}

/// Issue a pair as of an explicit instant.
///
/// The instant is a parameter so tests can mint tokens in the past and
/// exercise expiry without sleeping.
pub fn issue_pair_at(
    config: &AuthConfig,
    principal_id: Uuid,
    now: DateTime<Utc>,
) -> Result<TokenPair, AuthError> {
    let access_token = sign(
        principal_id,
        config.access_secret(),
        now,
        now + config.access_ttl(),
    )?;
    let refresh_token = sign(
        principal_id,
        config.refresh_secret(),
        now,
        now + config.refresh_ttl(),
    )?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

fn sign(
    principal_id: Uuid,
    secret: &str,
    iat: DateTime<Utc>,
    exp: DateTime<Utc>,
) -> Result<String, AuthError> {
    let claims = TokenClaims {
        sub: principal_id.to_string(),
        iat: iat.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Token signing failed");
        AuthError::Configuration(format!("token signing failed: {}", e))
    })
}

/// Verify a token's signature and expiry against the given secret.
///
/// All failures collapse to `InvalidToken` so the HTTP boundary never
/// reveals whether the signature or the expiry was at fault.
///
/// Expiry is a closed boundary: a token presented exactly at its `exp`
/// instant is invalid.
pub fn verify(token: &str, secret: &str) -> Result<TokenClaims, AuthError> {
    verify_at(token, secret, Utc::now())
}

/// Verify as of an explicit instant (see `issue_pair_at`).
pub fn verify_at(
    token: &str,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<TokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    // Expiry is checked below against the caller's clock, with a closed
    // boundary jsonwebtoken does not offer.
    validation.validate_exp = false;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
        AuthError::InvalidToken
    })?;

    if token_data.claims.exp <= now.timestamp() {
        tracing::debug!("Token expired");
        return Err(AuthError::InvalidToken);
    }

    Ok(token_data.claims)
}

/// Extract the bearer token from an Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}
