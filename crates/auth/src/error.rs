//! Authentication and authorization errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication/authorization error.
///
/// Every unauthenticated condition (missing header, malformed header,
/// bad signature, expired token, unresolvable subject) maps to 401 with
/// the same `INVALID_TOKEN` code where the distinction would leak why
/// verification failed.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header required")]
    MissingAuthorization,

    #[error("Invalid authorization header format")]
    InvalidAuthorizationFormat,

    #[error("Invalid or expired token")]
    InvalidToken,

    /// A valid token whose subject no longer resolves to a principal
    /// (e.g. the account was deleted after issuance).
    #[error("Invalid or expired token")]
    PrincipalNotFound,

    /// Token subject is not a well-formed principal id.
    #[error("Invalid or expired token")]
    InvalidSubject,

    /// Login failure. Deliberately does not distinguish unknown email
    /// from wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Credential store unavailable")]
    StoreUnavailable,

    /// Authorization denial. Carries the principal's email and the
    /// denied resource for audit logging; the principal already
    /// authenticated, so neither is a secret.
    #[error("Access to {resource} denied for {email}")]
    Forbidden { email: String, resource: String },

    /// A signing secret is missing or unusable. Raised at startup and
    /// fatal: the service must not serve traffic with unverifiable
    /// tokens.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken
            | AuthError::PrincipalNotFound
            | AuthError::InvalidSubject
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AuthError::StoreUnavailable | AuthError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "MISSING_AUTHORIZATION",
            AuthError::InvalidAuthorizationFormat => "INVALID_AUTHORIZATION",
            // One code for every verification failure — no oracle
            AuthError::InvalidToken
            | AuthError::PrincipalNotFound
            | AuthError::InvalidSubject => "INVALID_TOKEN",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::StoreUnavailable => "STORE_ERROR",
            AuthError::Forbidden { .. } => "FORBIDDEN",
            AuthError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
