//! Authentication configuration

use chrono::Duration;

use crate::error::AuthError;

/// Access token lifetime: 15 minutes
const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Refresh token lifetime: 30 days
const REFRESH_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Immutable authentication configuration, constructed once at startup
/// and passed by reference into the issuer and verifier.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    access_secret: String,
    refresh_secret: String,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl AuthConfig {
    /// Construct a validated configuration.
    ///
    /// Fails if either secret is empty or if the two secrets are equal:
    /// distinct secrets are what keep a refresh token from ever
    /// authenticating a normal request.
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let access_secret = access_secret.into();
        let refresh_secret = refresh_secret.into();

        if access_secret.is_empty() {
            return Err(AuthError::Configuration(
                "access token signing secret is unset".to_string(),
            ));
        }
        if refresh_secret.is_empty() {
            return Err(AuthError::Configuration(
                "refresh token signing secret is unset".to_string(),
            ));
        }
        if access_secret == refresh_secret {
            return Err(AuthError::Configuration(
                "access and refresh signing secrets must differ".to_string(),
            ));
        }

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl_secs: ACCESS_TOKEN_TTL_SECS,
            refresh_ttl_secs: REFRESH_TOKEN_TTL_SECS,
        })
    }

    pub fn access_secret(&self) -> &str {
        &self.access_secret
    }

    pub fn refresh_secret(&self) -> &str {
        &self.refresh_secret
    }

    pub fn access_ttl(&self) -> Duration {
        Duration::seconds(self.access_ttl_secs)
    }

    pub fn refresh_ttl(&self) -> Duration {
        Duration::seconds(self.refresh_ttl_secs)
    }
}
