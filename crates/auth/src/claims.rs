//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried by both access and refresh tokens.
///
/// The two token classes share this shape; they are told apart by their
/// signing secret, never by claim content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (principal ID)
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expires at (Unix seconds)
    pub exp: i64,
}
