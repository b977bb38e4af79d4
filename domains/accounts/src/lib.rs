//! Accounts domain: session lifecycle
//!
//! Login converts credentials into a token pair; refresh rotation
//! converts a still-valid refresh token into a fresh pair; whoami
//! introspects the presented access token.

pub mod api;

pub use api::routes;
pub use api::AccountsState;
