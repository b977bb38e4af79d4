//! Route definitions for the Accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::sessions;
use super::state::AccountsState;

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/auth/login", post(sessions::login))
        .route("/v1/auth/refresh", post(sessions::refresh))
        .route("/v1/auth/whoami", get(sessions::whoami))
}
