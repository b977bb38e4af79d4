//! Accounts domain state

use axum::extract::FromRef;
use dishpatch_auth::Authenticator;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub auth: Authenticator,
}

impl FromRef<AccountsState> for Authenticator {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
