//! Orders domain state

use axum::extract::FromRef;
use dishpatch_auth::{Authenticator, RoutePolicy};

/// Application state for the Orders domain
#[derive(Clone)]
pub struct OrdersState {
    pub auth: Authenticator,
    pub policy: RoutePolicy,
}

impl FromRef<OrdersState> for Authenticator {
    fn from_ref(state: &OrdersState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<OrdersState> for RoutePolicy {
    fn from_ref(state: &OrdersState) -> Self {
        state.policy.clone()
    }
}
