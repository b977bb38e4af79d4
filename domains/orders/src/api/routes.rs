//! Route definitions and role requirements for the Orders domain API
//!
//! Routes and their required roles are declared side by side here so
//! the policy table stays in sync with the router. The table itself is
//! handed to the composition root and looked up by the role gate at
//! dispatch time.

use axum::{
    routing::{get, patch, post},
    Router,
};
use dishpatch_auth::{Role, RoutePolicy};

use super::handlers::{admin, customer, delivery, restaurant};
use super::state::OrdersState;

/// Create all Orders domain API routes
pub fn routes() -> Router<OrdersState> {
    Router::new()
        .route("/v1/orders", post(customer::place_order))
        .route("/v1/orders/mine", get(customer::list_my_orders))
        .route(
            "/v1/deliveries/assignments",
            get(delivery::list_assignments),
        )
        .route("/v1/restaurant/menu", patch(restaurant::update_menu))
        .route("/v1/admin/orders", get(admin::list_all_orders))
        .route("/v1/account", get(customer::account_summary))
}

/// Role requirements for every gated Orders route.
///
/// `/v1/account` is deliberately absent: authentication alone admits
/// any principal there.
pub fn route_policy() -> RoutePolicy {
    RoutePolicy::new()
        .require("/v1/orders", &[Role::Customer])
        .require("/v1/orders/mine", &[Role::Customer])
        .require("/v1/deliveries/assignments", &[Role::Courier])
        .require("/v1/restaurant/menu", &[Role::Restaurant])
        .require("/v1/admin/orders", &[Role::Admin])
}
