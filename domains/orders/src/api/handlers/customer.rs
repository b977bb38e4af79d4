//! Customer-facing handlers
//!
//! Implements:
//! - POST /v1/orders — Place an order (Customer)
//! - GET /v1/orders/mine — List the caller's orders (Customer)
//! - GET /v1/account — Account summary (any authenticated principal)

use axum::{http::StatusCode, Json};
use chrono::{DateTime, Utc};
use dishpatch_auth::{Authorized, Role};
use dishpatch_common::ValidatedJson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Order placement request
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    pub restaurant_id: Uuid,
    #[validate(length(min = 1))]
    pub items: Vec<String>,
}

/// Order view returned to the customer
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub restaurant_id: Uuid,
    pub items: Vec<String>,
    pub status: &'static str,
    pub placed_at: DateTime<Utc>,
}

/// POST /v1/orders — Place an order (Customer)
pub async fn place_order(
    Authorized(principal): Authorized,
    ValidatedJson(request): ValidatedJson<PlaceOrderRequest>,
) -> (StatusCode, Json<OrderResponse>) {
    let order = OrderResponse {
        id: Uuid::new_v4(),
        customer_id: principal.id,
        restaurant_id: request.restaurant_id,
        items: request.items,
        status: "placed",
        placed_at: Utc::now(),
    };

    tracing::info!(order_id = %order.id, customer_id = %principal.id, "Order placed");
    (StatusCode::CREATED, Json(order))
}

/// Listing scoped to the calling customer
#[derive(Debug, Serialize)]
pub struct MyOrdersResponse {
    pub customer_id: Uuid,
    pub orders: Vec<OrderResponse>,
}

/// GET /v1/orders/mine — List the caller's orders (Customer)
pub async fn list_my_orders(Authorized(principal): Authorized) -> Json<MyOrdersResponse> {
    Json(MyOrdersResponse {
        customer_id: principal.id,
        orders: vec![],
    })
}

/// Account summary for any authenticated principal
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<Role>,
}

/// GET /v1/account — Account summary (authentication alone suffices)
pub async fn account_summary(Authorized(principal): Authorized) -> Json<AccountResponse> {
    Json(AccountResponse {
        id: principal.id,
        email: principal.email,
        roles: principal.roles,
    })
}
