//! Admin-facing handlers
//!
//! Implements:
//! - GET /v1/admin/orders — Platform-wide order listing (Admin)

use axum::Json;
use dishpatch_auth::Authorized;
use serde::Serialize;
use uuid::Uuid;

/// Platform-wide listing, visible to admins only
#[derive(Debug, Serialize)]
pub struct AllOrdersResponse {
    pub requested_by: Uuid,
    pub orders: Vec<serde_json::Value>,
}

/// GET /v1/admin/orders — Platform-wide order listing (Admin)
pub async fn list_all_orders(Authorized(principal): Authorized) -> Json<AllOrdersResponse> {
    tracing::debug!(admin_id = %principal.id, "Admin order listing requested");

    Json(AllOrdersResponse {
        requested_by: principal.id,
        orders: vec![],
    })
}
