//! Restaurant-facing handlers
//!
//! Implements:
//! - PATCH /v1/restaurant/menu — Replace the caller's menu (Restaurant)

use axum::Json;
use dishpatch_auth::Authorized;
use dishpatch_common::ValidatedJson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Menu replacement request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMenuRequest {
    #[validate(length(min = 1))]
    pub items: Vec<String>,
}

/// Menu view after the update
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub restaurant_id: Uuid,
    pub items: Vec<String>,
}

/// PATCH /v1/restaurant/menu — Replace the caller's menu (Restaurant)
pub async fn update_menu(
    Authorized(principal): Authorized,
    ValidatedJson(request): ValidatedJson<UpdateMenuRequest>,
) -> Json<MenuResponse> {
    tracing::info!(restaurant_id = %principal.id, items = request.items.len(), "Menu updated");

    Json(MenuResponse {
        restaurant_id: principal.id,
        items: request.items,
    })
}
