//! Courier-facing handlers
//!
//! Implements:
//! - GET /v1/deliveries/assignments — List the caller's delivery assignments (Courier)

use axum::Json;
use dishpatch_auth::Authorized;
use serde::Serialize;
use uuid::Uuid;

/// Assignments scoped to the calling courier
#[derive(Debug, Serialize)]
pub struct AssignmentsResponse {
    pub courier_id: Uuid,
    pub assignments: Vec<AssignmentResponse>,
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub order_id: Uuid,
    pub pickup: String,
    pub dropoff: String,
}

/// GET /v1/deliveries/assignments — List the caller's delivery assignments (Courier)
pub async fn list_assignments(Authorized(principal): Authorized) -> Json<AssignmentsResponse> {
    Json(AssignmentsResponse {
        courier_id: principal.id,
        assignments: vec![],
    })
}
