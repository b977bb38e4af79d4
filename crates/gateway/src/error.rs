//! Gateway errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Gateway error
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Unknown downstream service: {0}")]
    UnknownService(String),

    #[error("Downstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            GatewayError::UnknownService(_) => (StatusCode::NOT_FOUND, "UNKNOWN_SERVICE"),
            GatewayError::Upstream(e) => {
                tracing::error!(error = %e, "Downstream request failed");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
