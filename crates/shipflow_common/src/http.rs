// --- File: crates/shipflow_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{HttpStatusCode, ShipflowError};

// Include the client module
pub mod client;

/// Extension trait for ShipflowError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for ShipflowError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for ShipflowError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
