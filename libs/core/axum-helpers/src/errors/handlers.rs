//! Fallback handlers producing the standard error body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// JSON 404 for unmatched routes; wire up as the router fallback.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "NotFound".to_string(),
            message: "The requested resource was not found".to_string(),
            details: None,
        }),
    )
        .into_response()
}
