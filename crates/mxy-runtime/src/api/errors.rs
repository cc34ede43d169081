//! Error responses for the runtime API

use axum::{http::StatusCode, http::Uri, response::IntoResponse, Json};
use serde_json::json;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": StatusCode::NOT_FOUND.as_u16(),
            "error": "Not Found",
            "path": uri.path(),
        })),
    )
}
