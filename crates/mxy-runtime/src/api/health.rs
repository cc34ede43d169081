//! Health check endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::context::ApplicationContext;

/// Health check handler
///
/// Reports `UP` while serving and `OUT_OF_SERVICE` (503) once shutdown has
/// begun.
pub async fn health_check(State(context): State<Arc<ApplicationContext>>) -> impl IntoResponse {
    debug!("Health check requested");

    if context.shutdown().is_shutting_down() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "OUT_OF_SERVICE" })),
        )
    } else {
        (StatusCode::OK, Json(json!({ "status": "UP" })))
    }
}
