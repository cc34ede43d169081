use axum::{extract::State, response::IntoResponse, Json};
use chrono::SecondsFormat;
use serde_json::json;
use std::sync::Arc;

use crate::context::ApplicationContext;

/// Application info handler
pub async fn application_info(State(context): State<Arc<ApplicationContext>>) -> impl IntoResponse {
    let identity = context.identity();

    Json(json!({
        "app": {
            "name": context.name(),
            "description": identity.description,
            "version": identity.version,
        },
        "profiles": context.config().active_profiles(),
        "startedAt": context.started_at().to_rfc3339_opts(SecondsFormat::Millis, true),
        "uptimeSeconds": context.uptime_seconds(),
    }))
}
