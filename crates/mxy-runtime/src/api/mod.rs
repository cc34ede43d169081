//! API module for the MXY application runtime
//!
//! Operational endpoints every service exposes.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod errors;
pub mod health;
pub mod info;

use crate::context::ApplicationContext;

/// Build the router for the operational endpoints
pub fn build_router(context: Arc<ApplicationContext>) -> Router {
    Router::new()
        .route("/actuator/health", get(health::health_check))
        .route("/actuator/info", get(info::application_info))
        .fallback(errors::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

pub use errors::*;
pub use health::*;
pub use info::*;
