//! Readiness endpoint
//!
//! Liveness (`/health`) is served by `axum_helpers::health_router`; this
//! module adds the MongoDB-aware readiness probe.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadinessResponse {
    status: String,
    mongodb: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Pings MongoDB; reports unhealthy without failing the request
async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let mongodb = database::mongodb::check_health(&state.mongo_client).await;
    let status = if mongodb { "ready" } else { "unhealthy" };

    Json(ReadinessResponse {
        status: status.to_string(),
        mongodb,
    })
}
