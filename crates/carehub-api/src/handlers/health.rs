//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/detailed
pub async fn detailed_health(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    let database = match state.db.health_check().await {
        Ok(true) => "connected",
        _ => "unreachable",
    };

    Json(DetailedHealthResponse {
        status: "ok".to_string(),
        database: database.to_string(),
    })
}
