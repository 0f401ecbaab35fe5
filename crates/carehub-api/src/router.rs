//! Route definitions for the CareHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes as usize;

    let api_routes = Router::new()
        .merge(sync_routes())
        .merge(notification_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Partner sync endpoints, one per record type.
fn sync_routes() -> Router<AppState> {
    Router::new()
        .route("/sync/appointments", post(handlers::sync::sync_appointments))
        .route("/sync/medications", post(handlers::sync::sync_medications))
        .route("/sync/exams", post(handlers::sync::sync_exams))
        .route("/sync/documents", post(handlers::sync::sync_documents))
}

/// Dispatcher trigger and storage-request fan-out.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications/dispatch",
            post(handlers::dispatch::run_dispatch),
        )
        .route(
            "/notifications/storage-request",
            post(handlers::notify::storage_request),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Partner ERPs call from arbitrary origins; the contract allows all.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
