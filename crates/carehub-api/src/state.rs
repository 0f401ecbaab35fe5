//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use carehub_core::config::AppConfig;
use carehub_database::DatabasePool;
use carehub_database::repositories::partner::PartnerRepository;
use carehub_service::notify::StorageRequestNotifier;
use carehub_service::{RateLimiter, ReminderDispatcher, SyncService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db: DatabasePool,
    /// Partner repository (API-key resolution)
    pub partners: Arc<PartnerRepository>,
    /// Medications-route rate limiter
    pub rate_limiter: Arc<RateLimiter>,
    /// Partner batch reconciliation
    pub sync_service: Arc<SyncService>,
    /// Reminder dispatch run
    pub dispatcher: Arc<ReminderDispatcher>,
    /// Storage-request fan-out
    pub notifier: Arc<StorageRequestNotifier>,
}
