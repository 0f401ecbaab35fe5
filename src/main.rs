//! CareHub Server — hospital partner integration and reminder core.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use carehub_api::router::build_router;
use carehub_api::state::AppState;
use carehub_core::config::AppConfig;
use carehub_core::error::AppError;
use carehub_database::DatabasePool;
use carehub_database::repositories::appointment::AppointmentRepository;
use carehub_database::repositories::consent::ConsentRepository;
use carehub_database::repositories::delivery::DeliveryRepository;
use carehub_database::repositories::document::DocumentRepository;
use carehub_database::repositories::exam::ExamRepository;
use carehub_database::repositories::medication::MedicationRepository;
use carehub_database::repositories::notification::NotificationRepository;
use carehub_database::repositories::partner::PartnerRepository;
use carehub_database::repositories::patient::PatientRepository;
use carehub_database::repositories::rate_limit::RateLimitRepository;
use carehub_database::repositories::subscription::SubscriptionRepository;
use carehub_database::repositories::user::UserRepository;
use carehub_push::PushProvider;
use carehub_service::notify::{Mailer, StorageRequestNotifier};
use carehub_service::{RateLimiter, ReminderDispatcher, SyncService};
use carehub_worker::CronScheduler;
use carehub_worker::jobs::{CleanupJob, ReminderJob};

#[tokio::main]
async fn main() {
    let env = std::env::var("CAREHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber from logging configuration.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    carehub_database::migration::run_migrations(db.pool()).await?;

    let pool = db.pool().clone();

    // Repositories
    let partners = Arc::new(PartnerRepository::new(pool.clone()));
    let patients = Arc::new(PatientRepository::new(pool.clone()));
    let consents = Arc::new(ConsentRepository::new(pool.clone()));
    let appointments = Arc::new(AppointmentRepository::new(pool.clone()));
    let medications = Arc::new(MedicationRepository::new(pool.clone()));
    let exams = Arc::new(ExamRepository::new(pool.clone()));
    let documents = Arc::new(DocumentRepository::new(pool.clone()));
    let subscriptions = Arc::new(SubscriptionRepository::new(pool.clone()));
    let deliveries = Arc::new(DeliveryRepository::new(pool.clone()));
    let notifications = Arc::new(NotificationRepository::new(pool.clone()));
    let rate_windows = Arc::new(RateLimitRepository::new(pool.clone()));
    let users = Arc::new(UserRepository::new(pool.clone()));

    // Services
    let provider = Arc::new(PushProvider::new(config.push.clone()));
    let mailer = Arc::new(Mailer::new(&config.mailer)?);
    let rate_limiter = Arc::new(RateLimiter::new(Arc::clone(&rate_windows), &config.sync));
    let sync_service = Arc::new(SyncService::new(
        Arc::clone(&patients),
        Arc::clone(&consents),
        Arc::clone(&appointments),
        Arc::clone(&medications),
        Arc::clone(&exams),
        Arc::clone(&documents),
    ));
    let dispatcher = Arc::new(ReminderDispatcher::new(
        Arc::clone(&medications),
        Arc::clone(&appointments),
        Arc::clone(&subscriptions),
        Arc::clone(&deliveries),
        Arc::clone(&provider),
    ));
    let notifier = Arc::new(StorageRequestNotifier::new(
        Arc::clone(&users),
        Arc::clone(&notifications),
        Arc::clone(&mailer),
    ));

    // Scheduler
    let mut scheduler = if config.worker.enabled {
        let reminder_job = Arc::new(ReminderJob::new(Arc::clone(&dispatcher)));
        let cleanup_job = Arc::new(CleanupJob::new(
            Arc::clone(&rate_windows),
            Arc::clone(&notifications),
            config.sync.rate_limit_window_seconds,
            config.worker.notification_retention_days,
        ));

        let cron = CronScheduler::new(config.worker.clone(), reminder_job, cleanup_job).await?;
        cron.register_default_tasks().await?;
        cron.start().await?;
        Some(cron)
    } else {
        tracing::info!("Worker disabled; dispatcher reachable via HTTP trigger only");
        None
    };

    let addr = config.server.bind_addr();
    let state = AppState {
        config: Arc::new(config),
        db: db.clone(),
        partners,
        rate_limiter,
        sync_service,
        dispatcher,
        notifier,
    };

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "CareHub server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(cron) = scheduler.as_mut() {
        if let Err(e) = cron.shutdown().await {
            tracing::warn!(error = %e, "Scheduler shutdown failed");
        }
    }
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
