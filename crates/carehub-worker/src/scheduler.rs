//! Cron scheduler for the dispatcher and maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::info;

use carehub_core::config::worker::WorkerConfig;
use carehub_core::error::AppError;

use crate::jobs::{CleanupJob, ReminderJob};

/// Cron-based scheduler for periodic background tasks.
pub struct CronScheduler {
    scheduler: JobScheduler,
    config: WorkerConfig,
    reminder: Arc<ReminderJob>,
    cleanup: Arc<CleanupJob>,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler.
    pub async fn new(
        config: WorkerConfig,
        reminder: Arc<ReminderJob>,
        cleanup: Arc<CleanupJob>,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            config,
            reminder,
            cleanup,
        })
    }

    /// Register all scheduled tasks.
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_reminder_dispatch().await?;
        self.register_rate_window_sweep().await?;
        self.register_notification_trim().await?;

        info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        info!("Cron scheduler shut down");
        Ok(())
    }

    /// Reminder dispatch on the configured cadence.
    async fn register_reminder_dispatch(&self) -> Result<(), AppError> {
        let job = Arc::clone(&self.reminder);
        let schedule = self.config.dispatch_schedule.clone();

        let cron_job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                job.run().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create reminder_dispatch schedule: {e}"))
        })?;

        self.scheduler.add(cron_job).await.map_err(|e| {
            AppError::internal(format!("Failed to add reminder_dispatch schedule: {e}"))
        })?;

        info!(schedule = %schedule, "Registered: reminder_dispatch");
        Ok(())
    }

    /// Expired rate-window sweep.
    async fn register_rate_window_sweep(&self) -> Result<(), AppError> {
        let job = Arc::clone(&self.cleanup);
        let schedule = self.config.rate_window_sweep_schedule.clone();

        let cron_job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                job.sweep_rate_windows().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create rate_window_sweep schedule: {e}"))
        })?;

        self.scheduler.add(cron_job).await.map_err(|e| {
            AppError::internal(format!("Failed to add rate_window_sweep schedule: {e}"))
        })?;

        info!(schedule = %schedule, "Registered: rate_window_sweep");
        Ok(())
    }

    /// In-app notification trim.
    async fn register_notification_trim(&self) -> Result<(), AppError> {
        let job = Arc::clone(&self.cleanup);
        let schedule = self.config.notification_trim_schedule.clone();

        let cron_job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                job.trim_notifications().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create notification_trim schedule: {e}"))
        })?;

        self.scheduler.add(cron_job).await.map_err(|e| {
            AppError::internal(format!("Failed to add notification_trim schedule: {e}"))
        })?;

        info!(schedule = %schedule, "Registered: notification_trim");
        Ok(())
    }
}
