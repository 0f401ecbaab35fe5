//! Maintenance sweeps.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{error, info};

use carehub_database::repositories::notification::NotificationRepository;
use carehub_database::repositories::rate_limit::RateLimitRepository;

/// Periodic cleanup of expired rate windows and old in-app notifications.
#[derive(Debug, Clone)]
pub struct CleanupJob {
    rate_windows: Arc<RateLimitRepository>,
    notifications: Arc<NotificationRepository>,
    rate_window_seconds: i64,
    notification_retention_days: i64,
}

impl CleanupJob {
    /// Create a new cleanup job.
    pub fn new(
        rate_windows: Arc<RateLimitRepository>,
        notifications: Arc<NotificationRepository>,
        rate_window_seconds: i64,
        notification_retention_days: i64,
    ) -> Self {
        Self {
            rate_windows,
            notifications,
            rate_window_seconds,
            notification_retention_days,
        }
    }

    /// Drop rate windows that can no longer affect a decision.
    pub async fn sweep_rate_windows(&self) {
        match self.rate_windows.delete_expired(self.rate_window_seconds).await {
            Ok(removed) => info!(removed, "Swept expired rate windows"),
            Err(e) => error!(error = %e, "Rate window sweep failed"),
        }
    }

    /// Trim read in-app notifications past the retention age.
    pub async fn trim_notifications(&self) {
        let cutoff = Utc::now() - Duration::days(self.notification_retention_days);

        match self.notifications.delete_read_older_than(cutoff).await {
            Ok(removed) => info!(
                removed,
                retention_days = self.notification_retention_days,
                "Trimmed old notifications"
            ),
            Err(e) => error!(error = %e, "Notification trim failed"),
        }
    }
}
