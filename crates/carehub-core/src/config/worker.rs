//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Cron schedules and retention settings for the background worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the in-process scheduler runs at all. The dispatcher stays
    /// reachable through its HTTP trigger either way.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the reminder dispatch run.
    #[serde(default = "default_dispatch_schedule")]
    pub dispatch_schedule: String,
    /// Cron expression for the expired rate-window sweep.
    #[serde(default = "default_rate_window_sweep_schedule")]
    pub rate_window_sweep_schedule: String,
    /// Cron expression for the in-app notification trim.
    #[serde(default = "default_notification_trim_schedule")]
    pub notification_trim_schedule: String,
    /// Age in days after which read in-app notifications are deleted.
    #[serde(default = "default_notification_retention_days")]
    pub notification_retention_days: i64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dispatch_schedule: default_dispatch_schedule(),
            rate_window_sweep_schedule: default_rate_window_sweep_schedule(),
            notification_trim_schedule: default_notification_trim_schedule(),
            notification_retention_days: default_notification_retention_days(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_dispatch_schedule() -> String {
    // Every 5 minutes; narrower than both reminder windows.
    "0 */5 * * * *".to_string()
}

fn default_rate_window_sweep_schedule() -> String {
    "0 15 4 * * *".to_string()
}

fn default_notification_trim_schedule() -> String {
    "0 0 2 * * *".to_string()
}

fn default_notification_retention_days() -> i64 {
    90
}
