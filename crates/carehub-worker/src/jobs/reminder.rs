//! Scheduled reminder dispatch job.

use std::sync::Arc;

use tracing::{error, info};

use carehub_service::ReminderDispatcher;

/// Runs the reminder dispatcher on the cron cadence.
///
/// The scheduler is single-flight per tick; a failed run is logged and
/// the next tick starts fresh — medications stay untaken and appointments
/// stay scheduled, so missed reminders retry naturally while their window
/// is open.
#[derive(Debug, Clone)]
pub struct ReminderJob {
    dispatcher: Arc<ReminderDispatcher>,
}

impl ReminderJob {
    /// Create a new reminder job.
    pub fn new(dispatcher: Arc<ReminderDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Execute one dispatch run.
    pub async fn run(&self) {
        match self.dispatcher.run().await {
            Ok(summary) => info!(
                sent = summary.notifications_sent,
                attempted = summary.details.len(),
                "Scheduled reminder dispatch finished"
            ),
            Err(e) => error!(error = %e, "Scheduled reminder dispatch failed"),
        }
    }
}
