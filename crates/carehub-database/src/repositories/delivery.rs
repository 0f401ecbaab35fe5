//! Reminder delivery ledger repository.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::delivery::ReminderKind;

/// Repository for the exactly-once reminder ledger.
#[derive(Debug, Clone)]
pub struct DeliveryRepository {
    pool: PgPool,
}

impl DeliveryRepository {
    /// Create a new delivery repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Claim a reminder for today's window.
    ///
    /// Returns `true` when this run won the claim; `false` means another
    /// run (or an earlier cron tick inside the same window) already sent
    /// this reminder and the caller must skip it.
    pub async fn try_claim(
        &self,
        kind: ReminderKind,
        reminder_id: Uuid,
        due_on: NaiveDate,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO reminder_deliveries (reminder_kind, reminder_id, due_on) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (reminder_kind, reminder_id, due_on) DO NOTHING",
        )
        .bind(kind.as_str())
        .bind(reminder_id)
        .bind(due_on)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to claim reminder delivery", e)
        })?;

        Ok(result.rows_affected() == 1)
    }
}
