//! Per-partner rate-limit window repository.

use sqlx::PgPool;
use uuid::Uuid;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::partner::RateLimitWindow;

/// Repository maintaining the per-partner request counter.
#[derive(Debug, Clone)]
pub struct RateLimitRepository {
    pool: PgPool,
}

impl RateLimitRepository {
    /// Create a new rate-limit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count one request against the partner's window and return the
    /// window state after counting.
    ///
    /// A single statement either opens a fresh window (no row yet, or the
    /// existing window is older than `window_seconds`) with a count of 1,
    /// or increments the live window. The counter therefore cannot lose
    /// updates under concurrent requests.
    pub async fn increment(
        &self,
        partner_id: Uuid,
        window_seconds: i64,
    ) -> AppResult<RateLimitWindow> {
        sqlx::query_as::<_, RateLimitWindow>(
            "INSERT INTO partner_rate_windows (partner_id, window_start, request_count) \
             VALUES ($1, NOW(), 1) \
             ON CONFLICT (partner_id) DO UPDATE SET \
                 window_start = CASE \
                     WHEN partner_rate_windows.window_start <= NOW() - make_interval(secs => $2) \
                     THEN NOW() ELSE partner_rate_windows.window_start END, \
                 request_count = CASE \
                     WHEN partner_rate_windows.window_start <= NOW() - make_interval(secs => $2) \
                     THEN 1 ELSE partner_rate_windows.request_count + 1 END \
             RETURNING partner_id, window_start, request_count",
        )
        .bind(partner_id)
        .bind(window_seconds as f64)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count rate-limit request", e)
        })
    }

    /// Delete windows that expired more than `window_seconds` ago.
    pub async fn delete_expired(&self, window_seconds: i64) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM partner_rate_windows \
             WHERE window_start <= NOW() - make_interval(secs => $1)",
        )
        .bind(window_seconds as f64)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sweep rate windows", e)
        })?;
        Ok(result.rows_affected())
    }
}
