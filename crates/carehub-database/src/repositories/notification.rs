//! In-app notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::notification::Notification;

/// Repository for in-app notification writes and maintenance.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a notification.
    pub async fn create(
        &self,
        user_id: Uuid,
        category: &str,
        title: &str,
        message: &str,
        payload: Option<&serde_json::Value>,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, category, title, message, payload) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(user_id)
        .bind(category)
        .bind(title)
        .bind(message)
        .bind(payload)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    /// Delete read notifications created before the cutoff.
    pub async fn delete_read_older_than(
        &self,
        cutoff: chrono::DateTime<chrono::Utc>,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM notifications WHERE is_read = TRUE AND created_at < $1",
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to trim notifications", e)
        })?;
        Ok(result.rows_affected())
    }
}
