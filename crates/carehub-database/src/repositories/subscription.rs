//! Push subscription repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::subscription::PushSubscription;

/// Repository for push subscription lookups.
#[derive(Debug, Clone)]
pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    /// Create a new subscription repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All registered devices for a portal user.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<PushSubscription>> {
        sqlx::query_as::<_, PushSubscription>(
            "SELECT * FROM push_subscriptions WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list subscriptions", e)
        })
    }
}
