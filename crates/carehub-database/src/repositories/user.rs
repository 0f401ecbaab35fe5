//! Portal user repository implementation.

use sqlx::PgPool;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::user::PortalUser;

/// Repository for portal user lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All platform-wide administrators (storage-request recipients).
    pub async fn find_super_admins(&self) -> AppResult<Vec<PortalUser>> {
        sqlx::query_as::<_, PortalUser>(
            "SELECT id, email, full_name, role, created_at \
             FROM users WHERE role = 'super_admin' ORDER BY email",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list super admins", e)
        })
    }
}
