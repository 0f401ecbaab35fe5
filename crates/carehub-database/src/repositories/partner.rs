//! Partner repository implementation.

use sqlx::PgPool;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::partner::Partner;

/// Repository for partner lookups.
#[derive(Debug, Clone)]
pub struct PartnerRepository {
    pool: PgPool,
}

impl PartnerRepository {
    /// Create a new partner repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve an API key to an active partner.
    ///
    /// Unknown and inactive keys both resolve to `None`; callers must not
    /// distinguish them in the error surfaced to the integrator.
    pub async fn find_active_by_key(&self, api_key: &str) -> AppResult<Option<Partner>> {
        sqlx::query_as::<_, Partner>(
            "SELECT * FROM partners WHERE api_key = $1 AND active = TRUE",
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up partner", e))
    }
}
