//! Patient consent repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::consent::PatientConsent;

/// Repository for consent lookups.
#[derive(Debug, Clone)]
pub struct ConsentRepository {
    pool: PgPool,
}

impl ConsentRepository {
    /// Create a new consent repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The consent relation between a patient and a partner, if any.
    pub async fn find_between(
        &self,
        patient_id: Uuid,
        partner_id: Uuid,
    ) -> AppResult<Option<PatientConsent>> {
        sqlx::query_as::<_, PatientConsent>(
            "SELECT * FROM patient_consents WHERE patient_id = $1 AND partner_id = $2",
        )
        .bind(patient_id)
        .bind(partner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up consent", e))
    }
}
