//! Patient repository implementation.

use sqlx::PgPool;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_core::types::Cpf;
use carehub_entity::patient::Patient;

/// Repository for patient lookups.
#[derive(Debug, Clone)]
pub struct PatientRepository {
    pool: PgPool,
}

impl PatientRepository {
    /// Create a new patient repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a CPF to the patient it identifies.
    ///
    /// The column is unique, so this resolves to at most one row.
    pub async fn find_by_cpf(&self, cpf: &Cpf) -> AppResult<Option<Patient>> {
        sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE cpf = $1")
            .bind(cpf.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to look up patient", e)
            })
    }
}
