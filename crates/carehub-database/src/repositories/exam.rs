//! Exam repository implementation.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::exam::{Exam, ExamKey};

use super::Upserted;

/// Payload fields written alongside an exam's natural key.
#[derive(Debug, Clone, Default)]
pub struct ExamPatch {
    /// Exam category.
    pub exam_type: Option<String>,
    /// Short result summary.
    pub result_summary: Option<String>,
    /// Link to the full report.
    pub file_url: Option<String>,
}

#[derive(FromRow)]
struct ExamUpsertRow {
    #[sqlx(flatten)]
    record: Exam,
    was_inserted: bool,
}

/// Repository for exam reconciliation.
#[derive(Debug, Clone)]
pub struct ExamRepository {
    pool: PgPool,
}

impl ExamRepository {
    /// Create a new exam repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reconcile one synced exam by natural key.
    pub async fn upsert_synced(
        &self,
        key: &ExamKey,
        patch: &ExamPatch,
        partner_id: Uuid,
    ) -> AppResult<Upserted<Exam>> {
        let row = sqlx::query_as::<_, ExamUpsertRow>(
            "INSERT INTO exams \
                 (patient_id, name, exam_type, exam_date, result_summary, \
                  file_url, source_partner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (patient_id, name, exam_date) \
             DO UPDATE SET \
                 exam_type = EXCLUDED.exam_type, \
                 result_summary = EXCLUDED.result_summary, \
                 file_url = EXCLUDED.file_url, \
                 source_partner_id = EXCLUDED.source_partner_id, \
                 updated_at = NOW() \
             RETURNING *, (xmax = 0) AS was_inserted",
        )
        .bind(key.patient_id)
        .bind(&key.name)
        .bind(&patch.exam_type)
        .bind(key.exam_date)
        .bind(&patch.result_summary)
        .bind(&patch.file_url)
        .bind(partner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert exam", e))?;

        Ok(Upserted {
            record: row.record,
            inserted: row.was_inserted,
        })
    }
}
