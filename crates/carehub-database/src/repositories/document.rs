//! Clinical document repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::document::ClinicalDocument;

/// Fields of a synced document.
#[derive(Debug, Clone, Default)]
pub struct DocumentDraft {
    /// Document title.
    pub title: String,
    /// Document category.
    pub document_type: Option<String>,
    /// When the document was issued.
    pub document_date: Option<NaiveDate>,
    /// Link to the stored file.
    pub file_url: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Repository for clinical documents.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one synced document. Documents have no natural key, so
    /// repeated syncs append rather than update.
    pub async fn insert_synced(
        &self,
        patient_id: Uuid,
        draft: &DocumentDraft,
        partner_id: Uuid,
    ) -> AppResult<ClinicalDocument> {
        sqlx::query_as::<_, ClinicalDocument>(
            "INSERT INTO clinical_documents \
                 (patient_id, title, document_type, document_date, file_url, \
                  description, source_partner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(patient_id)
        .bind(&draft.title)
        .bind(&draft.document_type)
        .bind(draft.document_date)
        .bind(&draft.file_url)
        .bind(&draft.description)
        .bind(partner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert document", e))
    }
}
