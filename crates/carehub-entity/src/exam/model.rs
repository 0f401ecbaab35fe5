//! Exam entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A laboratory or imaging exam result.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Exam {
    /// Unique exam identifier.
    pub id: Uuid,
    /// The patient the exam belongs to.
    pub patient_id: Uuid,
    /// Exam name (e.g. "Hemograma completo").
    pub name: String,
    /// Exam category (e.g. "laboratorial", "imagem").
    pub exam_type: Option<String>,
    /// When the exam was performed.
    pub exam_date: NaiveDate,
    /// Short result summary.
    pub result_summary: Option<String>,
    /// Link to the full report, when the source provides one.
    pub file_url: Option<String>,
    /// The partner that last synced this row, if ERP-sourced.
    pub source_partner_id: Option<Uuid>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}
