//! Clinical document entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A clinical document (discharge letter, referral, report) attached to a
/// patient record.
///
/// Documents carry no reliable natural key, so syncs append rather than
/// upsert; partners are expected to send each document once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClinicalDocument {
    /// Unique document identifier.
    pub id: Uuid,
    /// The patient the document belongs to.
    pub patient_id: Uuid,
    /// Document title.
    pub title: String,
    /// Document category (e.g. "alta", "encaminhamento", "laudo").
    pub document_type: Option<String>,
    /// When the document was issued.
    pub document_date: Option<NaiveDate>,
    /// Link to the stored file, when the source provides one.
    pub file_url: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// The partner that synced this row, if ERP-sourced.
    pub source_partner_id: Option<Uuid>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}
