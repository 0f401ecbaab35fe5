//! Patient entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A patient registered in the portal.
///
/// Partner sync requests address patients by CPF; push notifications
/// address them through the owning portal user (`user_id`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patient {
    /// Unique patient identifier.
    pub id: Uuid,
    /// The portal user account owning this patient record.
    pub user_id: Uuid,
    /// Normalized 11-digit CPF.
    pub cpf: String,
    /// Full legal name.
    pub full_name: String,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// When the patient was registered.
    pub created_at: DateTime<Utc>,
    /// When the patient was last updated.
    pub updated_at: DateTime<Utc>,
}
