//! Appointment entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A scheduled consultation or procedure.
///
/// ERP-sourced rows are reconciled by natural key
/// (patient, doctor, date, time); repeat syncs update in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: Uuid,
    /// The patient attending.
    pub patient_id: Uuid,
    /// Attending doctor's name as sent by the source system.
    pub doctor_name: String,
    /// Doctor's specialty.
    pub specialty: Option<String>,
    /// Appointment date.
    pub appointment_date: NaiveDate,
    /// Appointment time of day.
    pub appointment_time: NaiveTime,
    /// Kind of appointment (e.g. "consulta", "exame", "retorno").
    pub appointment_type: Option<String>,
    /// Where the appointment takes place.
    pub location: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Lifecycle status; only `"scheduled"` appointments receive reminders.
    pub status: String,
    /// The partner that last synced this row, if ERP-sourced.
    pub source_partner_id: Option<Uuid>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Whether this appointment is still on the calendar.
    pub fn is_scheduled(&self) -> bool {
        self.status == "scheduled"
    }
}
