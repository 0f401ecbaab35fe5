//! Medication schedule entry.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One daily dose time for a medication.
///
/// Created when a medication sync supplies schedule times; the `taken`
/// flag is flipped by patient or nursing action outside this core and is
/// re-checked immediately before a reminder is sent. Entries are never
/// deleted by the core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MedicationSchedule {
    /// Unique schedule-entry identifier.
    pub id: Uuid,
    /// The medication this dose belongs to.
    pub medication_id: Uuid,
    /// Time of day the dose is due.
    pub time_of_day: NaiveTime,
    /// Whether today's dose was taken.
    pub taken: bool,
    /// When the dose was taken.
    pub taken_at: Option<DateTime<Utc>>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}
