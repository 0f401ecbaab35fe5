//! Medication entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An active or past prescription for a patient.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Medication {
    /// Unique medication identifier.
    pub id: Uuid,
    /// The patient taking the medication.
    pub patient_id: Uuid,
    /// Medication name.
    pub name: String,
    /// Dosage description (e.g. "500mg").
    pub dosage: String,
    /// Frequency description (e.g. "8/8h").
    pub frequency: String,
    /// Administration instructions.
    pub instructions: Option<String>,
    /// First day of the treatment.
    pub start_date: Option<NaiveDate>,
    /// Last day of the treatment; reminders stop after this date.
    pub end_date: Option<NaiveDate>,
    /// Whether the treatment is ongoing.
    pub active: bool,
    /// The partner that last synced this row, if ERP-sourced.
    pub source_partner_id: Option<Uuid>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Medication {
    /// Whether the treatment is still running on the given date.
    pub fn is_current_on(&self, date: NaiveDate) -> bool {
        self.active && self.end_date.is_none_or(|end| end >= date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medication(active: bool, end_date: Option<NaiveDate>) -> Medication {
        Medication {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            name: "Losartana".to_string(),
            dosage: "50mg".to_string(),
            frequency: "12/12h".to_string(),
            instructions: None,
            start_date: None,
            end_date,
            active,
            source_partner_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn open_ended_treatment_is_current() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(medication(true, None).is_current_on(today));
    }

    #[test]
    fn expired_treatment_is_not_current() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert!(!medication(true, Some(yesterday)).is_current_on(today));
    }

    #[test]
    fn inactive_treatment_is_not_current() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(!medication(false, None).is_current_on(today));
    }
}
