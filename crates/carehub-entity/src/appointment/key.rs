//! Appointment natural key.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

/// The business-field tuple that identifies "the same real-world
/// appointment" across repeated ERP syncs.
///
/// The doctor name is whitespace-trimmed on construction so that cosmetic
/// differences between sync cycles do not fork the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppointmentKey {
    /// The patient attending.
    pub patient_id: Uuid,
    /// Normalized doctor name.
    pub doctor_name: String,
    /// Appointment date.
    pub date: NaiveDate,
    /// Appointment time of day.
    pub time: NaiveTime,
}

impl AppointmentKey {
    /// Build a key, normalizing the doctor name.
    pub fn new(patient_id: Uuid, doctor_name: &str, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            patient_id,
            doctor_name: doctor_name.trim().to_string(),
            date,
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_doctor_name() {
        let patient = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
        let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();

        let a = AppointmentKey::new(patient, "Dr. Silva", date, time);
        let b = AppointmentKey::new(patient, "  Dr. Silva  ", date, time);
        assert_eq!(a, b);
    }

    #[test]
    fn differs_by_time() {
        let patient = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();

        let a = AppointmentKey::new(
            patient,
            "Dr. Silva",
            date,
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        );
        let b = AppointmentKey::new(
            patient,
            "Dr. Silva",
            date,
            NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        );
        assert_ne!(a, b);
    }
}
