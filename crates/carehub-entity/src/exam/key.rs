//! Exam natural key.

use chrono::NaiveDate;
use uuid::Uuid;

/// The business-field tuple identifying "the same exam" across repeated
/// ERP syncs: patient + name + date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExamKey {
    /// The patient the exam belongs to.
    pub patient_id: Uuid,
    /// Normalized exam name.
    pub name: String,
    /// When the exam was performed.
    pub exam_date: NaiveDate,
}

impl ExamKey {
    /// Build a key, trimming the exam name.
    pub fn new(patient_id: Uuid, name: &str, exam_date: NaiveDate) -> Self {
        Self {
            patient_id,
            name: name.trim().to_string(),
            exam_date,
        }
    }
}
