//! Medication natural key.

use uuid::Uuid;

/// The business-field tuple identifying "the same prescription" across
/// repeated ERP syncs: patient + name + dosage.
///
/// Frequency is deliberately not part of the key — a frequency change on
/// resync is a payload update to the existing prescription, not a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MedicationKey {
    /// The patient taking the medication.
    pub patient_id: Uuid,
    /// Normalized medication name.
    pub name: String,
    /// Normalized dosage description.
    pub dosage: String,
}

impl MedicationKey {
    /// Build a key, trimming the text fields.
    pub fn new(patient_id: Uuid, name: &str, dosage: &str) -> Self {
        Self {
            patient_id,
            name: name.trim().to_string(),
            dosage: dosage.trim().to_string(),
        }
    }
}
