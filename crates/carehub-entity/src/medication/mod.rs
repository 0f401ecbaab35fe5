//! Medication domain entities.

pub mod key;
pub mod model;
pub mod schedule;

pub use key::MedicationKey;
pub use model::Medication;
pub use schedule::MedicationSchedule;
