//! Patient consent domain entities.

pub mod model;

pub use model::PatientConsent;
