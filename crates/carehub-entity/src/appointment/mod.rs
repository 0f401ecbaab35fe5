//! Appointment domain entities.

pub mod key;
pub mod model;

pub use key::AppointmentKey;
pub use model::Appointment;
