//! Reminder delivery ledger entities.

pub mod model;

pub use model::ReminderKind;
