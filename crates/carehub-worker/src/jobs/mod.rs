//! Scheduled job implementations.

pub mod cleanup;
pub mod reminder;

pub use cleanup::CleanupJob;
pub use reminder::ReminderJob;
