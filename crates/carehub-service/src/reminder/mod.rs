//! Reminder eligibility windows and the scheduled dispatcher.

pub mod dispatcher;
pub mod window;

pub use dispatcher::{DispatchSummary, ReminderDispatcher};
pub use window::ReminderWindow;
