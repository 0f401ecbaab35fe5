//! Reminder delivery ledger model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of reminder recorded in the delivery ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// A medication dose reminder.
    Medication,
    /// An appointment reminder.
    Appointment,
}

impl ReminderKind {
    /// The ledger/wire string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medication => "medication",
            Self::Appointment => "appointment",
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
