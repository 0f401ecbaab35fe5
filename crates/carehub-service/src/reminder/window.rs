//! Due-soon eligibility windows.
//!
//! All comparisons are integer minutes-since-midnight on the server's
//! local date; a reminder is eligible when the event is between
//! `min_lead_minutes` and `max_lead_minutes` ahead of now.

/// A lead-time range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    /// Smallest eligible lead in minutes.
    pub min_lead_minutes: i64,
    /// Largest eligible lead in minutes.
    pub max_lead_minutes: i64,
}

/// Medication doses: due now up to 15 minutes out.
pub const MEDICATION_WINDOW: ReminderWindow = ReminderWindow {
    min_lead_minutes: 0,
    max_lead_minutes: 15,
};

/// Appointments: roughly one hour out, with slack for trigger jitter.
pub const APPOINTMENT_WINDOW: ReminderWindow = ReminderWindow {
    min_lead_minutes: 50,
    max_lead_minutes: 70,
};

impl ReminderWindow {
    /// Whether an event scheduled at `scheduled_minutes` is inside the
    /// window at `now_minutes`.
    pub fn contains(&self, now_minutes: i64, scheduled_minutes: i64) -> bool {
        let lead = scheduled_minutes - now_minutes;
        lead >= self.min_lead_minutes && lead <= self.max_lead_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 10 * 60; // 10:00

    #[test]
    fn medication_window_edges() {
        assert!(MEDICATION_WINDOW.contains(NOW, NOW)); // due right now
        assert!(MEDICATION_WINDOW.contains(NOW, NOW + 15)); // 15 minutes out
        assert!(!MEDICATION_WINDOW.contains(NOW, NOW + 16)); // 16 minutes out
        assert!(!MEDICATION_WINDOW.contains(NOW, NOW - 1)); // already past
    }

    #[test]
    fn appointment_window_edges() {
        assert!(APPOINTMENT_WINDOW.contains(NOW, NOW + 50));
        assert!(APPOINTMENT_WINDOW.contains(NOW, NOW + 70));
        assert!(!APPOINTMENT_WINDOW.contains(NOW, NOW + 49));
        assert!(!APPOINTMENT_WINDOW.contains(NOW, NOW + 71));
    }

    #[test]
    fn window_works_across_odd_times() {
        // 09:47 now, dose at 10:00 -> 13 minutes lead, eligible.
        assert!(MEDICATION_WINDOW.contains(9 * 60 + 47, 10 * 60));
        // 08:55 now, appointment at 10:10 -> 75 minutes lead, not yet.
        assert!(!APPOINTMENT_WINDOW.contains(8 * 60 + 55, 10 * 60 + 10));
    }
}
