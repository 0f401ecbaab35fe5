//! Minutes-since-midnight arithmetic.
//!
//! All reminder eligibility comparisons are done as integer minutes on the
//! server's local date context; stored timestamps are taken at face value
//! with no timezone conversion.

use chrono::{NaiveTime, Timelike};

/// The minutes elapsed since midnight for a time of day. Seconds are
/// truncated.
pub fn minutes_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_is_zero() {
        let t = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(minutes_of_day(t), 0);
    }

    #[test]
    fn seconds_are_truncated() {
        let t = NaiveTime::from_hms_opt(14, 30, 59).unwrap();
        assert_eq!(minutes_of_day(t), 14 * 60 + 30);
    }

    #[test]
    fn end_of_day() {
        let t = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        assert_eq!(minutes_of_day(t), 1439);
    }
}
