use serde::{Deserialize, Serialize};

use crate::utils::time::split_clock;

/// Number of bookable days per week (Monday..Friday).
pub const WEEKDAYS: usize = 5;

/// One day of a weekly booking: worked time as `"H:MM"` plus a comment.
///
/// A day is only written to the remote form when it is fully populated:
/// non-empty comment, a time that splits into non-empty hour and minute
/// parts, and a duration above zero. Anything less means "nothing to do" —
/// partial writes are never issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBooking {
    pub time: String,
    pub comment: String,
}

impl DayBooking {
    /// The zero value every fresh slot starts from.
    pub fn zero() -> Self {
        Self {
            time: "0:00".to_string(),
            comment: String::new(),
        }
    }

    /// Returns the hour and minute digits to type, or `None` when the day
    /// must be skipped entirely.
    pub fn write_parts(&self) -> Option<(&str, &str)> {
        if self.comment.is_empty() {
            return None;
        }
        let (hours, minutes) = split_clock(&self.time)?;
        if hours.is_empty() || minutes.is_empty() {
            return None;
        }
        let h: u32 = hours.parse().ok()?;
        let m: u32 = minutes.parse().ok()?;
        if h == 0 && m == 0 {
            return None;
        }
        Some((hours, minutes))
    }
}

/// Canonical weekly booking for one (project, task) pair.
/// `hours[0]` is Monday, `hours[4]` is Friday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingEntry {
    pub project: String,
    pub task: String,
    pub hours: [DayBooking; WEEKDAYS],
}

impl BookingEntry {
    /// New entry with all five day slots zeroed.
    pub fn empty(project: &str, task: &str) -> Self {
        Self {
            project: project.to_string(),
            task: task.to_string(),
            hours: std::array::from_fn(|_| DayBooking::zero()),
        }
    }

    /// Trim-insensitive, case-sensitive key equality.
    pub fn matches(&self, project: &str, task: &str) -> bool {
        self.project.trim() == project.trim() && self.task.trim() == task.trim()
    }
}
