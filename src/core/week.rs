//! Week anchoring: every day computation in the system derives from the
//! Monday of the current week.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime};

use crate::models::booking::WEEKDAYS;

/// Monday on or before `d`, i.e. the start of `d`'s week.
/// A Sunday maps back six days to the Monday that opened its week.
pub fn monday_of(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

/// The week every day computation is addressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekContext {
    pub monday: NaiveDate,
}

impl WeekContext {
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            monday: monday_of(today),
        }
    }

    /// Calendar day for a Monday-based offset (0 = Monday .. 4 = Friday).
    pub fn day(&self, offset: usize) -> NaiveDate {
        debug_assert!(offset < WEEKDAYS);
        self.monday + Duration::days(offset as i64)
    }

    /// Local-midnight epoch milliseconds for a day offset. This is the key
    /// the remote surface uses to address a day's comment dialog.
    pub fn day_timestamp_ms(&self, offset: usize) -> i64 {
        let midnight = self.day(offset).and_time(NaiveTime::MIN);
        midnight
            .and_local_timezone(Local)
            .earliest()
            // midnight can fall into a DST gap; fall back to UTC midnight
            .map_or_else(|| midnight.and_utc().timestamp_millis(), |dt| dt.timestamp_millis())
    }
}
