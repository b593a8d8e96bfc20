//! Converts the alternate time-log export into the canonical weekly-booking
//! shape, restricted to the current week.
//!
//! The export is a JSON object keyed by day-epoch-millis string, each day
//! keyed by `"project|task"`, each task holding an ordered list of
//! duration/description records. Entry order in the result follows the
//! first-seen task key, which is why the JSON maps must preserve insertion
//! order.

use chrono::{Datelike, Local, NaiveDate, TimeZone};
use serde_json::{Map, Value};

use crate::errors::AppResult;
use crate::models::booking::{BookingEntry, DayBooking, WEEKDAYS};
use crate::models::export::LogRecord;
use crate::ui::messages;
use crate::utils::time::format_minutes;

/// Separator between project and task in an export key. Keys without it are
/// export metadata, not tasks.
pub const TASK_KEY_SEPARATOR: char = '|';

/// Build the canonical booking list from a raw export.
///
/// A day is in scope iff it lies in `[monday_of(today), today]` inclusive;
/// everything else is dropped with a diagnostic note. Logs mapping outside
/// the Monday..Friday index range are skipped as well.
pub fn convert_export(raw: &Map<String, Value>, today: NaiveDate) -> AppResult<Vec<BookingEntry>> {
    let mut entries: Vec<BookingEntry> = Vec::new();

    for (day_key, tasks) in raw {
        let Some(day) = parse_day_key(day_key) else {
            messages::warning(format!(
                "Ignoring export key {day_key:?}: not a day timestamp"
            ));
            continue;
        };

        let days_before = (today - day).num_days();
        if days_before < 0 || days_before > today.weekday().num_days_from_monday() as i64 {
            messages::warning(format!(
                "Dropping logs for {day}: outside the current week window"
            ));
            continue;
        }

        let Some(tasks) = tasks.as_object() else {
            continue;
        };

        let day_index = day.weekday().num_days_from_monday() as usize;
        if day_index >= WEEKDAYS {
            // unreachable given the window check, but never write out of bounds
            continue;
        }

        for (task_key, records) in tasks {
            let Some((project, task)) = split_task_key(task_key) else {
                continue;
            };
            let records: Vec<LogRecord> = serde_json::from_value(records.clone())?;
            let entry = find_or_create(&mut entries, project, task);
            aggregate_day(&mut entry.hours[day_index], &records);
        }
    }

    Ok(entries)
}

/// Export day keys are epoch milliseconds; the day they name is resolved in
/// local time.
fn parse_day_key(key: &str) -> Option<NaiveDate> {
    let ms: i64 = key.trim().parse().ok()?;
    Local
        .timestamp_millis_opt(ms)
        .single()
        .map(|dt| dt.date_naive())
}

fn split_task_key(key: &str) -> Option<(&str, &str)> {
    let (project, task) = key.split_once(TASK_KEY_SEPARATOR)?;
    Some((project.trim(), task.trim()))
}

fn find_or_create<'a>(
    entries: &'a mut Vec<BookingEntry>,
    project: &str,
    task: &str,
) -> &'a mut BookingEntry {
    match entries.iter().position(|e| e.matches(project, task)) {
        Some(pos) => &mut entries[pos],
        None => {
            entries.push(BookingEntry::empty(project, task));
            entries.last_mut().unwrap()
        }
    }
}

/// Sum the records into one day slot: whole minutes (seconds floored away
/// per record) and the concatenated descriptions.
///
/// Every description is followed by ", ", including the last one. The
/// trailing separator is part of the established comment format on the
/// remote side and is kept verbatim.
fn aggregate_day(slot: &mut DayBooking, records: &[LogRecord]) {
    let total_minutes: i64 = records.iter().map(|r| r.duration / 60).sum();
    slot.time = format_minutes(total_minutes);

    let mut comment = String::new();
    for record in records {
        comment.push_str(&record.description);
        comment.push_str(", ");
    }
    slot.comment = comment;
}
