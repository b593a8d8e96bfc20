//! One-shot input resolution: reads the booking file, detects its shape and
//! produces the explicit input value the rest of the run works from.
//!
//! Missing file, unreadable JSON or an unexpected top-level shape all
//! resolve to "no bookings" — the caller treats an empty result as the
//! terminal "nothing to do" condition, not as an error.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;

use crate::core::convert::convert_export;
use crate::core::store::BookingStore;
use crate::core::week::WeekContext;
use crate::models::booking::BookingEntry;
use crate::ui::messages;

/// Everything a reconciliation run needs, constructed once at startup and
/// passed by parameter; no component reads ambient state.
#[derive(Debug)]
pub struct ReconciliationInput {
    pub store: BookingStore,
    pub week: WeekContext,
}

impl ReconciliationInput {
    /// Resolves the booking file for the given day. `None` means there is
    /// nothing to book this week.
    pub fn resolve(path: &Path, today: NaiveDate) -> Option<Self> {
        let entries = load_bookings(path, today);
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            store: BookingStore::new(entries),
            week: WeekContext::for_today(today),
        })
    }
}

/// Loads bookings from `path`. A top-level JSON array is already canonical;
/// an object is routed through the export converter.
pub fn load_bookings(path: &Path, today: NaiveDate) -> Vec<BookingEntry> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    resolve_bookings(&text, today)
}

/// Same as [`load_bookings`] but on in-memory text.
pub fn resolve_bookings(text: &str, today: NaiveDate) -> Vec<BookingEntry> {
    let value: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => {
            messages::warning(format!("Could not parse booking input: {e}"));
            return Vec::new();
        }
    };

    match value {
        Value::Array(_) => serde_json::from_value(value).unwrap_or_else(|e| {
            messages::warning(format!("Could not read canonical bookings: {e}"));
            Vec::new()
        }),
        Value::Object(map) => convert_export(&map, today).unwrap_or_else(|e| {
            messages::warning(format!("Could not convert export: {e}"));
            Vec::new()
        }),
        _ => {
            messages::warning("Booking input is neither an array nor an export object");
            Vec::new()
        }
    }
}
