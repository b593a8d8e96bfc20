//! Joins remote row labels with booking entries.

use crate::core::store::BookingStore;
use crate::models::row::{MatchedRow, RemoteRowLabel};
use crate::ui::messages;

/// Matches each remote row against the store by trimmed (project, task)
/// equality. Each booking entry is claimed by at most one row per run;
/// unmatched remote rows are left untouched and unmatched bookings are
/// reported as warnings.
pub fn match_rows<'a>(store: &'a BookingStore, labels: &[RemoteRowLabel]) -> Vec<MatchedRow<'a>> {
    let mut claimed = vec![false; store.len()];
    let mut matched = Vec::new();

    for label in labels {
        if let Some(index) = store.find_index(&label.project, &label.task) {
            if claimed[index] {
                continue;
            }
            claimed[index] = true;
            matched.push(MatchedRow {
                row_index: label.row_index,
                entry: store.get(index),
            });
        }
    }

    for (index, was_claimed) in claimed.iter().enumerate() {
        if !was_claimed {
            let entry = store.get(index);
            messages::warning(format!(
                "No remote row found for {} | {}: booking skipped",
                entry.project.trim(),
                entry.task.trim()
            ));
        }
    }

    matched
}
