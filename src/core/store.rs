//! Owns the canonical booking list for the duration of one run.

use crate::models::booking::BookingEntry;
use crate::ui::messages;

/// Canonical bookings, looked up by trimmed (project, task) key.
#[derive(Debug, Default)]
pub struct BookingStore {
    entries: Vec<BookingEntry>,
}

impl BookingStore {
    /// Builds the store, enforcing key uniqueness: a duplicate
    /// (project, task) pair keeps the first-seen entry and raises a warning,
    /// so the result never depends on scan order.
    pub fn new(entries: Vec<BookingEntry>) -> Self {
        let mut kept: Vec<BookingEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if kept.iter().any(|k| k.matches(&entry.project, &entry.task)) {
                messages::warning(format!(
                    "Duplicate booking for {} | {}: keeping the first entry",
                    entry.project.trim(),
                    entry.task.trim()
                ));
            } else {
                kept.push(entry);
            }
        }
        Self { entries: kept }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[BookingEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> &BookingEntry {
        &self.entries[index]
    }

    /// Index of the entry matching the given trimmed key, if any.
    pub fn find_index(&self, project: &str, task: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.matches(project, task))
    }

    /// Entry matching the given trimmed key, if any.
    pub fn find(&self, project: &str, task: &str) -> Option<&BookingEntry> {
        self.find_index(project, task).map(|i| &self.entries[i])
    }
}
