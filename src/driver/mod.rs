//! Boundary toward the live remote surface.
//!
//! The core never touches a browser: it issues calls against [`FormDriver`]
//! and a concrete driver (a browser shim, or the recording
//! [`script::ScriptDriver`]) executes them. Timing and the double-write
//! workaround are driver concerns, carried here as a [`TimingProfile`] so
//! the sequencer stays free of them.

pub mod script;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::row::RemoteRowLabel;

/// Sub-index of the hours input within a day cell.
pub const HOURS_SUB_INDEX: usize = 0;
/// Sub-index of the minutes input within a day cell.
pub const MINUTES_SUB_INDEX: usize = 1;
/// Column of Monday's day cell; weekday offsets are added to this.
const DAY_COLUMN_BASE: usize = 5;

/// Identity of one writable input of the remote form, rendered as
/// `sheet_row_column_sub` (e.g. `0_3_7_1`). The numeric layout is the
/// remote form's own field-naming scheme and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldId {
    pub sheet: usize,
    pub row: usize,
    pub column: usize,
    pub sub: usize,
}

impl FieldId {
    /// Hours input of `row` on weekday `day_offset` (0 = Monday).
    pub fn hours(row: usize, day_offset: usize) -> Self {
        Self {
            sheet: 0,
            row,
            column: DAY_COLUMN_BASE + day_offset,
            sub: HOURS_SUB_INDEX,
        }
    }

    /// Minutes input of `row` on weekday `day_offset` (0 = Monday).
    pub fn minutes(row: usize, day_offset: usize) -> Self {
        Self {
            sheet: 0,
            row,
            column: DAY_COLUMN_BASE + day_offset,
            sub: MINUTES_SUB_INDEX,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.sheet, self.row, self.column, self.sub
        )
    }
}

/// Settling delays and the write-retry policy a live driver applies around
/// its interactions. The pauses are empirical, not synchronization: they
/// tolerate the remote surface's own rendering lag. A driver may replace
/// them with readiness polling as long as the call order is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingProfile {
    /// Pause before each day's writes begin.
    pub settle_before_day_ms: u64,
    /// Pause after asking the comment dialog to open.
    pub dialog_open_ms: u64,
    /// Pause between focusing the comment editor and typing.
    pub before_type_ms: u64,
    /// Per-keystroke delay while typing.
    pub keystroke_ms: u64,
    /// Pause around the commit keystrokes that close the dialog.
    pub commit_ms: u64,
    /// Clear-and-type cycles per hour/minute field. The remote surface has
    /// been seen dropping the first keystroke; 2 writes work around that.
    pub write_retries: u32,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self {
            settle_before_day_ms: 1000,
            dialog_open_ms: 100,
            before_type_ms: 100,
            keystroke_ms: 10,
            commit_ms: 500,
            write_retries: 1,
        }
    }
}

impl TimingProfile {
    /// Profile with the double-write workaround enabled.
    pub fn hardened() -> Self {
        Self {
            write_retries: 2,
            ..Self::default()
        }
    }
}

/// Capability set the core depends on. Implementations own the single
/// remote session; calls arrive strictly one at a time.
pub trait FormDriver {
    /// Read the (project, task) labels of every logical row, in table order.
    fn scrape_row_labels(&mut self) -> AppResult<Vec<RemoteRowLabel>>;

    /// Focus the field, clear it, type `text`.
    fn write_field(&mut self, field: FieldId, text: &str) -> AppResult<()>;

    /// Open the comment dialog of `row_index` for the day addressed by its
    /// local-midnight epoch milliseconds.
    fn open_comment_editor(&mut self, row_index: usize, day_timestamp_ms: i64) -> AppResult<()>;

    /// Type into the currently open editor.
    fn type_text(&mut self, text: &str) -> AppResult<()>;

    /// Advance focus and confirm, closing the open dialog.
    fn commit_and_close_editor(&mut self) -> AppResult<()>;

    /// Final commit of the whole week; called once per run. May be a no-op
    /// in dry-run mode.
    fn apply_and_persist(&mut self) -> AppResult<()>;
}
