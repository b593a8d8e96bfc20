//! Recording driver: captures every call as a serializable operation
//! instead of touching a live surface. Backs the `plan` command and the
//! sequencing tests.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FieldId, FormDriver};
use crate::errors::AppResult;
use crate::models::row::RemoteRowLabel;

/// One recorded driver call, in issue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DriverOp {
    WriteField { field: String, text: String },
    OpenCommentEditor { row_index: usize, day_timestamp_ms: i64 },
    TypeText { text: String },
    CommitAndCloseEditor,
    ApplyAndPersist,
}

impl fmt::Display for DriverOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverOp::WriteField { field, text } => write!(f, "write {field} <- {text:?}"),
            DriverOp::OpenCommentEditor {
                row_index,
                day_timestamp_ms,
            } => write!(f, "open comment row {row_index} @ {day_timestamp_ms}"),
            DriverOp::TypeText { text } => write!(f, "type {text:?}"),
            DriverOp::CommitAndCloseEditor => write!(f, "commit and close editor"),
            DriverOp::ApplyAndPersist => write!(f, "apply and persist"),
        }
    }
}

/// Driver that replays a preloaded row layout and records everything the
/// sequencer asks for.
#[derive(Debug, Default)]
pub struct ScriptDriver {
    rows: Vec<RemoteRowLabel>,
    ops: Vec<DriverOp>,
}

impl ScriptDriver {
    pub fn new(rows: Vec<RemoteRowLabel>) -> Self {
        Self {
            rows,
            ops: Vec::new(),
        }
    }

    /// Builds the row layout from flat scraped cells (two per logical row).
    pub fn from_cells(cells: &[String]) -> Self {
        Self::new(RemoteRowLabel::pair_cells(cells))
    }

    pub fn ops(&self) -> &[DriverOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DriverOp> {
        self.ops
    }
}

impl FormDriver for ScriptDriver {
    fn scrape_row_labels(&mut self) -> AppResult<Vec<RemoteRowLabel>> {
        Ok(self.rows.clone())
    }

    fn write_field(&mut self, field: FieldId, text: &str) -> AppResult<()> {
        self.ops.push(DriverOp::WriteField {
            field: field.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn open_comment_editor(&mut self, row_index: usize, day_timestamp_ms: i64) -> AppResult<()> {
        self.ops.push(DriverOp::OpenCommentEditor {
            row_index,
            day_timestamp_ms,
        });
        Ok(())
    }

    fn type_text(&mut self, text: &str) -> AppResult<()> {
        self.ops.push(DriverOp::TypeText {
            text: text.to_string(),
        });
        Ok(())
    }

    fn commit_and_close_editor(&mut self) -> AppResult<()> {
        self.ops.push(DriverOp::CommitAndCloseEditor);
        Ok(())
    }

    fn apply_and_persist(&mut self) -> AppResult<()> {
        self.ops.push(DriverOp::ApplyAndPersist);
        Ok(())
    }
}
