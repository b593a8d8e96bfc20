use serde::{Deserialize, Serialize};

use super::booking::BookingEntry;

/// Label of one logical row of the remote timesheet table.
/// `row_index` is the row's 0-based ordinal among all scraped rows; it feeds
/// directly into the remote field-naming scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRowLabel {
    pub row_index: usize,
    pub project: String,
    pub task: String,
}

impl RemoteRowLabel {
    /// Pairs scraped text cells into row labels: cell `2k` is the project,
    /// cell `2k+1` the task of logical row `k`. A dangling odd cell is
    /// dropped.
    pub fn pair_cells(cells: &[String]) -> Vec<RemoteRowLabel> {
        cells
            .chunks_exact(2)
            .enumerate()
            .map(|(k, pair)| RemoteRowLabel {
                row_index: k,
                project: pair[0].clone(),
                task: pair[1].clone(),
            })
            .collect()
    }
}

/// Join of a remote row and the booking entry that fills it.
#[derive(Debug)]
pub struct MatchedRow<'a> {
    pub row_index: usize,
    pub entry: &'a BookingEntry,
}
