//! Turns matched rows into the ordered sequence of form-driver calls that
//! fill the week.
//!
//! The sequence is strictly serial across rows and days: every driver call
//! depends on the remote surface having settled from the previous one, so
//! nothing here fans out.

use crate::core::matcher;
use crate::core::store::BookingStore;
use crate::core::week::WeekContext;
use crate::driver::{FieldId, FormDriver};
use crate::errors::AppResult;
use crate::models::row::MatchedRow;

/// Outcome counts of one fill run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    pub matched_rows: usize,
    pub written_days: usize,
    pub skipped_days: usize,
}

/// Scrapes the remote row labels, matches them against the store, fills
/// every matched row day by day, then persists the week exactly once.
pub fn fill_week<D: FormDriver>(
    driver: &mut D,
    store: &BookingStore,
    week: &WeekContext,
) -> AppResult<FillReport> {
    let labels = driver.scrape_row_labels()?;
    let matched = matcher::match_rows(store, &labels);

    let mut report = FillReport {
        matched_rows: matched.len(),
        ..FillReport::default()
    };

    for row in &matched {
        fill_row(driver, row, week, &mut report)?;
    }

    driver.apply_and_persist()?;
    Ok(report)
}

/// Per day, in offset order: hours, minutes, open the comment editor, type
/// the comment, commit. Hour/minute fields are addressed by column index,
/// the comment dialog by the day's absolute timestamp — the remote surface
/// uses both schemes at once.
pub fn fill_row<D: FormDriver>(
    driver: &mut D,
    row: &MatchedRow,
    week: &WeekContext,
    report: &mut FillReport,
) -> AppResult<()> {
    for (day_offset, day) in row.entry.hours.iter().enumerate() {
        let Some((hours, minutes)) = day.write_parts() else {
            report.skipped_days += 1;
            continue;
        };

        driver.write_field(FieldId::hours(row.row_index, day_offset), hours)?;
        driver.write_field(FieldId::minutes(row.row_index, day_offset), minutes)?;

        driver.open_comment_editor(row.row_index, week.day_timestamp_ms(day_offset))?;
        driver.type_text(&day.comment)?;
        driver.commit_and_close_editor()?;

        report.written_days += 1;
    }
    Ok(())
}
