pub mod config;
pub mod convert;
pub mod plan;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Booking file read when --file is not given (the name the export tooling
/// produces).
pub const DEFAULT_BOOKING_FILE: &str = "toFill.json";

pub(crate) fn booking_file(cli: &Cli) -> PathBuf {
    PathBuf::from(cli.file.as_deref().unwrap_or(DEFAULT_BOOKING_FILE))
}

pub(crate) fn resolve_today(cli: &Cli) -> AppResult<NaiveDate> {
    match &cli.today {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}
