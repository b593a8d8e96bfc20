//! Time utilities: splitting "H:MM" strings and formatting minute totals.

/// Split a clock string at the first ':'; the parts are returned verbatim.
pub fn split_clock(t: &str) -> Option<(&str, &str)> {
    t.split_once(':')
}

/// Format a minute total as "H:MM". Hours are not zero-padded and have no
/// upper bound.
pub fn format_minutes(total: i64) -> String {
    format!("{}:{:02}", total / 60, total % 60)
}
