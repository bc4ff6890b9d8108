use chrono::{Days, NaiveDate};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Four-digit year, zero-padded month and day: "2024-01-02"
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Every calendar day in `[start, end]`, ascending. Empty when `start > end`.
pub(crate) fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// `[today - before, today + after]`, saturating at the calendar limits
pub(crate) fn relative_range(today: NaiveDate, before: u64, after: u64) -> (NaiveDate, NaiveDate) {
    let start = today.checked_sub_days(Days::new(before)).unwrap_or(NaiveDate::MIN);
    let end = today.checked_add_days(Days::new(after)).unwrap_or(NaiveDate::MAX);
    (start, end)
}
