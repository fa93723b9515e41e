use crate::error::{Result, SharedError};
use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TIME_24H_REGEX: Regex = Regex::new(r"^\d{2}:\d{2}$").unwrap();
}

/// Parse a 24-hour "HH:MM" value as produced by `<input type="time">`
pub fn parse_time(time24: &str) -> Result<NaiveTime> {
    if !TIME_24H_REGEX.is_match(time24) {
        return Err(SharedError::InvalidTimeFormat(time24.to_string()));
    }
    NaiveTime::parse_from_str(time24, "%H:%M")
        .map_err(|_| SharedError::InvalidTimeFormat(time24.to_string()))
}

/// Convert "HH:MM" to "H:MM AM" / "H:MM PM". Midnight and noon display as 12.
pub fn format_time(time24: &str) -> Result<String> {
    Ok(parse_time(time24)?.format("%-I:%M %p").to_string())
}

/// Format a calendar date for schedule cards, e.g. "Fri Mar 08 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}
