//! Time utilities: parsing HH:MM, duration computations, formatting hours.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FORMAT).ok()
}

/// Parse a HH:MM value, naming the offending field in the error.
pub fn require_time(label: &str, t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::Format(format!("{label} time must be HH:MM, got '{t}'")))
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// Fractional hours between two wall-clock times at minute resolution.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    minutes_between(start, end) as f64 / 60.0
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Hours rendered the way grids and reports show them: two decimals.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
