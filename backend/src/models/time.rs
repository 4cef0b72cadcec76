//! Wall-clock helpers for the scheduling grid.
//!
//! Times travel through the widget as `"HH:MM"` strings and are only turned
//! into minute offsets when a layout pass needs them. Hour labels are whole
//! hours; the grid never renders minutes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

pub const HOURS_PER_DAY: u32 = 24;

/// Last representable minute offset of a day (`"24:00"`).
pub const MINUTES_PER_DAY: u32 = HOURS_PER_DAY * 60;

/// Clock format used for hour labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `"09:00"`
    #[default]
    #[serde(rename = "24h")]
    H24,
    /// `"9 AM"`
    #[serde(rename = "12h")]
    H12,
}

impl FromStr for TimeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "24h" | "24" => Ok(Self::H24),
            "12h" | "12" => Ok(Self::H12),
            _ => Err(format!("Unknown time format: {}", s)),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::H24 => write!(f, "24h"),
            Self::H12 => write!(f, "12h"),
        }
    }
}

/// Render an hour label.
///
/// 24-hour labels are zero padded (`"09:00"`). 12-hour labels follow the
/// usual clock convention: `0 -> "12 AM"`, `12 -> "12 PM"`, `13 -> "1 PM"`.
pub fn format_time(hour: u32, format: TimeFormat) -> String {
    match format {
        TimeFormat::H12 => match hour {
            0 => "12 AM".to_string(),
            h if h < 12 => format!("{} AM", h),
            12 => "12 PM".to_string(),
            h => format!("{} PM", h - 12),
        },
        TimeFormat::H24 => format!("{:02}:00", hour),
    }
}

/// Parse `"HH:MM"` into minutes since midnight.
///
/// No range validation is performed. A component that is not a number (or a
/// missing minutes component) yields `NaN`, which the layout engine carries
/// through its arithmetic instead of failing. Blank components count as zero.
pub fn time_to_minutes(time: &str) -> f64 {
    let mut parts = time.split(':');
    let hours = parse_component(parts.next());
    let minutes = parse_component(parts.next());
    hours * MINUTES_PER_HOUR + minutes
}

fn parse_component(part: Option<&str>) -> f64 {
    match part.map(str::trim) {
        None => f64::NAN,
        Some("") => 0.0,
        Some(raw) => raw.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Format a minute offset as `"HH:MM"`.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Whole hours in `[start_hour, end_hour)`.
///
/// The range is empty when `end_hour <= start_hour` and can be cloned to
/// iterate again.
pub fn generate_hours(start_hour: u32, end_hour: u32) -> Range<u32> {
    start_hour..end_hour.max(start_hour)
}

/// Check that a string is a wall-clock time the store accepts.
///
/// Accepts anything chrono parses as `%H:%M`, plus `"24:00"` as the end of
/// the day.
pub fn is_valid_clock_time(time: &str) -> bool {
    time == "24:00" || chrono::NaiveTime::parse_from_str(time, "%H:%M").is_ok()
}

/// Default end time for a task starting at `start`: one hour later, never
/// past `"24:00"`.
///
/// Returns `None` when `start` cannot be parsed.
pub fn default_end_time(start: &str) -> Option<String> {
    if !is_valid_clock_time(start) {
        return None;
    }
    let minutes = time_to_minutes(start);
    if !minutes.is_finite() {
        return None;
    }
    let end = (minutes as u32 + 60).min(MINUTES_PER_DAY);
    Some(minutes_to_time(end))
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
