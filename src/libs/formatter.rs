//! Date parsing and formatting for task due dates and timestamps.
//!
//! Stored timestamps are ISO-8601 text. Calendar computations happen in UTC:
//! RFC 3339 values are converted to UTC, values without an offset are taken
//! as UTC, and a bare date means UTC midnight.
//!
//! ## Labels
//!
//! Date labels follow the short en-US style used for task rows and group
//! headers:
//! - same calendar day as `now` → "Today"
//! - the day after → "Tomorrow"
//! - otherwise "Jun 12", or "Wednesday, Jun 12" with the weekday
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use gtd::libs::formatter::format_date_label;
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap();
//! let due = Utc.with_ymd_and_hms(2024, 6, 12, 17, 0, 0).unwrap();
//! assert_eq!(format_date_label(&due, &now, true), "Wednesday, Jun 12");
//! assert_eq!(format_date_label(&due, &now, false), "Jun 12");
//! ```

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses a stored timestamp. Returns `None` for text that is not a
/// supported ISO-8601 form.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Some(date.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Midnight at the start of `now`'s calendar day.
pub fn start_of_day(now: &DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// `YYYY-MM-DD` of `now`, the form compared against the date part of stored text.
pub fn date_key(now: &DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Date part of a stored timestamp: everything before the first `T`.
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

pub fn format_date_label(date: &DateTime<Utc>, now: &DateTime<Utc>, include_weekday: bool) -> String {
    let day = date.date_naive();
    let today = now.date_naive();

    if day == today {
        "Today".to_string()
    } else if Some(day) == today.succ_opt() {
        "Tomorrow".to_string()
    } else if include_weekday {
        date.format("%A, %b %-d").to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}

/// Label shown next to a task: empty without a due date, the raw text when
/// it does not parse.
pub fn format_due(due_date: Option<&str>, now: &DateTime<Utc>) -> String {
    match due_date {
        None => String::new(),
        Some(raw) => match parse_timestamp(raw) {
            Some(date) => format_date_label(&date, now, false),
            None => raw.to_string(),
        },
    }
}

/// Parses a due date typed by the user: `today`, `tomorrow`, `+N` days from
/// now, or any form accepted by [`parse_timestamp`].
pub fn parse_due_input(input: &str, now: &DateTime<Utc>) -> Option<DateTime<Utc>> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "today" => return Some(*now),
        "tomorrow" => return Some(*now + Duration::days(1)),
        _ => {}
    }
    if let Some(days) = input.strip_prefix('+') {
        return days.parse::<i64>().ok().map(|days| *now + Duration::days(days));
    }

    parse_timestamp(input)
}
