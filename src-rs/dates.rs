use chrono::{Local, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_TIME_SHAPE: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
}

/// Validates a `YYYY-MM-DD HH:MM:SS` string: shape first, then calendrical
/// validity (rejects month 13, day 32, hour 25 and friends).
pub fn validate_date_time(value: &str) -> bool {
    if value.is_empty() || !DATE_TIME_SHAPE.is_match(value) {
        return false;
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").is_ok()
}

pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Long absolute form used in prompts, e.g. "Friday, August 29, 2025".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Human-readable distance between `today` and `target`.
///
/// Within a week either way the descriptor is relative ("tomorrow",
/// "in 3 days", "2 days ago"); anything farther falls back to the
/// absolute "on Month D, Year" form.
pub fn relative_day_context(target: NaiveDate, today: NaiveDate) -> String {
    let days = (target - today).num_days();
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        2..=7 => format!("in {} days", days),
        -7..=-1 => format!("{} days ago", -days),
        _ => format!("on {}", target.format("%B %-d, %Y")),
    }
}
