//! Date and time-of-day helpers for the entry form.
//!
//! Times are plain `HH:MM` strings and dates are ISO `YYYY-MM-DD` strings,
//! matching what the entries API stores.

use thiserror::Error;
use time::macros::{date, format_description};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

/// Hours added to the start time to suggest an end time.
pub const END_TIME_OFFSET_HOURS: u32 = 8;

/// Weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Both times of an entry are placed on this date so only the time of day counts.
const ANCHOR_DATE: Date = date!(2000 - 01 - 01);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Current wall-clock time in the local offset, or UTC when the offset is unknown.
pub fn now_local() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(_) => now,
    }
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

pub fn parse_date(value: &str) -> Result<Date, TimeError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| TimeError::InvalidDate(value.to_string()))
}

/// Today's date as `YYYY-MM-DD`.
pub fn today() -> String {
    format_date(now_local().date())
}

pub fn weekday_name_of(date: Date) -> &'static str {
    WEEKDAY_NAMES[date.weekday().number_days_from_sunday() as usize]
}

/// Weekday name for an ISO date string.
pub fn weekday_name(date: &str) -> Result<&'static str, TimeError> {
    parse_date(date).map(weekday_name_of)
}

pub fn current_weekday_name() -> &'static str {
    weekday_name_of(now_local().date())
}

/// Suggested end time for a start time: eight hours later, same minute.
///
/// Unparsable components count as zero. The hour wraps past midnight.
pub fn derive_end_time(start_hour: &str, start_minute: &str) -> (String, String) {
    let hour = start_hour.trim().parse::<u32>().unwrap_or(0);
    let minute = start_minute.trim().parse::<u32>().unwrap_or(0);
    let end_hour = (hour % 24 + END_TIME_OFFSET_HOURS) % 24;
    (format!("{:02}", end_hour), format!("{:02}", minute))
}

/// Round the minute down to the nearest multiple of five.
pub fn round_down_to_five(hour: u8, minute: u8) -> (u8, u8) {
    (hour, minute - minute % 5)
}

pub fn current_time_rounded_to_five() -> (u8, u8) {
    let now = now_local();
    round_down_to_five(now.hour(), now.minute())
}

/// Split `HH:MM` into its hour and minute parts. Missing parts are empty.
pub fn split_time(value: &str) -> (String, String) {
    let mut parts = value.splitn(2, ':');
    let hour = parts.next().unwrap_or_default().trim().to_string();
    let minute = parts.next().unwrap_or_default().trim().to_string();
    (hour, minute)
}

pub fn parse_time(value: &str) -> Result<Time, TimeError> {
    let invalid = || TimeError::InvalidTime(value.to_string());
    let (hour, minute) = split_time(value);
    let hour = hour.parse::<u8>().map_err(|_| invalid())?;
    let minute = minute.parse::<u8>().map_err(|_| invalid())?;
    Time::from_hms(hour, minute, 0).map_err(|_| invalid())
}

/// Hours from `start` to `end`, both `HH:MM` on the same nominal day.
///
/// Zero or negative when `end` is not after `start`.
pub fn elapsed_hours(start: &str, end: &str) -> Result<f64, TimeError> {
    let start = PrimitiveDateTime::new(ANCHOR_DATE, parse_time(start)?);
    let end = PrimitiveDateTime::new(ANCHOR_DATE, parse_time(end)?);
    Ok((end - start).whole_minutes() as f64 / 60.0)
}

pub fn compute_pay(total_hours: f64, hourly_rate: f64) -> f64 {
    total_hours * hourly_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_end_time_adds_eight_hours_and_wraps() {
        for hour in 0..24u32 {
            let (end_hour, end_minute) = derive_end_time(&hour.to_string(), "35");
            assert_eq!(end_hour, format!("{:02}", (hour + 8) % 24));
            assert_eq!(end_minute, "35");
        }
    }

    #[test]
    fn derive_end_time_defaults_garbage_to_zero() {
        assert_eq!(
            derive_end_time("", "x"),
            ("08".to_string(), "00".to_string())
        );
        assert_eq!(
            derive_end_time("nine", "15"),
            ("08".to_string(), "15".to_string())
        );
    }

    #[test]
    fn rounds_minutes_down_to_five() {
        assert_eq!(round_down_to_five(9, 0), (9, 0));
        assert_eq!(round_down_to_five(9, 4), (9, 0));
        assert_eq!(round_down_to_five(9, 5), (9, 5));
        assert_eq!(round_down_to_five(23, 59), (23, 55));
    }

    #[test]
    fn full_day_is_eight_hours_and_112_pay() {
        let hours = elapsed_hours("09:00", "17:00").unwrap();
        assert_eq!(hours, 8.0);
        assert_eq!(compute_pay(hours, 14.0), 112.0);
    }

    #[test]
    fn elapsed_hours_handles_partial_hours() {
        assert_eq!(elapsed_hours("08:15", "12:45").unwrap(), 4.5);
        assert_eq!(elapsed_hours("9:5", "9:35").unwrap(), 0.5);
    }

    #[test]
    fn elapsed_hours_is_not_positive_when_end_is_not_after_start() {
        assert_eq!(elapsed_hours("10:00", "10:00").unwrap(), 0.0);
        assert!(elapsed_hours("22:00", "06:00").unwrap() < 0.0);
    }

    #[test]
    fn elapsed_hours_rejects_out_of_range_times() {
        assert_eq!(
            elapsed_hours("24:00", "25:00"),
            Err(TimeError::InvalidTime("24:00".to_string()))
        );
        assert!(elapsed_hours("09:60", "10:00").is_err());
        assert!(elapsed_hours(":", "10:00").is_err());
    }

    #[test]
    fn weekday_names_are_sunday_first() {
        assert_eq!(weekday_name("2026-10-18"), Ok("Sunday"));
        assert_eq!(weekday_name("2026-10-16"), Ok("Friday"));
        assert!(weekday_name("2026-13-01").is_err());
    }

    #[test]
    fn today_is_iso_formatted() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(parse_date(&today).is_ok());
        assert_eq!(weekday_name(&today), Ok(current_weekday_name()));
    }

    #[test]
    fn split_time_keeps_parts() {
        assert_eq!(split_time("07:45"), ("07".to_string(), "45".to_string()));
        assert_eq!(split_time("7"), ("7".to_string(), String::new()));
    }
}
