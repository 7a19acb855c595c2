//! Day labels, HH:MM parsing and human-readable relative timestamps.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};

use crate::error::SharedError;

/// Parse an `HH:MM` time of day.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, SharedError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| SharedError::InvalidTime(s.to_string()))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, SharedError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| SharedError::InvalidDate(s.to_string()))
}

/// Full English day name used for timetable blocks.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Day label of a `YYYY-MM-DD` date.
pub fn day_label_for_date(s: &str) -> Result<&'static str, SharedError> {
    parse_date(s).map(|d| weekday_label(d.weekday()))
}

/// Whole days from `today` until `date`; negative once the date has passed.
pub fn days_until(date: &str, today: NaiveDate) -> Result<i64, SharedError> {
    parse_date(date).map(|d| (d - today).num_days())
}

/// Relative label such as "5 minutes ago" or "2 days ago".
pub fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 0 {
        return "just now".to_string();
    }
    let (n, unit) = match secs {
        0..=59 => return "just now".to_string(),
        60..=3_599 => (secs / 60, "minute"),
        3_600..=86_399 => (secs / 3_600, "hour"),
        86_400..=2_591_999 => (secs / 86_400, "day"),
        2_592_000..=31_535_999 => (secs / 2_592_000, "month"),
        _ => (secs / 31_536_000, "year"),
    };
    let plural = if n == 1 { "" } else { "s" };
    format!("{n} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn hhmm_parsing() {
        assert!(parse_hhmm("09:00").is_ok());
        assert!(parse_hhmm("23:59").is_ok());
        assert_eq!(
            parse_hhmm("9am"),
            Err(SharedError::InvalidTime("9am".to_string()))
        );
    }

    #[test]
    fn day_label() {
        // 2023-11-01 was a Wednesday
        assert_eq!(day_label_for_date("2023-11-01"), Ok("Wednesday"));
        assert!(day_label_for_date("next week").is_err());
    }

    #[test]
    fn days_until_exam() {
        let today = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
        assert_eq!(days_until("2023-11-05", today), Ok(4));
        assert_eq!(days_until("2023-10-30", today), Ok(-2));
    }

    #[test]
    fn relative_labels() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_label(now - Duration::seconds(10), now), "just now");
        assert_eq!(relative_label(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_label(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(relative_label(now - Duration::days(3), now), "3 days ago");
    }
}
