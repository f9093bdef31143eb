//! Time and timestamp helpers.
//!
//! Every computation happens on the single UTC timeline; local time zones only
//! appear when a place's calendar day has to be located.

use chrono::{DateTime, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ValidationError;

/// UTC instant used for race bounds, solar events, and "now".
pub type Timestamp = DateTime<Utc>;

/// Milliseconds in one UTC day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Truncate an instant to 00:00:00 UTC of its calendar day.
#[must_use]
pub fn day_start_utc(ts: Timestamp) -> Timestamp {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Shift an instant by whole 24-hour days (negative goes backwards).
#[must_use]
pub fn add_days(ts: Timestamp, days: i64) -> Timestamp {
    ts + TimeDelta::milliseconds(days * MILLIS_PER_DAY)
}

/// Parse an RFC 3339 string (any offset) into a UTC [`Timestamp`].
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimestamp`] when `value` is not RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|_| ValidationError::InvalidTimestamp(value.to_owned()))
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when `value` is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(value.to_owned()))
}

/// Resolve an IANA time zone name (`Europe/Paris`, `Asia/Tokyo`, …).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimeZone`] when the name is unknown.
pub fn parse_time_zone(name: &str) -> Result<Tz, ValidationError> {
    name.parse::<Tz>()
        .map_err(|_| ValidationError::InvalidTimeZone(name.to_owned()))
}

/// UTC bounds of the local calendar day containing `now` in `tz`.
///
/// The window runs from local midnight to the next local midnight, so it
/// lasts 23 or 25 hours on daylight-saving transition days.
#[must_use]
pub fn local_day_window(now: Timestamp, tz: Tz) -> (Timestamp, Timestamp) {
    let date = now.with_timezone(&tz).date_naive();
    let start = local_midnight(tz, date);
    let end = date
        .succ_opt()
        .map_or_else(|| add_days(start, 1), |next| local_midnight(tz, next));
    (start, end)
}

fn local_midnight(tz: Tz, date: NaiveDate) -> Timestamp {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(local) = tz.from_local_datetime(&midnight).earliest() {
        return local.to_utc();
    }
    // Midnight falls inside a DST gap; the day starts where the gap ends.
    let offset = tz.offset_from_utc_datetime(&midnight).fix();
    (midnight - TimeDelta::seconds(i64::from(offset.local_minus_utc()))).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> Timestamp {
        parse_timestamp(value).unwrap()
    }

    #[test]
    fn should_truncate_to_utc_midnight() {
        let day = day_start_utc(ts("2025-06-14T17:42:10.250Z"));
        assert_eq!(day, ts("2025-06-14T00:00:00Z"));
    }

    #[test]
    fn should_use_utc_date_not_local_date_when_truncating() {
        // 23:30 in Paris is still the 14th in UTC
        let day = day_start_utc(ts("2025-06-15T01:30:00+02:00"));
        assert_eq!(day, ts("2025-06-14T00:00:00Z"));
    }

    #[test]
    fn should_step_exact_days_across_leap_day() {
        let next = add_days(ts("2024-02-28T00:00:00Z"), 1);
        assert_eq!(next, ts("2024-02-29T00:00:00Z"));
        let back = add_days(ts("2024-03-01T00:00:00Z"), -2);
        assert_eq!(back, ts("2024-02-28T00:00:00Z"));
    }

    #[test]
    fn should_reject_malformed_timestamp() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(ValidationError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn should_parse_calendar_date() {
        let date = parse_date("2025-06-14").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn should_reject_unknown_time_zone() {
        assert!(parse_time_zone("Europe/Paris").is_ok());
        assert!(matches!(
            parse_time_zone("Mars/Olympus"),
            Err(ValidationError::InvalidTimeZone(_))
        ));
    }

    #[test]
    fn should_locate_local_day_in_tokyo() {
        let tz = parse_time_zone("Asia/Tokyo").unwrap();
        // 20:00 UTC on the 14th is already the 15th in Tokyo
        let (start, end) = local_day_window(ts("2025-06-14T20:00:00Z"), tz);
        assert_eq!(start, ts("2025-06-14T15:00:00Z"));
        assert_eq!(end, ts("2025-06-15T15:00:00Z"));
    }

    #[test]
    fn should_produce_23_hour_day_on_spring_forward() {
        let tz = parse_time_zone("Europe/Paris").unwrap();
        let (start, end) = local_day_window(ts("2025-03-30T12:00:00Z"), tz);
        assert_eq!(start, ts("2025-03-29T23:00:00Z"));
        assert_eq!((end - start).num_hours(), 23);
    }

    #[test]
    fn should_produce_25_hour_day_on_fall_back() {
        let tz = parse_time_zone("Europe/Paris").unwrap();
        let (start, end) = local_day_window(ts("2025-10-26T12:00:00Z"), tz);
        assert_eq!(start, ts("2025-10-25T22:00:00Z"));
        assert_eq!((end - start).num_hours(), 25);
    }
}
