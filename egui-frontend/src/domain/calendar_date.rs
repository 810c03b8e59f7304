//! # Calendar Date Conversion
//!
//! Expenses are stored as millisecond timestamps but only the calendar day
//! matters. A date is stored as the first instant of that day in the user's
//! time zone ("local midnight").
//!
//! Months are one-based everywhere in this module: `(2024, 2, 15)` is
//! 15 February 2024.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone};

use super::errors::FormError;

/// Longest stretch of skipped local time searched when midnight does not exist
const MAX_GAP_MINUTES: i64 = 180;
const GAP_STEP_MINUTES: usize = 15;

/// Build a calendar date from one-based year/month/day components
pub fn date_from_components(year: i32, month: u32, day: u32) -> Result<NaiveDate, FormError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(FormError::InvalidDate { year, month, day })
}

/// First instant of `date` in `tz`.
///
/// Zones that start daylight saving at midnight have no 00:00 on that day;
/// the earliest valid local time is used instead. When midnight is
/// ambiguous the earlier instant wins.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, FormError> {
    let midnight = date.and_time(NaiveTime::MIN);

    for minutes in (0..=MAX_GAP_MINUTES).step_by(GAP_STEP_MINUTES) {
        let candidate = midnight + Duration::minutes(minutes);
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(instant) => return Ok(instant),
            LocalResult::Ambiguous(earliest, _) => return Ok(earliest),
            LocalResult::None => continue,
        }
    }

    Err(FormError::UnrepresentableDate(date.to_string()))
}

/// Milliseconds since the epoch of local midnight on `date`
pub fn local_midnight_millis<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<i64, FormError> {
    start_of_day(date, tz).map(|instant| instant.timestamp_millis())
}

/// Calendar date a stored timestamp falls on in `tz`
pub fn calendar_date_from_millis<Tz: TimeZone>(millis: i64, tz: &Tz) -> Result<NaiveDate, FormError> {
    match tz.timestamp_millis_opt(millis) {
        LocalResult::Single(instant) => Ok(instant.date_naive()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.date_naive()),
        LocalResult::None => Err(FormError::UnrepresentableDate(millis.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, Local, Timelike, Utc};

    fn johannesburg() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn test_date_from_components_is_one_based() {
        let date = date_from_components(2024, 2, 15).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 15));

        let january = date_from_components(2024, 1, 31).unwrap();
        assert_eq!(january.month(), 1);
    }

    #[test]
    fn test_date_from_components_rejects_invalid() {
        assert_eq!(
            date_from_components(2023, 2, 29),
            Err(FormError::InvalidDate { year: 2023, month: 2, day: 29 })
        );
        assert!(date_from_components(2024, 0, 1).is_err());
        assert!(date_from_components(2024, 13, 1).is_err());
        assert!(date_from_components(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_local_midnight_in_fixed_offset() {
        let date = date_from_components(2024, 2, 15).unwrap();
        let millis = local_midnight_millis(date, &johannesburg()).unwrap();

        let expected = Utc.with_ymd_and_hms(2024, 2, 14, 22, 0, 0).unwrap().timestamp_millis();
        assert_eq!(millis, expected);
    }

    #[test]
    fn test_midnight_round_trips_to_same_components() {
        let tz = johannesburg();
        let date = date_from_components(2024, 2, 15).unwrap();
        let millis = local_midnight_millis(date, &tz).unwrap();

        let back = tz.timestamp_millis_opt(millis).unwrap();
        assert_eq!((back.year(), back.month(), back.day()), (2024, 2, 15));
        assert_eq!((back.hour(), back.minute(), back.second(), back.nanosecond()), (0, 0, 0, 0));
    }

    #[test]
    fn test_midnight_round_trips_in_local_zone() {
        let date = date_from_components(2024, 2, 15).unwrap();
        let millis = local_midnight_millis(date, &Local).unwrap();

        let back = Local.timestamp_millis_opt(millis).unwrap();
        assert_eq!(back.date_naive(), date);
        assert_eq!(back.hour(), 0);
        assert_eq!(back.minute(), 0);
    }

    #[test]
    fn test_calendar_date_from_millis_uses_zone() {
        // 23:30 UTC on 14 Feb is already 15 Feb in UTC+2
        let millis = Utc.with_ymd_and_hms(2024, 2, 14, 23, 30, 0).unwrap().timestamp_millis();

        assert_eq!(
            calendar_date_from_millis(millis, &johannesburg()).unwrap(),
            date_from_components(2024, 2, 15).unwrap()
        );
        assert_eq!(
            calendar_date_from_millis(millis, &Utc).unwrap(),
            date_from_components(2024, 2, 14).unwrap()
        );
    }

    #[test]
    fn test_time_of_day_is_truncated() {
        let tz = johannesburg();
        let afternoon = tz.with_ymd_and_hms(2024, 6, 3, 15, 42, 7).unwrap().timestamp_millis();

        let date = calendar_date_from_millis(afternoon, &tz).unwrap();
        let midnight = local_midnight_millis(date, &tz).unwrap();

        assert_eq!(midnight, tz.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap().timestamp_millis());
    }
}
