// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Date and time value types
//!
//! [`Date`], [`Time`] and [`DateTime`] are calendar-aware value types with
//! formatting and arithmetic. A `DateTime` optionally carries an explicit
//! [`Calendar`]; values without one default to the ISO-Gregorian calendar
//! at the point of use. Arithmetic walks the calendar day by day (O(n) in
//! the offset magnitude), which keeps leap-day handling exact.

use crate::calendar::Calendar;
use crate::duration::Duration;
use crate::error::{Result, TimeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Microseconds in one second
pub const MICROS_PER_SECOND: i64 = 1_000_000;
/// Seconds in one day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// An idealized naive date: year, month and day
///
/// Field order gives the derived ordering chronological meaning.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Date {
    /// Create a date, validated against the ISO-Gregorian calendar
    ///
    /// Dates carry no calendar of their own; use [`DateTime::new`] with an
    /// explicit calendar for non-Gregorian validation.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        let date = Date { year, month, day };
        validate_date(date, &Calendar::iso_gregorian())?;
        Ok(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Sub for Date {
    type Output = Duration;

    /// Elapsed span `self - earlier`, in the default calendar
    fn sub(self, earlier: Date) -> Duration {
        Duration::from_parts(
            DateTime::midnight(earlier),
            DateTime::midnight(self),
            Calendar::iso_gregorian(),
        )
    }
}

/// An idealized instant in time, independent of any particular day
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub microsecond: u32,
}

impl Time {
    /// Create a time of day; leap seconds are not representable
    pub fn new(hour: u8, minute: u8, second: u8, microsecond: u32) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 || microsecond >= MICROS_PER_SECOND as u32 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
                microsecond,
            });
        }
        Ok(Time {
            hour,
            minute,
            second,
            microsecond,
        })
    }

    /// Seconds elapsed since midnight, ignoring microseconds
    pub fn seconds_of_day(&self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        Ok(())
    }
}

/// An idealized instant within a calendar: a [`Date`], a [`Time`] and an
/// optional explicit [`Calendar`]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
    pub calendar: Option<Calendar>,
}

impl DateTime {
    /// Midnight on the given calendar date
    pub fn new(year: i32, month: u8, day: u8, calendar: Option<Calendar>) -> Result<Self> {
        Self::with_time(year, month, day, 0, 0, 0, 0, calendar)
    }

    /// A fully specified instant
    ///
    /// Validates the date against the calendar in effect and the time
    /// components against their ranges.
    #[allow(clippy::too_many_arguments)]
    pub fn with_time(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
        calendar: Option<Calendar>,
    ) -> Result<Self> {
        let date = Date { year, month, day };
        match &calendar {
            Some(cal) => validate_date(date, cal)?,
            None => validate_date(date, &Calendar::iso_gregorian())?,
        }
        Ok(DateTime {
            date,
            time: Time::new(hour, minute, second, microsecond)?,
            calendar,
        })
    }

    /// Midnight on a date already known to be valid
    pub(crate) fn midnight(date: Date) -> Self {
        DateTime {
            date,
            time: Time::default(),
            calendar: None,
        }
    }

    /// The explicit calendar, or the ISO-Gregorian default
    pub fn calendar_or_default(&self) -> Calendar {
        self.calendar.clone().unwrap_or_default()
    }

    /// Parse an ISO-8601-like timestamp
    ///
    /// Accepts `YYYY-MM-DD`, optionally followed by `THH:MM:SS` with a
    /// fractional-second part, optionally suffixed `Z`.
    pub fn parse_iso8601(text: &str, calendar: Option<Calendar>) -> Result<Self> {
        let bad = || TimeError::InvalidTimestamp(text.to_string());
        let trimmed = text.trim().trim_end_matches('Z');
        let (date_part, time_part) = match trimmed.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        let mut fields = date_part.splitn(3, '-');
        let year: i32 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
        let month: u8 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
        let day: u8 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;

        let (hour, minute, second, microsecond) = match time_part {
            None => (0, 0, 0, 0),
            Some(t) => {
                let mut fields = t.splitn(3, ':');
                let hour: u8 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
                let minute: u8 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
                let sec_text = fields.next().ok_or_else(bad)?;
                let (second, microsecond) = match sec_text.split_once('.') {
                    None => (sec_text.parse().map_err(|_| bad())?, 0),
                    Some((whole, frac)) => {
                        let second: u8 = whole.parse().map_err(|_| bad())?;
                        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                            return Err(bad());
                        }
                        // Scale the fraction to microseconds
                        let mut digits = format!("{frac:0<6}");
                        digits.truncate(6);
                        let micros: u32 = digits.parse().map_err(|_| bad())?;
                        (second, micros)
                    }
                };
                (hour, minute, second, microsecond)
            }
        };

        Self::with_time(
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
            calendar,
        )
    }

    /// Elapsed span `self - earlier`
    ///
    /// Fails with [`TimeError::CalendarMismatch`] when both instants carry
    /// explicit calendars that differ. A single explicit calendar wins over
    /// an unspecified one; two unspecified calendars use the default.
    pub fn duration_since(&self, earlier: &DateTime) -> Result<Duration> {
        Duration::between(earlier, self)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl Add<TimeDelta> for DateTime {
    type Output = DateTime;

    /// `self` shifted by `delta`, with second and microsecond carry into
    /// whole days and the day count applied by walking the calendar
    fn add(self, delta: TimeDelta) -> DateTime {
        let cal = self.calendar_or_default();

        let mut micros = self.time.microsecond as i64 + delta.microseconds;
        let mut seconds = self.time.seconds_of_day() + delta.seconds + micros.div_euclid(MICROS_PER_SECOND);
        micros = micros.rem_euclid(MICROS_PER_SECOND);
        let days = delta.days + seconds.div_euclid(SECONDS_PER_DAY);
        seconds = seconds.rem_euclid(SECONDS_PER_DAY);

        let date = cal.add_days(self.date, days);
        let time = Time {
            hour: (seconds / 3600) as u8,
            minute: (seconds % 3600 / 60) as u8,
            second: (seconds % 60) as u8,
            microsecond: micros as u32,
        };
        DateTime {
            date,
            time,
            calendar: self.calendar,
        }
    }
}

/// A duration expressed as days, seconds and microseconds
///
/// Normalized so that `0 <= seconds < 86400` and
/// `0 <= microseconds < 1_000_000`, with the sign carried by `days`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct TimeDelta {
    pub days: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl TimeDelta {
    /// Create a normalized delta
    pub fn new(days: i64, seconds: i64, microseconds: i64) -> Self {
        let mut seconds = seconds + microseconds.div_euclid(MICROS_PER_SECOND);
        let microseconds = microseconds.rem_euclid(MICROS_PER_SECOND);
        let days = days + seconds.div_euclid(SECONDS_PER_DAY);
        seconds = seconds.rem_euclid(SECONDS_PER_DAY);
        TimeDelta {
            days,
            seconds,
            microseconds,
        }
    }

    /// A whole number of days
    pub fn from_days(days: i64) -> Self {
        TimeDelta {
            days,
            seconds: 0,
            microseconds: 0,
        }
    }

    /// Split a fractional second count into whole seconds and microseconds
    pub fn from_seconds_f64(seconds: f64) -> Self {
        let whole = seconds.floor();
        let micros = ((seconds - whole) * MICROS_PER_SECOND as f64).round() as i64;
        Self::new(0, whole as i64, micros)
    }
}

fn validate_date(date: Date, calendar: &Calendar) -> Result<()> {
    if date.month == 0 || date.month > 12 {
        return Err(TimeError::InvalidDate {
            year: date.year,
            month: date.month,
            day: date.day,
            reason: "month out of range".to_string(),
        });
    }
    let in_month = calendar.days_in_month(date.year, date.month);
    if date.day == 0 || date.day > in_month {
        return Err(TimeError::InvalidDate {
            year: date.year,
            month: date.month,
            day: date.day,
            reason: format!("month has {in_month} days"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_string() {
        let d = Date::new(2001, 8, 7).unwrap();
        assert_eq!(d.to_string(), "2001-08-07");
    }

    #[test]
    fn test_time_string() {
        let t = Time::new(11, 3, 5, 0).unwrap();
        assert_eq!(t.to_string(), "11:03:05");
    }

    #[test]
    fn test_time_string_microseconds() {
        let t = Time::new(3, 17, 25, 34).unwrap();
        assert_eq!(t.to_string(), "03:17:25.000034");
    }

    #[test]
    fn test_datetime_string() {
        let dt = DateTime::with_time(2017, 12, 19, 8, 55, 31, 0, None).unwrap();
        assert_eq!(dt.to_string(), "2017-12-19T08:55:31");
    }

    #[test]
    fn test_invalid_dates() {
        assert!(Date::new(2001, 2, 29).is_err());
        assert!(Date::new(2000, 2, 29).is_ok());
        assert!(Date::new(2001, 13, 1).is_err());
        assert!(Date::new(2001, 0, 1).is_err());
        assert!(Date::new(2001, 4, 31).is_err());
    }

    #[test]
    fn test_invalid_time() {
        assert!(Time::new(24, 0, 0, 0).is_err());
        assert!(Time::new(0, 60, 0, 0).is_err());
        assert!(Time::new(0, 0, 60, 0).is_err());
    }

    #[test]
    fn test_parse_iso8601() {
        let dt = DateTime::parse_iso8601("2001-08-07T00:00:00.0Z", None).unwrap();
        assert_eq!(dt.date, Date::new(2001, 8, 7).unwrap());
        assert_eq!(dt.time, Time::default());

        let dt = DateTime::parse_iso8601("1970-01-01", None).unwrap();
        assert_eq!(dt.to_string(), "1970-01-01T00:00:00");

        let dt = DateTime::parse_iso8601("2017-12-19T08:55:31.25", None).unwrap();
        assert_eq!(dt.time.microsecond, 250_000);
    }

    #[test]
    fn test_parse_iso8601_rejects_malformed() {
        assert!(DateTime::parse_iso8601("not a timestamp", None).is_err());
        assert!(DateTime::parse_iso8601("2001-08", None).is_err());
        assert!(DateTime::parse_iso8601("2001-08-07T00:00", None).is_err());
        assert!(DateTime::parse_iso8601("2001-02-30T00:00:00", None).is_err());
    }

    #[test]
    fn test_add_delta_rolls_months_and_leap_days() {
        let dt = DateTime::new(2000, 2, 28, None).unwrap();
        let shifted = dt + TimeDelta::from_days(1);
        assert_eq!(shifted.date, Date::new(2000, 2, 29).unwrap());
        let shifted = shifted + TimeDelta::from_days(1);
        assert_eq!(shifted.date, Date::new(2000, 3, 1).unwrap());
    }

    #[test]
    fn test_add_delta_carries_seconds() {
        let dt = DateTime::with_time(2001, 8, 7, 23, 59, 30, 0, None).unwrap();
        let shifted = dt + TimeDelta::new(0, 45, 0);
        assert_eq!(shifted.to_string(), "2001-08-08T00:00:15");
    }

    #[test]
    fn test_add_negative_delta() {
        let dt = DateTime::new(2000, 3, 1, None).unwrap();
        let shifted = dt + TimeDelta::from_days(-1);
        assert_eq!(shifted.date, Date::new(2000, 2, 29).unwrap());
    }

    #[test]
    fn test_from_seconds_f64() {
        let delta = TimeDelta::from_seconds_f64(86_400.5);
        assert_eq!(delta.days, 1);
        assert_eq!(delta.seconds, 0);
        assert_eq!(delta.microseconds, 500_000);
    }

    #[test]
    fn test_date_ordering() {
        assert!(Date::new(2001, 8, 7).unwrap() < Date::new(2001, 9, 7).unwrap());
        assert!(Date::new(2001, 12, 31).unwrap() < Date::new(2002, 1, 1).unwrap());
    }

    #[test]
    fn test_serde_round_trip() {
        let dt = DateTime::with_time(2001, 8, 7, 11, 3, 5, 0, None).unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        let back: DateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(dt, back);
    }
}
