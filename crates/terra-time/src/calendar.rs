// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Calendar definitions
//!
//! A [`Calendar`] is an immutable value describing the relationship between
//! the elements of a date: the month/day table, the leap-year rule and the
//! position of the leap day, plus week structure for weekday naming. Date
//! arithmetic walks the calendar one day at a time, so leap days are always
//! honoured without a derived day-of-year table.

use crate::datetime::Date;
use crate::error::{Result, TimeError};
use serde::{Deserialize, Serialize};

/// Number of months every supported calendar defines
pub const MONTHS_IN_YEAR: usize = 12;

/// Leap-year predicate, a pure function of the year
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub enum LeapYearRule {
    /// No year is a leap year
    #[default]
    NoLeap,
    /// Divisible by 4 and (not divisible by 100 or divisible by 400)
    ProlepticGregorian,
}

impl LeapYearRule {
    /// Whether `year` is a leap year under this rule
    pub fn is_leap_year(&self, year: i32) -> bool {
        match self {
            LeapYearRule::NoLeap => false,
            LeapYearRule::ProlepticGregorian => {
                year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
            }
        }
    }
}

/// An immutable calendar definition
///
/// Constructed either directly for custom calendars or via
/// [`Calendar::iso_gregorian`], the Gregorian calendar with no leap
/// seconds. The default calendar is built on demand; there is no shared
/// global instance.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Calendar {
    name: String,
    url: Option<String>,
    /// Days per month in a common (non-leap) year, 12 entries
    month_day_map: Vec<u8>,
    month_names: Vec<String>,
    leap_year_rule: LeapYearRule,
    /// (month, day) position of the inserted leap day
    leap_day: (u8, u8),
    days_in_week: u8,
    weekday_names: Vec<String>,
    /// A date whose weekday is `weekday_names[0]`
    weekday_anchor: Date,
}

impl Calendar {
    /// Create a calendar from a month/day table and a leap-year rule
    ///
    /// The table must have exactly 12 entries, all positive. The leap day
    /// defaults to month 2, day 29; week structure defaults to the
    /// Gregorian seven-day week anchored on Sunday 1995-01-01.
    pub fn new(
        name: impl Into<String>,
        month_day_map: Vec<u8>,
        leap_year_rule: LeapYearRule,
    ) -> Result<Self> {
        if month_day_map.len() != MONTHS_IN_YEAR {
            return Err(TimeError::InvalidCalendar(format!(
                "month/day table has {} entries, expected {}",
                month_day_map.len(),
                MONTHS_IN_YEAR
            )));
        }
        if let Some(pos) = month_day_map.iter().position(|&d| d == 0) {
            return Err(TimeError::InvalidCalendar(format!(
                "month {} has no days",
                pos + 1
            )));
        }
        Ok(Self {
            name: name.into(),
            url: None,
            month_day_map,
            month_names: Vec::new(),
            leap_year_rule,
            leap_day: (2, 29),
            days_in_week: 7,
            weekday_names: gregorian_weekday_names(),
            weekday_anchor: Date {
                year: 1995,
                month: 1,
                day: 1,
            },
        })
    }

    /// The Gregorian calendar with no leap seconds
    pub fn iso_gregorian() -> Self {
        Self {
            name: "ISO-Gregorian".to_string(),
            url: None,
            month_day_map: vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            leap_year_rule: LeapYearRule::ProlepticGregorian,
            leap_day: (2, 29),
            days_in_week: 7,
            weekday_names: gregorian_weekday_names(),
            // 1995-01-01 was a Sunday
            weekday_anchor: Date {
                year: 1995,
                month: 1,
                day: 1,
            },
        }
    }

    /// Set a reference URL for the calendar definition
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set month names (12 entries expected)
    pub fn with_month_names(mut self, names: Vec<String>) -> Self {
        self.month_names = names;
        self
    }

    /// Override the leap-day position
    pub fn with_leap_day(mut self, month: u8, day: u8) -> Self {
        self.leap_day = (month, day);
        self
    }

    /// Calendar name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference URL, if any
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The leap-year predicate in effect
    pub fn leap_year_rule(&self) -> LeapYearRule {
        self.leap_year_rule
    }

    /// Whether `year` is a leap year in this calendar
    pub fn is_leap_year(&self, year: i32) -> bool {
        self.leap_year_rule.is_leap_year(year)
    }

    /// Days in the given month of the given year
    ///
    /// The table entry plus one when the year is a leap year and the month
    /// carries the leap day. Months outside 1..=12 yield 0.
    pub fn days_in_month(&self, year: i32, month: u8) -> u8 {
        if month == 0 {
            return 0;
        }
        let base = match self.month_day_map.get(month as usize - 1) {
            Some(&d) => d,
            None => return 0,
        };
        if self.is_leap_year(year) && month == self.leap_day.0 {
            base + 1
        } else {
            base
        }
    }

    /// Days in the given year
    pub fn days_in_year(&self, year: i32) -> u32 {
        let common: u32 = self.month_day_map.iter().map(|&d| d as u32).sum();
        if self.is_leap_year(year) {
            common + 1
        } else {
            common
        }
    }

    /// Name of the given month (1-based), when month names are defined
    pub fn month_name(&self, month: u8) -> Option<&str> {
        if month == 0 {
            return None;
        }
        self.month_names.get(month as usize - 1).map(|s| s.as_str())
    }

    /// Name of the weekday the given date falls on
    ///
    /// Derived from the signed day offset to the weekday anchor date.
    /// Returns `None` when the calendar defines no weekday names.
    pub fn weekday_name(&self, date: Date) -> Option<&str> {
        if self.weekday_names.is_empty() || self.days_in_week == 0 {
            return None;
        }
        let offset = self.days_between(self.weekday_anchor, date);
        let index = offset.rem_euclid(self.days_in_week as i64) as usize;
        self.weekday_names.get(index).map(|s| s.as_str())
    }

    // ========================================================================
    // Day-Walk Primitives
    // ========================================================================

    /// The day after `date` in this calendar
    pub fn next_day(&self, date: Date) -> Date {
        let mut d = date;
        d.day += 1;
        if d.day > self.days_in_month(d.year, d.month) {
            d.day = 1;
            d.month += 1;
            if d.month > MONTHS_IN_YEAR as u8 {
                d.month = 1;
                d.year += 1;
            }
        }
        d
    }

    /// The day before `date` in this calendar
    pub fn prev_day(&self, date: Date) -> Date {
        let mut d = date;
        if d.day > 1 {
            d.day -= 1;
            return d;
        }
        if d.month > 1 {
            d.month -= 1;
        } else {
            d.month = MONTHS_IN_YEAR as u8;
            d.year -= 1;
        }
        d.day = self.days_in_month(d.year, d.month);
        d
    }

    /// `date` moved by `n` days, walking one day at a time
    pub fn add_days(&self, date: Date, n: i64) -> Date {
        let mut d = date;
        if n >= 0 {
            for _ in 0..n {
                d = self.next_day(d);
            }
        } else {
            for _ in 0..-n {
                d = self.prev_day(d);
            }
        }
        d
    }

    /// Signed day count from `from` to `to`
    ///
    /// Accumulated by walking the calendar, so leap days are counted
    /// exactly. Negative when `to` precedes `from`.
    pub fn days_between(&self, from: Date, to: Date) -> i64 {
        if from <= to {
            let mut d = from;
            let mut n = 0;
            while d < to {
                d = self.next_day(d);
                n += 1;
            }
            n
        } else {
            -self.days_between(to, from)
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar::iso_gregorian()
    }
}

fn gregorian_weekday_names() -> Vec<String> {
    [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_leap_years() {
        let cal = Calendar::iso_gregorian();
        assert!(cal.is_leap_year(2000));
        assert!(!cal.is_leap_year(1900));
        assert!(cal.is_leap_year(2004));
        assert!(!cal.is_leap_year(2001));
    }

    #[test]
    fn test_days_in_month() {
        let cal = Calendar::iso_gregorian();
        assert_eq!(cal.days_in_month(2000, 2), 29);
        assert_eq!(cal.days_in_month(1900, 2), 28);
        assert_eq!(cal.days_in_month(2001, 8), 31);
        assert_eq!(cal.days_in_month(2001, 13), 0);
    }

    #[test]
    fn test_days_in_year() {
        let cal = Calendar::iso_gregorian();
        assert_eq!(cal.days_in_year(2001), 365);
        assert_eq!(cal.days_in_year(2004), 366);
    }

    #[test]
    fn test_month_rollover() {
        let cal = Calendar::iso_gregorian();
        let d = cal.next_day(Date {
            year: 2001,
            month: 12,
            day: 31,
        });
        assert_eq!(
            d,
            Date {
                year: 2002,
                month: 1,
                day: 1
            }
        );
        let d = cal.prev_day(Date {
            year: 2000,
            month: 3,
            day: 1,
        });
        assert_eq!(
            d,
            Date {
                year: 2000,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_invalid_table_rejected() {
        assert!(Calendar::new("short", vec![30; 11], LeapYearRule::NoLeap).is_err());
        let mut table = vec![30; 12];
        table[4] = 0;
        assert!(Calendar::new("empty month", table, LeapYearRule::NoLeap).is_err());
    }

    #[test]
    fn test_weekday_names() {
        let cal = Calendar::iso_gregorian();
        let anchor = Date {
            year: 1995,
            month: 1,
            day: 1,
        };
        assert_eq!(cal.weekday_name(anchor), Some("Sunday"));
        assert_eq!(cal.weekday_name(cal.next_day(anchor)), Some("Monday"));
        // 2017-12-19 was a Tuesday
        assert_eq!(
            cal.weekday_name(Date {
                year: 2017,
                month: 12,
                day: 19
            }),
            Some("Tuesday")
        );
        // Backward from the anchor
        assert_eq!(cal.weekday_name(cal.prev_day(anchor)), Some("Saturday"));
    }

    #[test]
    fn test_month_names() {
        let cal = Calendar::iso_gregorian();
        assert_eq!(cal.month_name(1), Some("January"));
        assert_eq!(cal.month_name(12), Some("December"));
        assert_eq!(cal.month_name(13), None);
    }
}
