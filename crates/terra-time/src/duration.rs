// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Differences between calendar-tagged instants
//!
//! A [`Duration`] holds its two endpoints and the calendar they share, and
//! derives whole-day, whole-year and total-second quantities from the
//! calendar's day-walk primitive. Subtracting across two explicit but
//! different calendars is an error; there is no safe general conversion.

use crate::calendar::Calendar;
use crate::datetime::{DateTime, MICROS_PER_SECOND, SECONDS_PER_DAY};
use crate::error::{Result, TimeError};
use serde::{Deserialize, Serialize};

/// The elapsed span between two instants in one calendar
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Duration {
    start: DateTime,
    end: DateTime,
    calendar: Calendar,
}

impl Duration {
    /// The span from `start` to `end` (`end - start`)
    ///
    /// The calendar is taken from whichever endpoint carries an explicit
    /// one; both unspecified defaults to ISO-Gregorian. Two explicit,
    /// different calendars are a [`TimeError::CalendarMismatch`].
    pub fn between(start: &DateTime, end: &DateTime) -> Result<Self> {
        let calendar = match (&start.calendar, &end.calendar) {
            (Some(a), Some(b)) if a != b => {
                return Err(TimeError::CalendarMismatch {
                    left: a.name().to_string(),
                    right: b.name().to_string(),
                })
            }
            (Some(a), _) => a.clone(),
            (None, Some(b)) => b.clone(),
            (None, None) => Calendar::iso_gregorian(),
        };
        Ok(Self::from_parts(start.clone(), end.clone(), calendar))
    }

    pub(crate) fn from_parts(start: DateTime, end: DateTime, calendar: Calendar) -> Self {
        Duration {
            start,
            end,
            calendar,
        }
    }

    /// Start of the span
    pub fn start(&self) -> &DateTime {
        &self.start
    }

    /// End of the span
    pub fn end(&self) -> &DateTime {
        &self.end
    }

    /// Calendar the span is measured in
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Signed whole days between the endpoint dates
    ///
    /// Accumulated day by day through the calendar, so leap days count
    /// exactly.
    pub fn days(&self) -> i64 {
        self.calendar.days_between(self.start.date, self.end.date)
    }

    /// Signed whole years elapsed
    ///
    /// Year difference, less one when the end month/day falls earlier in
    /// the year than the start month/day.
    pub fn years(&self) -> i32 {
        let mut years = self.end.date.year - self.start.date.year;
        if (self.end.date.month, self.end.date.day) < (self.start.date.month, self.start.date.day)
        {
            years -= 1;
        }
        years
    }

    /// Total elapsed seconds, including the time-of-day difference
    pub fn total_seconds(&self) -> f64 {
        let day_seconds = self.days() * SECONDS_PER_DAY;
        let tod = self.end.time.seconds_of_day() - self.start.time.seconds_of_day();
        let micros = self.end.time.microsecond as i64 - self.start.time.microsecond as i64;
        (day_seconds + tod) as f64 + micros as f64 / MICROS_PER_SECOND as f64
    }
}
