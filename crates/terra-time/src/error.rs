// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for calendar and date/time operations

use thiserror::Error;

/// Result type alias for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Errors that can occur in calendar and date/time arithmetic
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// Two calendar-tagged values carry explicit, different calendars
    #[error("calendar mismatch: {left} vs {right}")]
    CalendarMismatch { left: String, right: String },

    /// Date does not exist in the calendar in effect
    #[error("invalid date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year: i32,
        month: u8,
        day: u8,
        reason: String,
    },

    /// Time-of-day components out of range
    #[error("invalid time {hour:02}:{minute:02}:{second:02}.{microsecond:06}")]
    InvalidTime {
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    },

    /// Text does not parse as an ISO-8601-like timestamp
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    /// Calendar definition violates a structural invariant
    #[error("invalid calendar: {0}")]
    InvalidCalendar(String),

    /// Offset unit name not recognised
    #[error("unknown offset unit {0:?}")]
    UnknownUnit(String),
}
