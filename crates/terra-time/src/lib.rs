// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Terra-Time - Calendar-aware date and time values
//!
//! This crate supplies the calendar and date/time engine used by temporal
//! coordinate reference systems: immutable [`Calendar`] definitions
//! (month/day tables and leap-year rules), [`Date`]/[`Time`]/[`DateTime`]
//! value types with day-walk arithmetic, [`Duration`] differences between
//! two instants, and [`EpochDateTimes`] for decoding numeric
//! offsets-from-epoch into timestamp strings.
//!
//! Numerical conversion between calendars is deliberately not supported;
//! it is not a safe operation to generalise.
//!
//! # Example
//!
//! ```
//! use terra_time::{Calendar, DateTime, EpochDateTimes, OffsetUnit};
//!
//! let epoch = DateTime::new(2001, 8, 7, Some(Calendar::iso_gregorian())).unwrap();
//! let decoded = EpochDateTimes::new(318211200.0, OffsetUnit::Second, epoch);
//! assert_eq!(decoded.to_string(), "2011-09-07T00:00:00");
//! ```

pub mod calendar;
pub mod datetime;
pub mod duration;
pub mod epoch;
pub mod error;

// Re-export all public types
pub use calendar::*;
pub use datetime::*;
pub use duration::*;
pub use epoch::*;
pub use error::*;
