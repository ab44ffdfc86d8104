// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Datums - the reference frames CRS variants anchor to
//!
//! A [`GeodeticDatum`] wraps a reference [`Ellipsoid`]; a
//! [`TemporalDatum`] wraps a time origin. The time origin is preserved as
//! the literal text inside `TIMEORIGIN[...]` and parsed to a calendar
//! [`DateTime`] on demand.

use crate::ellipsoid::Ellipsoid;
use serde::{Deserialize, Serialize};
use terra_time::{Calendar, DateTime, TimeError};

/// A geodetic reference frame
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GeodeticDatum {
    pub name: String,
    pub ellipsoid: Option<Ellipsoid>,
}

impl GeodeticDatum {
    /// Create a geodetic datum
    pub fn new(name: impl Into<String>, ellipsoid: Option<Ellipsoid>) -> Self {
        GeodeticDatum {
            name: name.into(),
            ellipsoid,
        }
    }
}

/// A time reference frame
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TemporalDatum {
    pub name: String,
    /// The epoch instant, preserved as literal ISO-8601-like text
    pub time_origin: String,
}

impl TemporalDatum {
    /// Create a temporal datum from a literal time origin
    pub fn new(name: impl Into<String>, time_origin: impl Into<String>) -> Self {
        TemporalDatum {
            name: name.into(),
            time_origin: time_origin.into(),
        }
    }

    /// The time origin as an ISO-Gregorian [`DateTime`]
    pub fn time_origin_datetime(&self) -> Result<DateTime, TimeError> {
        DateTime::parse_iso8601(&self.time_origin, Some(Calendar::iso_gregorian()))
    }
}
