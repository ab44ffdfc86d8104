// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Epoch offset decoding
//!
//! An [`EpochDateTimes`] pairs a numeric offset (or array of offsets) and
//! its [`OffsetUnit`] with an epoch [`DateTime`]. Decoding converts each
//! offset to seconds, applies it to the epoch through the epoch's
//! calendar, and renders ISO-8601-like timestamp strings.

use crate::datetime::{DateTime, TimeDelta};
use crate::error::TimeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit a numeric offset-from-epoch is expressed in
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl OffsetUnit {
    /// Scale factor to seconds
    pub fn seconds(&self) -> f64 {
        match self {
            OffsetUnit::Second => 1.0,
            OffsetUnit::Minute => 60.0,
            OffsetUnit::Hour => 3600.0,
            OffsetUnit::Day => 86_400.0,
        }
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            OffsetUnit::Second => "second",
            OffsetUnit::Minute => "minute",
            OffsetUnit::Hour => "hour",
            OffsetUnit::Day => "day",
        }
    }
}

impl FromStr for OffsetUnit {
    type Err = TimeError;

    /// Accepts singular and plural lowercase names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "second" | "seconds" => Ok(OffsetUnit::Second),
            "minute" | "minutes" => Ok(OffsetUnit::Minute),
            "hour" | "hours" => Ok(OffsetUnit::Hour),
            "day" | "days" => Ok(OffsetUnit::Day),
            _ => Err(TimeError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar offset or a sequence of offsets
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Offsets {
    Scalar(f64),
    Array(Vec<f64>),
}

impl From<f64> for Offsets {
    fn from(value: f64) -> Self {
        Offsets::Scalar(value)
    }
}

impl From<Vec<f64>> for Offsets {
    fn from(values: Vec<f64>) -> Self {
        Offsets::Array(values)
    }
}

impl From<&[f64]> for Offsets {
    fn from(values: &[f64]) -> Self {
        Offsets::Array(values.to_vec())
    }
}

/// Numeric offsets from an epoch instant, decodable to timestamps
///
/// Stringifying renders a scalar bare and an array as a bracketed,
/// comma-separated list.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EpochDateTimes {
    offsets: Offsets,
    unit: OffsetUnit,
    epoch: DateTime,
}

impl EpochDateTimes {
    /// Create from offsets, their unit, and the epoch they count from
    pub fn new(offsets: impl Into<Offsets>, unit: OffsetUnit, epoch: DateTime) -> Self {
        EpochDateTimes {
            offsets: offsets.into(),
            unit,
            epoch,
        }
    }

    /// The offsets as given
    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    /// The offset unit
    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// The epoch instant; its calendar governs all decoding
    pub fn epoch(&self) -> &DateTime {
        &self.epoch
    }

    /// Decode every offset to a timestamp string
    pub fn decode(&self) -> Vec<String> {
        match &self.offsets {
            Offsets::Scalar(v) => vec![self.decode_offset(*v)],
            Offsets::Array(vs) => vs.iter().map(|v| self.decode_offset(*v)).collect(),
        }
    }

    /// Decode a single offset to a timestamp string
    pub fn decode_offset(&self, offset: f64) -> String {
        let delta = TimeDelta::from_seconds_f64(offset * self.unit.seconds());
        (self.epoch.clone() + delta).to_string()
    }
}

impl fmt::Display for EpochDateTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.offsets {
            Offsets::Scalar(v) => f.write_str(&self.decode_offset(*v)),
            Offsets::Array(vs) => {
                f.write_str("[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&self.decode_offset(*v))?;
                }
                f.write_str("]")
            }
        }
    }
}
