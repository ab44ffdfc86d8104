// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Units of measure
//!
//! A [`Unit`] names a scale factor to an SI base quantity. The scaling is
//! stored as the exact literal text from the WKT source so serialization
//! reproduces it byte for byte; [`Unit::scaling_factor`] converts on
//! demand. Temporal units are calendar ticks with no SI scaling at all.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit name set accepted for TEMPORALUNIT
const TEMPORAL_UNIT_NAMES: [&str; 6] =
    ["years", "months", "days", "hours", "minutes", "seconds"];

/// Unit name set accepted for TEMPORALDECIMALUNIT
const TEMPORAL_DECIMAL_UNIT_NAMES: [&str; 2] = ["year", "day"];

/// The WKT tag a unit serializes under
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UnitKind {
    /// UNIT - untyped scale to an SI base
    Generic,
    /// ANGLEUNIT - scale to radians
    Angle,
    /// LENGTHUNIT - scale to metres
    Length,
    /// TIMEUNIT - scale to seconds
    Time,
    /// TEMPORALUNIT - a calendar tick, not convertible to SI
    Temporal,
    /// TEMPORALDECIMALUNIT - a decimal calendar quantity, not convertible
    /// to SI or to other temporal units
    TemporalDecimal,
}

impl UnitKind {
    /// The bracket keyword for this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            UnitKind::Generic => "UNIT",
            UnitKind::Angle => "ANGLEUNIT",
            UnitKind::Length => "LENGTHUNIT",
            UnitKind::Time => "TIMEUNIT",
            UnitKind::Temporal => "TEMPORALUNIT",
            UnitKind::TemporalDecimal => "TEMPORALDECIMALUNIT",
        }
    }

    /// Look up a kind from its bracket keyword
    pub fn from_keyword(keyword: &str) -> Option<UnitKind> {
        match keyword {
            "UNIT" => Some(UnitKind::Generic),
            "ANGLEUNIT" => Some(UnitKind::Angle),
            "LENGTHUNIT" => Some(UnitKind::Length),
            "TIMEUNIT" => Some(UnitKind::Time),
            "TEMPORALUNIT" => Some(UnitKind::Temporal),
            "TEMPORALDECIMALUNIT" => Some(UnitKind::TemporalDecimal),
            _ => None,
        }
    }
}

/// A named unit of measure
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub name: String,
    /// Scale factor to the SI base, preserved as literal text; `None` for
    /// temporal kinds
    pub scaling: Option<String>,
}

impl Unit {
    /// Create a unit without name validation
    pub fn new(kind: UnitKind, name: impl Into<String>, scaling: Option<String>) -> Self {
        Unit {
            kind,
            name: name.into(),
            scaling,
        }
    }

    /// An untyped UNIT
    pub fn base(name: impl Into<String>, scaling: impl Into<String>) -> Self {
        Unit::new(UnitKind::Generic, name, Some(scaling.into()))
    }

    /// An ANGLEUNIT scaling to radians
    pub fn angle(name: impl Into<String>, scaling: impl Into<String>) -> Self {
        Unit::new(UnitKind::Angle, name, Some(scaling.into()))
    }

    /// A LENGTHUNIT scaling to metres
    pub fn length(name: impl Into<String>, scaling: impl Into<String>) -> Self {
        Unit::new(UnitKind::Length, name, Some(scaling.into()))
    }

    /// A TIMEUNIT scaling to seconds
    pub fn time(name: impl Into<String>, scaling: impl Into<String>) -> Self {
        Unit::new(UnitKind::Time, name, Some(scaling.into()))
    }

    /// A TEMPORALUNIT calendar tick
    ///
    /// Only years/months/days/hours/minutes/seconds are allowed; a
    /// singular form is pluralized.
    pub fn temporal(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        let name = if TEMPORAL_UNIT_NAMES.contains(&name.as_str()) {
            name
        } else {
            let plural = format!("{name}s");
            if !TEMPORAL_UNIT_NAMES.contains(&plural.as_str()) {
                return Err(ModelError::InvalidUnitName(name));
            }
            plural
        };
        Ok(Unit::new(UnitKind::Temporal, name, None))
    }

    /// A TEMPORALDECIMALUNIT; only `year` and `day` are allowed
    pub fn temporal_decimal(name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        if !TEMPORAL_DECIMAL_UNIT_NAMES.contains(&name.as_str()) {
            return Err(ModelError::InvalidUnitName(name));
        }
        Ok(Unit::new(UnitKind::TemporalDecimal, name, None))
    }

    /// Floating point value of the scaling literal, when present and numeric
    pub fn scaling_factor(&self) -> Option<f64> {
        let text = self.scaling.as_deref()?;
        lexical_core::parse(text.as_bytes()).ok()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scaling {
            Some(s) => write!(f, "{}[\"{}\",{}]", self.kind.keyword(), self.name, s),
            None => write!(f, "{}[\"{}\"]", self.kind.keyword(), self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_unit_display() {
        let au = Unit::angle("degree", "0.0174532925199433");
        assert_eq!(au.to_string(), "ANGLEUNIT[\"degree\",0.0174532925199433]");
    }

    #[test]
    fn test_scaling_factor() {
        let mu = Unit::length("metre", "1.0");
        assert_eq!(mu.scaling_factor(), Some(1.0));
        let du = Unit::time("day", "86400.0");
        assert_eq!(du.scaling_factor(), Some(86_400.0));
    }

    #[test]
    fn test_scaling_literal_preserved() {
        let mu = Unit::length("metre", "1.0");
        assert_eq!(mu.scaling.as_deref(), Some("1.0"));
    }

    #[test]
    fn test_temporal_unit_pluralizes() {
        let tu = Unit::temporal("day").unwrap();
        assert_eq!(tu.name, "days");
        assert_eq!(tu.scaling, None);
        assert_eq!(tu.to_string(), "TEMPORALUNIT[\"days\"]");
    }

    #[test]
    fn test_temporal_unit_rejects_unknown() {
        assert!(matches!(
            Unit::temporal("fortnight"),
            Err(ModelError::InvalidUnitName(_))
        ));
    }

    #[test]
    fn test_temporal_decimal_unit() {
        assert!(Unit::temporal_decimal("year").is_ok());
        assert!(Unit::temporal_decimal("years").is_err());
    }

    #[test]
    fn test_keyword_round_trip() {
        for kind in [
            UnitKind::Generic,
            UnitKind::Angle,
            UnitKind::Length,
            UnitKind::Time,
            UnitKind::Temporal,
            UnitKind::TemporalDecimal,
        ] {
            assert_eq!(UnitKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(UnitKind::from_keyword("AXIS"), None);
    }
}
