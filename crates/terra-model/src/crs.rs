// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate reference systems
//!
//! A CRS is a named datum plus a coordinate system. The two supported
//! variants are [`GeodeticCrs`] and [`TemporalCrs`]; each exclusively owns
//! its datum and coordinate system subtrees, and the datum type is fixed
//! by the variant, so a geodetic CRS cannot carry a temporal datum by
//! construction.

use crate::csystem::CSystem;
use crate::datum::{GeodeticDatum, TemporalDatum};
use crate::error::{ModelError, Violation};
use crate::geodesy::Globe;
use serde::{Deserialize, Serialize};
use std::fmt;
use terra_time::{DateTime, EpochDateTimes, Offsets, OffsetUnit};

/// The supported CRS variants
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CrsKind {
    Geodetic,
    Temporal,
}

impl fmt::Display for CrsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrsKind::Geodetic => f.write_str("geodetic"),
            CrsKind::Temporal => f.write_str("temporal"),
        }
    }
}

/// A geodetic coordinate reference system
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GeodeticCrs {
    pub name: String,
    pub datum: Option<GeodeticDatum>,
    pub coord_system: Option<CSystem>,
}

impl GeodeticCrs {
    /// Canonical serialization keyword
    pub const KEYWORD: &'static str = "GEODCRS";
    /// Long-form keyword accepted on input
    pub const KEYWORD_LONG: &'static str = "GEODETICCRS";

    /// Create a geodetic CRS
    pub fn new(
        name: impl Into<String>,
        datum: Option<GeodeticDatum>,
        coord_system: Option<CSystem>,
    ) -> Self {
        GeodeticCrs {
            name: name.into(),
            datum,
            coord_system,
        }
    }

    /// Accumulated coordinate-system violations for the geodetic kind
    pub fn validate(&self) -> Vec<Violation> {
        match &self.coord_system {
            Some(cs) => cs.validate_for(CrsKind::Geodetic),
            None => Vec::new(),
        }
    }

    /// The geodesy handoff value for the datum's ellipsoid
    pub fn globe(&self) -> Result<Globe, ModelError> {
        let datum = self
            .datum
            .as_ref()
            .ok_or(ModelError::IncompleteCrs("datum"))?;
        let ellipsoid = datum
            .ellipsoid
            .as_ref()
            .ok_or(ModelError::IncompleteCrs("ellipsoid"))?;
        Globe::from_ellipsoid(ellipsoid)
    }
}

/// A temporal coordinate reference system
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TemporalCrs {
    pub name: String,
    pub datum: Option<TemporalDatum>,
    pub coord_system: Option<CSystem>,
}

impl TemporalCrs {
    /// Canonical serialization keyword
    pub const KEYWORD: &'static str = "TIMECRS";

    /// Create a temporal CRS
    pub fn new(
        name: impl Into<String>,
        datum: Option<TemporalDatum>,
        coord_system: Option<CSystem>,
    ) -> Self {
        TemporalCrs {
            name: name.into(),
            datum,
            coord_system,
        }
    }

    /// Accumulated coordinate-system violations for the temporal kind
    pub fn validate(&self) -> Vec<Violation> {
        match &self.coord_system {
            Some(cs) => cs.validate_for(CrsKind::Temporal),
            None => Vec::new(),
        }
    }

    /// The epoch instant declared by the datum's time origin
    pub fn epoch(&self) -> Result<DateTime, ModelError> {
        let datum = self
            .datum
            .as_ref()
            .ok_or(ModelError::IncompleteCrs("datum"))?;
        Ok(datum.time_origin_datetime()?)
    }

    /// The offset unit declared by the coordinate system
    pub fn offset_unit(&self) -> Result<OffsetUnit, ModelError> {
        let cs = self
            .coord_system
            .as_ref()
            .ok_or(ModelError::IncompleteCrs("coordinate system"))?;
        let unit = cs
            .effective_unit()
            .ok_or(ModelError::IncompleteCrs("time unit"))?;
        Ok(unit.name.parse::<OffsetUnit>()?)
    }

    /// Decode numeric coordinate values into epoch timestamps
    ///
    /// The single point where the CRS model and the calendar engine
    /// compose: the coordinate system supplies the unit, the datum
    /// supplies the epoch.
    pub fn epoch_datetimes(&self, offsets: impl Into<Offsets>) -> Result<EpochDateTimes, ModelError> {
        Ok(EpochDateTimes::new(
            offsets,
            self.offset_unit()?,
            self.epoch()?,
        ))
    }

    /// Timestamp strings for a sequence of coordinate values, rendered as
    /// a bracketed list
    pub fn datetime_strings(&self, values: &[f64]) -> Result<String, ModelError> {
        Ok(self.epoch_datetimes(values)?.to_string())
    }

    /// Timestamp string for a single coordinate value
    pub fn datetime_string(&self, value: f64) -> Result<String, ModelError> {
        Ok(self.epoch_datetimes(value)?.to_string())
    }
}

/// A coordinate reference system of any supported kind
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Crs {
    Geodetic(GeodeticCrs),
    Temporal(TemporalCrs),
}

impl Crs {
    /// The CRS name
    pub fn name(&self) -> &str {
        match self {
            Crs::Geodetic(crs) => &crs.name,
            Crs::Temporal(crs) => &crs.name,
        }
    }

    /// Which variant this is
    pub fn kind(&self) -> CrsKind {
        match self {
            Crs::Geodetic(_) => CrsKind::Geodetic,
            Crs::Temporal(_) => CrsKind::Temporal,
        }
    }

    /// The coordinate system, when present
    pub fn coord_system(&self) -> Option<&CSystem> {
        match self {
            Crs::Geodetic(crs) => crs.coord_system.as_ref(),
            Crs::Temporal(crs) => crs.coord_system.as_ref(),
        }
    }

    /// Accumulated violations for the variant's validation table
    pub fn validate(&self) -> Vec<Violation> {
        match self {
            Crs::Geodetic(crs) => crs.validate(),
            Crs::Temporal(crs) => crs.validate(),
        }
    }

    /// Hand the datum to an external geodesy/projection library
    ///
    /// Only geodetic CRSs have a meaningful projection object; requesting
    /// one from any other variant is a [`ModelError::NoGeodesyObject`].
    pub fn globe(&self) -> Result<Globe, ModelError> {
        match self {
            Crs::Geodetic(crs) => crs.globe(),
            Crs::Temporal(_) => Err(ModelError::NoGeodesyObject {
                kind: self.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::csystem::CsType;
    use crate::units::Unit;

    fn gps_time() -> TemporalCrs {
        let cs = CSystem::new(
            CsType::Temporal,
            1,
            vec![Axis::new("time", "", "future", None)],
        )
        .with_unit(Unit::time("day", "86400.0"));
        TemporalCrs::new(
            "GPS Time",
            Some(TemporalDatum::new("Time origin", "2001-08-07T00:00:00.0Z")),
            Some(cs),
        )
    }

    #[test]
    fn test_datetime_strings_day_unit() {
        let crs = gps_time();
        assert_eq!(
            crs.datetime_strings(&[3683.0]).unwrap(),
            "[2011-09-07T00:00:00]"
        );
    }

    #[test]
    fn test_datetime_string_scalar() {
        let crs = gps_time();
        assert_eq!(crs.datetime_string(3683.0).unwrap(), "2011-09-07T00:00:00");
    }

    #[test]
    fn test_validation_clean() {
        assert!(gps_time().validate().is_empty());
    }

    #[test]
    fn test_missing_datum_reported() {
        let mut crs = gps_time();
        crs.datum = None;
        assert!(matches!(
            crs.datetime_string(0.0),
            Err(ModelError::IncompleteCrs("datum"))
        ));
    }

    #[test]
    fn test_no_globe_for_temporal() {
        let crs = Crs::Temporal(gps_time());
        assert!(matches!(
            crs.globe(),
            Err(ModelError::NoGeodesyObject {
                kind: CrsKind::Temporal
            })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let crs = Crs::Temporal(gps_time());
        let json = serde_json::to_string(&crs).unwrap();
        let back: Crs = serde_json::from_str(&json).unwrap();
        assert_eq!(crs, back);
    }
}
