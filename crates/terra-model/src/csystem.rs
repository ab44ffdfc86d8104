// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate systems
//!
//! A [`CSystem`] is an ordered collection of [`Axis`] values under one of
//! the ten fixed coordinate-system types, with a declared dimension.
//! Either every axis carries its own unit, or the coordinate system
//! carries one shared unit; both at once is a violation. Validation
//! accumulates every violation instead of failing on the first.

use crate::axis::Axis;
use crate::crs::CrsKind;
use crate::error::{ModelError, Violation};
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The ten fixed coordinate-system types of ISO 19162
///
/// Only `Cartesian`, `ellipsoidal`, `spherical` and `temporal` are
/// reachable through the supported CRS kinds; the rest are retained for
/// extensibility.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CsType {
    Affine,
    Cartesian,
    Cylindrical,
    Ellipsoidal,
    Linear,
    Parametric,
    Polar,
    Spherical,
    Temporal,
    Vertical,
}

impl CsType {
    /// The name as written in WKT (`Cartesian` keeps its capital)
    pub fn as_str(&self) -> &'static str {
        match self {
            CsType::Affine => "affine",
            CsType::Cartesian => "Cartesian",
            CsType::Cylindrical => "cylindrical",
            CsType::Ellipsoidal => "ellipsoidal",
            CsType::Linear => "linear",
            CsType::Parametric => "parametric",
            CsType::Polar => "polar",
            CsType::Spherical => "spherical",
            CsType::Temporal => "temporal",
            CsType::Vertical => "vertical",
        }
    }
}

impl fmt::Display for CsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CsType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "affine" => Ok(CsType::Affine),
            "Cartesian" => Ok(CsType::Cartesian),
            "cylindrical" => Ok(CsType::Cylindrical),
            "ellipsoidal" => Ok(CsType::Ellipsoidal),
            "linear" => Ok(CsType::Linear),
            "parametric" => Ok(CsType::Parametric),
            "polar" => Ok(CsType::Polar),
            "spherical" => Ok(CsType::Spherical),
            "temporal" => Ok(CsType::Temporal),
            "vertical" => Ok(CsType::Vertical),
            _ => Err(ModelError::UnknownCsType(s.to_string())),
        }
    }
}

/// A coordinate system: basis vectors defining an ordered set of axes
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CSystem {
    pub cstype: CsType,
    /// Degrees of freedom the basis is defined over
    pub dimension: usize,
    pub axes: Vec<Axis>,
    /// Shared unit applied to every axis; exclusive with per-axis units
    pub unit: Option<Unit>,
}

impl CSystem {
    /// Create a coordinate system with per-axis units
    pub fn new(cstype: CsType, dimension: usize, axes: Vec<Axis>) -> Self {
        CSystem {
            cstype,
            dimension,
            axes,
            unit: None,
        }
    }

    /// Attach a shared unit covering all axes
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// The unit governing coordinate values: the shared unit, or the
    /// first per-axis unit
    pub fn effective_unit(&self) -> Option<&Unit> {
        self.unit
            .as_ref()
            .or_else(|| self.axes.iter().find_map(|a| a.unit.as_ref()))
    }

    /// Structural violations, accumulated
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.axes.len() != self.dimension {
            violations.push(Violation::AxisCountMismatch {
                dimension: self.dimension,
                axes: self.axes.len(),
            });
        }
        if self.unit.is_some() && self.axes.iter().any(|a| a.unit.is_some()) {
            violations.push(Violation::UnitConflict);
        }
        for axis in &self.axes {
            if !axis.is_named() {
                violations.push(Violation::UnnamedAxis);
            }
        }
        violations
    }

    /// [`CSystem::validate`] plus the type/dimension table for a CRS kind
    pub fn validate_for(&self, kind: CrsKind) -> Vec<Violation> {
        let mut violations = self.validate();
        let allowed = allowed_types(kind);
        let permitted = allowed
            .iter()
            .any(|(t, dims)| *t == self.cstype && dims.contains(&self.dimension));
        if !permitted {
            violations.push(Violation::CsTypeNotAllowed {
                cstype: self.cstype,
                dimension: self.dimension,
                kind,
            });
        }
        violations
    }
}

/// Coordinate-system types and dimensions each CRS kind permits
fn allowed_types(kind: CrsKind) -> &'static [(CsType, &'static [usize])] {
    match kind {
        CrsKind::Geodetic => &[
            (CsType::Cartesian, &[3]),
            (CsType::Ellipsoidal, &[2, 3]),
            (CsType::Spherical, &[3]),
        ],
        CrsKind::Temporal => &[(CsType::Temporal, &[1])],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lat_lon_axes() -> Vec<Axis> {
        let du = Unit::angle("degree", "0.0174532925199433");
        vec![
            Axis::new("", "lat", "north", Some(du.clone())),
            Axis::new("", "lon", "east", Some(du)),
        ]
    }

    #[test]
    fn test_cstype_round_trip() {
        for cstype in [
            CsType::Affine,
            CsType::Cartesian,
            CsType::Cylindrical,
            CsType::Ellipsoidal,
            CsType::Linear,
            CsType::Parametric,
            CsType::Polar,
            CsType::Spherical,
            CsType::Temporal,
            CsType::Vertical,
        ] {
            assert_eq!(cstype.as_str().parse::<CsType>().unwrap(), cstype);
        }
        assert!("cartesian".parse::<CsType>().is_err());
    }

    #[test]
    fn test_dimension_mismatch_is_single_violation() {
        let cs = CSystem::new(CsType::Ellipsoidal, 3, lat_lon_axes());
        let violations = cs.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0],
            Violation::AxisCountMismatch {
                dimension: 3,
                axes: 2
            }
        );
        assert!(violations[0].to_string().contains("dimension 3"));
    }

    #[test]
    fn test_valid_ellipsoidal_two_axes() {
        let cs = CSystem::new(CsType::Ellipsoidal, 2, lat_lon_axes());
        assert!(cs.validate_for(CrsKind::Geodetic).is_empty());
    }

    #[test]
    fn test_temporal_cs_not_allowed_for_geodetic() {
        let cs = CSystem::new(CsType::Temporal, 1, vec![Axis::new("time", "", "future", None)]);
        let violations = cs.validate_for(CrsKind::Geodetic);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0],
            Violation::CsTypeNotAllowed {
                cstype: CsType::Temporal,
                dimension: 1,
                kind: CrsKind::Geodetic
            }
        ));
    }

    #[test]
    fn test_unit_conflict() {
        let cs = CSystem::new(CsType::Ellipsoidal, 2, lat_lon_axes())
            .with_unit(Unit::angle("degree", "0.0174532925199433"));
        let violations = cs.validate();
        assert!(violations.contains(&Violation::UnitConflict));
    }

    #[test]
    fn test_shared_unit_without_axis_units_is_fine() {
        let axes = vec![Axis::new("time", "", "future", None)];
        let cs = CSystem::new(CsType::Temporal, 1, axes).with_unit(Unit::time("day", "86400.0"));
        assert!(cs.validate_for(CrsKind::Temporal).is_empty());
        assert_eq!(cs.effective_unit().map(|u| u.name.as_str()), Some("day"));
    }

    #[test]
    fn test_unnamed_axis_reported() {
        let cs = CSystem::new(CsType::Temporal, 1, vec![Axis::new("", "", "future", None)]);
        assert!(cs.validate().contains(&Violation::UnnamedAxis));
    }
}
