// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference ellipsoids
//!
//! The semi-major axis and inverse flattening are preserved as the exact
//! literal text from the WKT source, so `ELLIPSOID["WGS 84",6378137,...]`
//! round-trips without numeric reformatting.

use crate::error::ModelError;
use crate::units::Unit;
use serde::{Deserialize, Serialize};

/// The reference shape a geodetic datum is defined against
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Ellipsoid {
    pub name: String,
    /// Semi-major axis length, literal text
    pub semimajor_axis: String,
    /// Inverse flattening, literal text; `0` denotes a sphere
    pub inverse_flattening: String,
    /// Length unit of the semi-major axis
    pub unit: Option<Unit>,
}

impl Ellipsoid {
    /// Create an ellipsoid from literal numeric text
    pub fn new(
        name: impl Into<String>,
        semimajor_axis: impl Into<String>,
        inverse_flattening: impl Into<String>,
        unit: Option<Unit>,
    ) -> Self {
        Ellipsoid {
            name: name.into(),
            semimajor_axis: semimajor_axis.into(),
            inverse_flattening: inverse_flattening.into(),
            unit,
        }
    }

    /// Semi-major axis as a number
    pub fn semimajor_axis_value(&self) -> Result<f64, ModelError> {
        lexical_core::parse(self.semimajor_axis.as_bytes()).map_err(|_| {
            ModelError::BadNumericLiteral {
                field: "semi-major axis",
                text: self.semimajor_axis.clone(),
            }
        })
    }

    /// Inverse flattening as a number
    pub fn inverse_flattening_value(&self) -> Result<f64, ModelError> {
        lexical_core::parse(self.inverse_flattening.as_bytes()).map_err(|_| {
            ModelError::BadNumericLiteral {
                field: "inverse flattening",
                text: self.inverse_flattening.clone(),
            }
        })
    }

    /// Derived flattening: zero for a sphere, else the reciprocal of the
    /// inverse flattening
    pub fn flattening(&self) -> Result<f64, ModelError> {
        let inverse = self.inverse_flattening_value()?;
        if inverse == 0.0 {
            Ok(0.0)
        } else {
            Ok(1.0 / inverse)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wgs84() -> Ellipsoid {
        Ellipsoid::new(
            "WGS 84",
            "6378137",
            "298.257223563",
            Some(Unit::length("metre", "1.0")),
        )
    }

    #[test]
    fn test_literals_preserved() {
        let e = wgs84();
        assert_eq!(e.semimajor_axis, "6378137");
        assert_eq!(e.inverse_flattening, "298.257223563");
    }

    #[test]
    fn test_numeric_values() {
        let e = wgs84();
        assert_eq!(e.semimajor_axis_value().unwrap(), 6_378_137.0);
        let f = e.flattening().unwrap();
        assert!((f - 1.0 / 298.257223563).abs() < 1e-15);
    }

    #[test]
    fn test_sphere_flattening_is_zero() {
        let e = Ellipsoid::new("sphere", "6371000", "0", None);
        assert_eq!(e.flattening().unwrap(), 0.0);
    }

    #[test]
    fn test_bad_literal_reported() {
        let e = Ellipsoid::new("odd", "not-a-number", "0", None);
        assert!(matches!(
            e.semimajor_axis_value(),
            Err(ModelError::BadNumericLiteral { .. })
        ));
    }
}
