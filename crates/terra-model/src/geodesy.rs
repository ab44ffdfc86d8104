// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Handoff values for external geodesy libraries
//!
//! The model never inherits from or embeds an external projection type;
//! it exposes [`Globe`], a plain numeric description of the reference
//! shape, which a geodesy/projection library can consume to build its own
//! globe or CRS object.

use crate::ellipsoid::Ellipsoid;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Numeric description of a reference globe
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Globe {
    /// Semi-major axis length in the ellipsoid's unit
    pub semimajor_axis: f64,
    /// Flattening; zero for a sphere
    pub flattening: f64,
}

impl Globe {
    /// Derive the globe parameters from an ellipsoid's preserved literals
    pub fn from_ellipsoid(ellipsoid: &Ellipsoid) -> Result<Self, ModelError> {
        Ok(Globe {
            semimajor_axis: ellipsoid.semimajor_axis_value()?,
            flattening: ellipsoid.flattening()?,
        })
    }

    /// Semi-minor axis implied by the flattening
    pub fn semiminor_axis(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.flattening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    #[test]
    fn test_from_wgs84() {
        let e = Ellipsoid::new(
            "WGS 84",
            "6378137",
            "298.257223563",
            Some(Unit::length("metre", "1.0")),
        );
        let globe = Globe::from_ellipsoid(&e).unwrap();
        assert_eq!(globe.semimajor_axis, 6_378_137.0);
        assert!((globe.semiminor_axis() - 6_356_752.314245).abs() < 1e-6);
    }

    #[test]
    fn test_sphere() {
        let e = Ellipsoid::new("sphere", "6371000", "0", None);
        let globe = Globe::from_ellipsoid(&e).unwrap();
        assert_eq!(globe.flattening, 0.0);
        assert_eq!(globe.semiminor_axis(), globe.semimajor_axis);
    }
}
