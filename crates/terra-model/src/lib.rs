// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Terra-Model - Coordinate reference system object model
//!
//! This crate defines the entities of an ISO-19162-style Well-Known-Text
//! CRS description - units, axes, coordinate systems, ellipsoids, datums
//! and the CRS variants themselves - together with their canonical WKT
//! serialization and accumulated validation.
//!
//! The model owns the textual representation and its validation only;
//! projection mathematics belongs to an external geodesy library, reached
//! through the [`Globe`] handoff value.
//!
//! # Example
//!
//! ```
//! use terra_model::{Axis, CSystem, CsType, Ellipsoid, GeodeticCrs, GeodeticDatum, ToWkt, Unit};
//!
//! let metre = Unit::length("metre", "1.0");
//! let ellipsoid = Ellipsoid::new("WGS 84", "6378137", "298.257223563", Some(metre.clone()));
//! let datum = GeodeticDatum::new("World Geodetic System 1984", Some(ellipsoid));
//! let axis = Axis::new("ellipsoidal height", "h", "up", Some(metre));
//! let cs = CSystem::new(CsType::Ellipsoidal, 3, vec![axis.clone(), axis.clone(), axis]);
//! let crs = GeodeticCrs::new("WGS 84", Some(datum), Some(cs));
//! assert!(crs.to_wkt_strict().starts_with("GEODCRS[\"WGS 84\","));
//! ```

pub mod axis;
pub mod crs;
pub mod csystem;
pub mod datum;
pub mod ellipsoid;
pub mod error;
pub mod geodesy;
pub mod units;
pub mod wkt;

// Re-export all public types
pub use axis::*;
pub use crs::*;
pub use csystem::*;
pub use datum::*;
pub use ellipsoid::*;
pub use error::*;
pub use geodesy::*;
pub use units::*;
pub use wkt::*;
