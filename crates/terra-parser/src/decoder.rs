// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Token tree to model decoding
//!
//! Each `decode_*` function fills in what it can and records what it
//! cannot as a complaint. Lenient parsing keeps the partial model with
//! `None` branches; strict parsing turns the accumulated complaints into
//! one structural error.

use crate::tokenizer::{Node, Token};
use terra_model::{
    Axis, CSystem, CsType, Ellipsoid, GeodeticCrs, GeodeticDatum, ParseError, TemporalCrs,
    TemporalDatum, Unit, UnitKind,
};

/// Accumulated structural complaints from one parse
#[derive(Debug, Default)]
pub struct Complaints {
    messages: Vec<String>,
}

impl Complaints {
    pub fn new() -> Self {
        Complaints::default()
    }

    /// Record one complaint
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Convert everything recorded into one structural error
    pub fn into_error(self) -> ParseError {
        ParseError::Structure {
            messages: self.messages,
        }
    }
}

/// The quoted name every CRS and datum clause opens with
fn quoted_name(node: &Node<'_>, complaints: &mut Complaints) -> String {
    match node.quoted_arg(0) {
        Some(name) => name.to_string(),
        None => {
            complaints.push(format!("{} has no quoted name", node.keyword));
            String::new()
        }
    }
}

// ============================================================================
// Leaf Clauses
// ============================================================================

/// Decode any `*UNIT[...]` clause
pub fn decode_unit(node: &Node<'_>, complaints: &mut Complaints) -> Option<Unit> {
    let kind = match UnitKind::from_keyword(node.keyword) {
        Some(kind) => kind,
        None => {
            complaints.push(format!("{} is not a unit keyword", node.keyword));
            return None;
        }
    };
    let name = quoted_name(node, complaints);
    match kind {
        UnitKind::Temporal => match Unit::temporal(name) {
            Ok(unit) => Some(unit),
            Err(err) => {
                complaints.push(err.to_string());
                None
            }
        },
        UnitKind::TemporalDecimal => match Unit::temporal_decimal(name) {
            Ok(unit) => Some(unit),
            Err(err) => {
                complaints.push(err.to_string());
                None
            }
        },
        _ => {
            let scaling = node.atom_arg(1).map(str::to_string);
            if scaling.is_none() {
                complaints.push(format!("{} has no scaling factor", node.keyword));
            }
            Some(Unit::new(kind, name, scaling))
        }
    }
}

/// Decode an `AXIS["name (abbrev)",direction,<unit>]` clause
pub fn decode_axis(node: &Node<'_>, complaints: &mut Complaints) -> Axis {
    let (name, abbreviation) = match node.quoted_arg(0) {
        Some(text) => Axis::split_name_abbrev(text),
        None => {
            complaints.push("AXIS has no quoted name field");
            (String::new(), String::new())
        }
    };
    let direction = match node.atom_arg(1) {
        Some(direction) => direction.to_string(),
        None => {
            complaints.push("AXIS has no direction");
            String::new()
        }
    };
    let unit = node
        .children()
        .find(|child| UnitKind::from_keyword(child.keyword).is_some())
        .and_then(|child| decode_unit(child, complaints));
    Axis::new(name, abbreviation, direction, unit)
}

/// Decode an `ELLIPSOID[...]` clause, literals preserved as written
pub fn decode_ellipsoid(node: &Node<'_>, complaints: &mut Complaints) -> Ellipsoid {
    let name = quoted_name(node, complaints);
    let semimajor_axis = match node.atom_arg(1) {
        Some(text) => text.to_string(),
        None => {
            complaints.push("ELLIPSOID has no semi-major axis");
            String::new()
        }
    };
    let inverse_flattening = match node.atom_arg(2) {
        Some(text) => text.to_string(),
        None => {
            complaints.push("ELLIPSOID has no inverse flattening");
            String::new()
        }
    };
    let unit = node
        .children()
        .find(|child| UnitKind::from_keyword(child.keyword).is_some())
        .and_then(|child| decode_unit(child, complaints));
    Ellipsoid::new(name, semimajor_axis, inverse_flattening, unit)
}

// ============================================================================
// Datums
// ============================================================================

/// Decode a `DATUM[...]` clause
pub fn decode_geodetic_datum(node: &Node<'_>, complaints: &mut Complaints) -> GeodeticDatum {
    let name = quoted_name(node, complaints);
    let ellipsoid = match node.child("ELLIPSOID") {
        Some(child) => Some(decode_ellipsoid(child, complaints)),
        None => {
            complaints.push("DATUM is missing its ELLIPSOID clause");
            None
        }
    };
    GeodeticDatum::new(name, ellipsoid)
}

/// Decode a `TDATUM[...]` clause
///
/// The time origin literal is kept verbatim; it is checked against the
/// timestamp grammar but stored as written either way.
pub fn decode_temporal_datum(node: &Node<'_>, complaints: &mut Complaints) -> TemporalDatum {
    let name = quoted_name(node, complaints);
    let time_origin = match node.child("TIMEORIGIN").and_then(|origin| {
        origin.args.first().and_then(|token| match token {
            Token::Atom(text) | Token::Quoted(text) => Some(*text),
            Token::Node(_) => None,
        })
    }) {
        Some(text) => text.to_string(),
        None => {
            complaints.push("TDATUM is missing its TIMEORIGIN clause");
            String::new()
        }
    };
    let datum = TemporalDatum::new(name, time_origin);
    if !datum.time_origin.is_empty() {
        if let Err(err) = datum.time_origin_datetime() {
            complaints.push(format!("TIMEORIGIN does not parse: {err}"));
        }
    }
    datum
}

// ============================================================================
// Coordinate Systems
// ============================================================================

/// Decode the `CS[...]` clause plus its sibling `AXIS` and unit clauses
///
/// In WKT the axes and the shared unit sit next to `CS`, not inside it,
/// so decoding takes the whole CRS clause.
pub fn decode_csystem(crs_node: &Node<'_>, complaints: &mut Complaints) -> Option<CSystem> {
    let cs_node = match crs_node.child("CS") {
        Some(node) => node,
        None => {
            complaints.push(format!("{} is missing its CS clause", crs_node.keyword));
            return None;
        }
    };

    let cstype = match cs_node.atom_arg(0) {
        Some(text) => match text.parse::<CsType>() {
            Ok(cstype) => cstype,
            Err(err) => {
                complaints.push(err.to_string());
                return None;
            }
        },
        None => {
            complaints.push("CS has no coordinate system type");
            return None;
        }
    };

    let dimension = match cs_node.atom_arg(1) {
        Some(text) => match lexical_core::parse::<u64>(text.as_bytes()) {
            Ok(dimension) => dimension as usize,
            Err(_) => {
                complaints.push(format!("CS dimension {text:?} is not a number"));
                0
            }
        },
        None => {
            complaints.push("CS has no dimension");
            0
        }
    };

    let axes: Vec<Axis> = crs_node
        .children()
        .filter(|child| child.keyword == "AXIS")
        .map(|child| decode_axis(child, complaints))
        .collect();

    let shared_unit = crs_node
        .children()
        .find(|child| UnitKind::from_keyword(child.keyword).is_some())
        .and_then(|child| decode_unit(child, complaints));

    let cs = CSystem::new(cstype, dimension, axes);
    Some(match shared_unit {
        Some(unit) => cs.with_unit(unit),
        None => cs,
    })
}

// ============================================================================
// CRS Roots
// ============================================================================

/// Decode a `GEODCRS[...]` / `GEODETICCRS[...]` clause
pub fn decode_geodetic_crs(root: &Node<'_>, complaints: &mut Complaints) -> GeodeticCrs {
    let name = quoted_name(root, complaints);
    let datum = match root.child("DATUM") {
        Some(node) => Some(decode_geodetic_datum(node, complaints)),
        None => {
            complaints.push(format!("{} is missing its DATUM clause", root.keyword));
            None
        }
    };
    let coord_system = decode_csystem(root, complaints);
    GeodeticCrs::new(name, datum, coord_system)
}

/// Decode a `TIMECRS[...]` clause
pub fn decode_temporal_crs(root: &Node<'_>, complaints: &mut Complaints) -> TemporalCrs {
    let name = quoted_name(root, complaints);
    let datum = match root.child("TDATUM") {
        Some(node) => Some(decode_temporal_datum(node, complaints)),
        None => {
            complaints.push(format!("{} is missing its TDATUM clause", root.keyword));
            None
        }
    };
    let coord_system = decode_csystem(root, complaints);
    TemporalCrs::new(name, datum, coord_system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_decode_length_unit() {
        let root = tokenize("LENGTHUNIT[\"metre\",1.0]").unwrap();
        let mut complaints = Complaints::new();
        let unit = decode_unit(&root, &mut complaints).unwrap();
        assert!(complaints.is_empty());
        assert_eq!(unit, Unit::length("metre", "1.0"));
    }

    #[test]
    fn test_decode_temporal_unit_pluralizes() {
        let root = tokenize("TEMPORALUNIT[\"day\"]").unwrap();
        let mut complaints = Complaints::new();
        let unit = decode_unit(&root, &mut complaints).unwrap();
        assert!(complaints.is_empty());
        assert_eq!(unit.name, "days");
        assert_eq!(unit.scaling, None);
    }

    #[test]
    fn test_decode_unit_without_scaling_complains() {
        let root = tokenize("LENGTHUNIT[\"metre\"]").unwrap();
        let mut complaints = Complaints::new();
        let unit = decode_unit(&root, &mut complaints).unwrap();
        assert!(!complaints.is_empty());
        assert_eq!(unit.scaling, None);
    }

    #[test]
    fn test_decode_axis() {
        let root =
            tokenize("AXIS[\"ellipsoidal height (h)\",up,LENGTHUNIT[\"metre\",1.0]]").unwrap();
        let mut complaints = Complaints::new();
        let axis = decode_axis(&root, &mut complaints);
        assert!(complaints.is_empty());
        assert_eq!(axis.name, "ellipsoidal height");
        assert_eq!(axis.abbreviation, "h");
        assert_eq!(axis.direction, "up");
        assert_eq!(axis.unit.map(|u| u.name), Some("metre".to_string()));
    }

    #[test]
    fn test_decode_ellipsoid_literals_preserved() {
        let root =
            tokenize("ELLIPSOID[\"WGS 84\",6378137,298.257223563,LENGTHUNIT[\"metre\",1.0]]")
                .unwrap();
        let mut complaints = Complaints::new();
        let ellipsoid = decode_ellipsoid(&root, &mut complaints);
        assert!(complaints.is_empty());
        assert_eq!(ellipsoid.semimajor_axis, "6378137");
        assert_eq!(ellipsoid.inverse_flattening, "298.257223563");
    }

    #[test]
    fn test_decode_temporal_datum() {
        let root =
            tokenize("TDATUM[\"Time origin\",TIMEORIGIN[2001-08-07T00:00:00.0Z]]").unwrap();
        let mut complaints = Complaints::new();
        let datum = decode_temporal_datum(&root, &mut complaints);
        assert!(complaints.is_empty());
        assert_eq!(datum.time_origin, "2001-08-07T00:00:00.0Z");
    }

    #[test]
    fn test_decode_temporal_datum_bad_origin_complains() {
        let root = tokenize("TDATUM[\"Time origin\",TIMEORIGIN[eleventy]]").unwrap();
        let mut complaints = Complaints::new();
        let datum = decode_temporal_datum(&root, &mut complaints);
        assert!(!complaints.is_empty());
        // Literal still kept as written
        assert_eq!(datum.time_origin, "eleventy");
    }

    #[test]
    fn test_decode_csystem_with_shared_unit() {
        let root = tokenize(
            "TIMECRS[\"GPS Time\",CS[temporal,1],AXIS[\"time\",future],\
             TIMEUNIT[\"day\",86400.0]]",
        )
        .unwrap();
        let mut complaints = Complaints::new();
        let cs = decode_csystem(&root, &mut complaints).unwrap();
        assert!(complaints.is_empty());
        assert_eq!(cs.cstype, CsType::Temporal);
        assert_eq!(cs.dimension, 1);
        assert_eq!(cs.axes.len(), 1);
        assert_eq!(cs.unit.map(|u| u.name), Some("day".to_string()));
    }

    #[test]
    fn test_missing_cs_complains() {
        let root = tokenize("GEODCRS[\"bare\"]").unwrap();
        let mut complaints = Complaints::new();
        assert!(decode_csystem(&root, &mut complaints).is_none());
        assert!(!complaints.is_empty());
    }

    #[test]
    fn test_unknown_cstype_complains() {
        let root = tokenize("X[CS[cubist,2]]").unwrap();
        let mut complaints = Complaints::new();
        assert!(decode_csystem(&root, &mut complaints).is_none());
        assert!(!complaints.is_empty());
    }
}
