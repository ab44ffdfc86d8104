// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WKT serialization
//!
//! Every entity writes its canonical bracketed form through [`ToWkt`].
//! The strict style produces the single-line grammar-comparison form with
//! no whitespace outside quoted names; the indented style nests children
//! one level deeper (two spaces per level) with comma-newline joins.
//! Numeric fields are written from their preserved literal text, so a
//! parsed CRS reserializes byte for byte.

use crate::axis::Axis;
use crate::crs::{Crs, GeodeticCrs, TemporalCrs};
use crate::csystem::CSystem;
use crate::datum::{GeodeticDatum, TemporalDatum};
use crate::ellipsoid::Ellipsoid;
use crate::units::Unit;

/// How WKT output is laid out
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WktStyle {
    /// Single line, no insignificant whitespace
    Strict,
    /// Indented at the given level, two spaces per level
    Indented(usize),
}

impl WktStyle {
    /// Indentation for a clause at this level
    fn pad(&self, out: &mut String) {
        if let WktStyle::Indented(level) = self {
            for _ in 0..*level {
                out.push_str("  ");
            }
        }
    }

    /// Separator before a sibling child clause
    fn sep(&self, out: &mut String) {
        out.push(',');
        if matches!(self, WktStyle::Indented(_)) {
            out.push('\n');
        }
    }

    /// Style for nested children
    fn child(&self) -> WktStyle {
        match self {
            WktStyle::Strict => WktStyle::Strict,
            WktStyle::Indented(level) => WktStyle::Indented(level + 1),
        }
    }
}

/// Serialization to the canonical bracketed text notation
pub trait ToWkt {
    /// Append this entity's WKT clause to `out`
    fn write_wkt(&self, out: &mut String, style: WktStyle);

    /// Indented multi-line form starting at the given level
    fn to_wkt(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_wkt(&mut out, WktStyle::Indented(indent));
        out
    }

    /// Single-line canonical form for grammar comparison
    fn to_wkt_strict(&self) -> String {
        let mut out = String::new();
        self.write_wkt(&mut out, WktStyle::Strict);
        out
    }
}

fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    out.push_str(text);
    out.push('"');
}

impl ToWkt for Unit {
    fn write_wkt(&self, out: &mut String, style: WktStyle) {
        style.pad(out);
        out.push_str(self.kind.keyword());
        out.push('[');
        write_quoted(out, &self.name);
        if let Some(scaling) = &self.scaling {
            out.push(',');
            out.push_str(scaling);
        }
        out.push(']');
    }
}

impl ToWkt for Axis {
    fn write_wkt(&self, out: &mut String, style: WktStyle) {
        style.pad(out);
        out.push_str("AXIS[");
        write_quoted(out, &self.name_abbrev());
        out.push(',');
        out.push_str(&self.direction);
        if let Some(unit) = &self.unit {
            out.push(',');
            // Axis units stay inline even in the indented style
            unit.write_wkt(out, WktStyle::Strict);
        }
        out.push(']');
    }
}

impl ToWkt for CSystem {
    fn write_wkt(&self, out: &mut String, style: WktStyle) {
        style.pad(out);
        out.push_str("CS[");
        out.push_str(self.cstype.as_str());
        out.push(',');
        out.push_str(&self.dimension.to_string());
        out.push(']');
        for axis in &self.axes {
            style.sep(out);
            axis.write_wkt(out, style.child());
        }
        if let Some(unit) = &self.unit {
            style.sep(out);
            unit.write_wkt(out, style.child());
        }
    }
}

impl ToWkt for Ellipsoid {
    fn write_wkt(&self, out: &mut String, style: WktStyle) {
        style.pad(out);
        out.push_str("ELLIPSOID[");
        write_quoted(out, &self.name);
        out.push(',');
        out.push_str(&self.semimajor_axis);
        out.push(',');
        out.push_str(&self.inverse_flattening);
        if let Some(unit) = &self.unit {
            style.sep(out);
            unit.write_wkt(out, style.child());
        }
        out.push(']');
    }
}

impl ToWkt for GeodeticDatum {
    fn write_wkt(&self, out: &mut String, style: WktStyle) {
        style.pad(out);
        out.push_str("DATUM[");
        write_quoted(out, &self.name);
        if let Some(ellipsoid) = &self.ellipsoid {
            style.sep(out);
            ellipsoid.write_wkt(out, style.child());
        }
        out.push(']');
    }
}

impl ToWkt for TemporalDatum {
    fn write_wkt(&self, out: &mut String, style: WktStyle) {
        style.pad(out);
        out.push_str("TDATUM[");
        write_quoted(out, &self.name);
        style.sep(out);
        style.child().pad(out);
        out.push_str("TIMEORIGIN[");
        out.push_str(&self.time_origin);
        out.push_str("]]");
    }
}

impl ToWkt for GeodeticCrs {
    fn write_wkt(&self, out: &mut String, style: WktStyle) {
        style.pad(out);
        out.push_str(Self::KEYWORD);
        out.push('[');
        write_quoted(out, &self.name);
        if let Some(datum) = &self.datum {
            style.sep(out);
            datum.write_wkt(out, style.child());
        }
        if let Some(cs) = &self.coord_system {
            style.sep(out);
            cs.write_wkt(out, style.child());
        }
        out.push(']');
    }

    fn to_wkt(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_wkt(&mut out, WktStyle::Indented(indent));
        out.push('\n');
        out
    }
}

impl ToWkt for TemporalCrs {
    fn write_wkt(&self, out: &mut String, style: WktStyle) {
        style.pad(out);
        out.push_str(Self::KEYWORD);
        out.push('[');
        write_quoted(out, &self.name);
        if let Some(datum) = &self.datum {
            style.sep(out);
            datum.write_wkt(out, style.child());
        }
        if let Some(cs) = &self.coord_system {
            style.sep(out);
            cs.write_wkt(out, style.child());
        }
        out.push(']');
    }

    fn to_wkt(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_wkt(&mut out, WktStyle::Indented(indent));
        out.push('\n');
        out
    }
}

impl ToWkt for Crs {
    fn write_wkt(&self, out: &mut String, style: WktStyle) {
        match self {
            Crs::Geodetic(crs) => crs.write_wkt(out, style),
            Crs::Temporal(crs) => crs.write_wkt(out, style),
        }
    }

    fn to_wkt(&self, indent: usize) -> String {
        match self {
            Crs::Geodetic(crs) => crs.to_wkt(indent),
            Crs::Temporal(crs) => crs.to_wkt(indent),
        }
    }
}
