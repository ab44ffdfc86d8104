// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for CRS modelling and WKT parsing

use crate::crs::CrsKind;
use crate::csystem::CsType;
use terra_time::TimeError;
use thiserror::Error;

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing WKT CRS text
#[derive(Error, Debug)]
pub enum ParseError {
    /// Outer envelope or required sub-clause not found
    ///
    /// Strict mode aggregates every structural complaint before failing.
    #[error("structural parse failure: {}", messages.join("; "))]
    Structure { messages: Vec<String> },

    /// Top-level keyword not recognised by any registered CRS variant
    #[error("unsupported CRS keyword {0:?}")]
    UnsupportedCrs(String),

    /// Time origin or offset decoding failure
    #[error(transparent)]
    Time(#[from] TimeError),
}

impl ParseError {
    /// Create a structural error from a single message
    pub fn structure(msg: impl Into<String>) -> Self {
        ParseError::Structure {
            messages: vec![msg.into()],
        }
    }
}

/// A single validation violation
///
/// Validation accumulates violations rather than failing fast; callers
/// decide whether any are fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// Axis count differs from the declared dimension
    #[error("coordinate system declares dimension {dimension} but defines {axes} axes")]
    AxisCountMismatch { dimension: usize, axes: usize },

    /// Coordinate system type or dimension not permitted for the CRS kind
    #[error("coordinate system {cstype}[{dimension}] is not permitted for a {kind} CRS")]
    CsTypeNotAllowed {
        cstype: CsType,
        dimension: usize,
        kind: CrsKind,
    },

    /// Shared coordinate-system unit set while axes carry their own units
    #[error("coordinate-system unit conflicts with per-axis units")]
    UnitConflict,

    /// Axis defines neither a name nor an abbreviation
    #[error("axis must define a name or an abbreviation")]
    UnnamedAxis,
}

/// Errors raised by model-level operations outside parsing
#[derive(Error, Debug)]
pub enum ModelError {
    /// The CRS variant has no meaningful geodesy/projection object
    #[error("no geodesy object exists for a {kind} CRS")]
    NoGeodesyObject { kind: CrsKind },

    /// A branch required by the operation is absent from the CRS
    #[error("CRS is missing its {0}")]
    IncompleteCrs(&'static str),

    /// Text is not one of the fixed coordinate system type names
    #[error("{0:?} is not a valid coordinate system type")]
    UnknownCsType(String),

    /// Unit name outside the allowed set for its unit kind
    #[error("{0:?} is not an allowed unit name")]
    InvalidUnitName(String),

    /// A preserved numeric literal does not convert to a number
    #[error("{field} literal {text:?} is not numeric")]
    BadNumericLiteral { field: &'static str, text: String },

    /// Calendar or timestamp failure from the time engine
    #[error(transparent)]
    Time(#[from] TimeError),
}
