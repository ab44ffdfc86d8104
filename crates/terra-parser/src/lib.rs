// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WKT CRS parser
//!
//! Parses ISO 19162 bracketed text into `terra-model` CRS values:
//!
//! - [`tokenizer`]: nom combinators producing a token tree
//! - [`decoder`]: token tree to model, accumulating complaints
//!
//! Lenient parsing (the default) accepts structurally damaged input and
//! leaves missing branches as `None`; strict parsing reports every
//! complaint at once. A parsed CRS reserializes byte for byte because the
//! model keeps numeric fields as literal text.
//!
//! ```
//! use terra_model::ToWkt;
//! use terra_parser::parse_wktcrs;
//!
//! let wkt = "GEODCRS[\"WGS 84\",\
//!            DATUM[\"World Geodetic System 1984\",\
//!            ELLIPSOID[\"WGS 84\",6378137,298.257223563,\
//!            LENGTHUNIT[\"metre\",1.0]]],\
//!            CS[ellipsoidal,2],\
//!            AXIS[\"(lat)\",north,ANGLEUNIT[\"degree\",0.0174532925199433]],\
//!            AXIS[\"(lon)\",east,ANGLEUNIT[\"degree\",0.0174532925199433]]]";
//! let crs = parse_wktcrs(wkt, true).unwrap();
//! assert_eq!(crs.name(), "WGS 84");
//! assert_eq!(crs.to_wkt_strict(), wkt);
//! ```

pub mod decoder;
pub mod tokenizer;

pub use decoder::Complaints;
pub use tokenizer::{tokenize, Node, Token};

use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use terra_model::{Crs, CrsKind, GeodeticCrs, ParseError, Result, TemporalCrs};

/// WKT CRS parser with a configurable strictness policy
#[derive(Clone, Copy, Debug, Default)]
pub struct CrsParser {
    /// Fail on any structural complaint instead of keeping a partial model
    pub strict: bool,
}

impl CrsParser {
    /// Lenient parser: damaged branches decode to `None`
    pub fn new() -> Self {
        CrsParser::default()
    }

    /// Strict parser: every complaint is collected and reported at once
    pub fn strict() -> Self {
        CrsParser { strict: true }
    }

    /// Top-level keywords and the CRS kind each one opens, built once
    fn keywords() -> &'static FxHashMap<&'static str, CrsKind> {
        static KEYWORDS: OnceLock<FxHashMap<&'static str, CrsKind>> = OnceLock::new();
        KEYWORDS.get_or_init(|| {
            let mut map = FxHashMap::default();
            map.insert(GeodeticCrs::KEYWORD, CrsKind::Geodetic);
            map.insert(GeodeticCrs::KEYWORD_LONG, CrsKind::Geodetic);
            map.insert(TemporalCrs::KEYWORD, CrsKind::Temporal);
            map
        })
    }

    /// Parse one complete WKT CRS string
    pub fn parse(&self, input: &str) -> Result<Crs> {
        let root = tokenize(input)?;
        let kind = Self::keywords()
            .get(root.keyword)
            .copied()
            .ok_or_else(|| ParseError::UnsupportedCrs(root.keyword.to_string()))?;
        let mut complaints = Complaints::new();
        let crs = match kind {
            CrsKind::Geodetic => Crs::Geodetic(decoder::decode_geodetic_crs(&root, &mut complaints)),
            CrsKind::Temporal => Crs::Temporal(decoder::decode_temporal_crs(&root, &mut complaints)),
        };
        if self.strict && !complaints.is_empty() {
            return Err(complaints.into_error());
        }
        Ok(crs)
    }
}

/// Parse one complete WKT CRS string
pub fn parse_wktcrs(input: &str, strict: bool) -> Result<Crs> {
    CrsParser { strict }.parse(input)
}
