// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate axes
//!
//! An [`Axis`] defines the meaning of one coordinate: a name and/or
//! abbreviation, a direction keyword (north, east, up, future, ...) and an
//! optional unit. In WKT the name and abbreviation share one quoted field,
//! with the abbreviation parenthesized.

use crate::units::Unit;
use serde::{Deserialize, Serialize};

/// The definition of meaning for one set of coordinate values
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Axis {
    pub name: String,
    pub abbreviation: String,
    pub direction: String,
    pub unit: Option<Unit>,
}

impl Axis {
    /// Create an axis
    ///
    /// At least one of `name` and `abbreviation` should be non-empty;
    /// [`crate::CSystem::validate`] reports an axis where both are missing.
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        direction: impl Into<String>,
        unit: Option<Unit>,
    ) -> Self {
        Axis {
            name: name.into(),
            abbreviation: abbreviation.into(),
            direction: direction.into(),
            unit,
        }
    }

    /// Whether the axis carries a name or an abbreviation
    pub fn is_named(&self) -> bool {
        !self.name.is_empty() || !self.abbreviation.is_empty()
    }

    /// The combined quoted field: `name (abbrev)`, `name` or `(abbrev)`
    pub fn name_abbrev(&self) -> String {
        match (self.name.is_empty(), self.abbreviation.is_empty()) {
            (false, false) => format!("{} ({})", self.name, self.abbreviation),
            (false, true) => self.name.clone(),
            (true, false) => format!("({})", self.abbreviation),
            (true, true) => String::new(),
        }
    }

    /// Split a combined quoted field back into name and abbreviation
    pub fn split_name_abbrev(text: &str) -> (String, String) {
        let text = text.trim();
        if let Some(stripped) = text.strip_suffix(')') {
            if let Some((name, abbrev)) = stripped.rsplit_once('(') {
                return (name.trim_end().to_string(), abbrev.to_string());
            }
        }
        (text.to_string(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_abbrev_forms() {
        let abbrev_only = Axis::new("", "lat", "north", None);
        assert_eq!(abbrev_only.name_abbrev(), "(lat)");

        let name_only = Axis::new("time", "", "future", None);
        assert_eq!(name_only.name_abbrev(), "time");

        let both = Axis::new("ellipsoidal height", "h", "up", None);
        assert_eq!(both.name_abbrev(), "ellipsoidal height (h)");
    }

    #[test]
    fn test_split_name_abbrev() {
        assert_eq!(
            Axis::split_name_abbrev("(lat)"),
            ("".to_string(), "lat".to_string())
        );
        assert_eq!(
            Axis::split_name_abbrev("ellipsoidal height (h)"),
            ("ellipsoidal height".to_string(), "h".to_string())
        );
        assert_eq!(
            Axis::split_name_abbrev("time"),
            ("time".to_string(), "".to_string())
        );
    }

    #[test]
    fn test_split_inverts_composition() {
        for axis in [
            Axis::new("", "lon", "east", None),
            Axis::new("time", "", "future", None),
            Axis::new("ellipsoidal height", "h", "up", None),
        ] {
            let (name, abbrev) = Axis::split_name_abbrev(&axis.name_abbrev());
            assert_eq!(name, axis.name);
            assert_eq!(abbrev, axis.abbreviation);
        }
    }

    #[test]
    fn test_is_named() {
        assert!(Axis::new("", "lat", "north", None).is_named());
        assert!(!Axis::new("", "", "north", None).is_named());
    }
}
