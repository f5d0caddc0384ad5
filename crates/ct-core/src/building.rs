//! Building footprints from the city attribute files.

use std::fmt;

use crate::Point;

/// Normalised building category.
///
/// Ordering follows declaration order, with `Other` kinds last by name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingKind {
    Residential,
    Commercial,
    School,
    Other(String),
}

impl BuildingKind {
    /// The three kinds the dataset defines.
    pub const STANDARD: [BuildingKind; 3] =
        [BuildingKind::Commercial, BuildingKind::Residential, BuildingKind::School];

    /// Case-insensitive prefix match, tolerant of the dataset's
    /// "Residental" misspelling.
    pub fn normalize(raw: &str) -> BuildingKind {
        let lower = raw.trim().to_ascii_lowercase();
        if lower.starts_with("resid") {
            BuildingKind::Residential
        } else if lower.starts_with("comm") {
            BuildingKind::Commercial
        } else if lower.starts_with("school") {
            BuildingKind::School
        } else {
            BuildingKind::Other(raw.trim().to_owned())
        }
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildingKind::Residential => f.write_str("Residential"),
            BuildingKind::Commercial  => f.write_str("Commercial"),
            BuildingKind::School      => f.write_str("School"),
            BuildingKind::Other(s)    => f.write_str(s),
        }
    }
}

/// One building footprint.  `footprint` is the exterior ring in file order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub building_id: u32,
    pub kind:        BuildingKind,
    pub footprint:   Vec<Point>,
}
