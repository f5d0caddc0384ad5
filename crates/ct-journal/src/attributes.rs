//! City attribute files: base-map locations and building footprints.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ct_core::{Building, BuildingKind, Geometry, Point};

use crate::read::{read_rows, Row};
use crate::{JournalError, JournalResult, LoadReport, RowStats};

// ── Base map ──────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRow {
    location: String,
}

/// Read the `POINT` locations of one attribute file (apartments, pubs,
/// restaurants, …).  Non-point geometries are skipped.
pub fn load_location_points_reader<R: Read>(reader: R) -> JournalResult<(Vec<Point>, RowStats)> {
    read_rows(reader, &["location"], |_, row: LocationRow| match Geometry::parse(&row.location) {
        Ok(Geometry::Point(p)) => Row::Keep(p),
        Ok(Geometry::Polygon(_)) => Row::Skip,
        Err(_) => Row::Malformed,
    })
}

/// Collect static base-map points from several attribute files.
///
/// Files that are missing, empty, or lack a `location` column are reported
/// and skipped.
pub fn load_base_map<P: AsRef<Path>>(paths: &[P]) -> LoadReport<Point> {
    let mut report = LoadReport::new();
    for path in paths {
        let path = path.as_ref();
        let result = std::fs::File::open(path)
            .map_err(JournalError::from)
            .and_then(load_location_points_reader);
        match result {
            Ok((points, stats)) => {
                report.rows.extend(points);
                report.stats.merge(stats);
                report.loaded.push(path.to_path_buf());
            }
            Err(e) => {
                log::warn!("skipping attribute file {}: {e}", path.display());
                report.failed.push((path.to_path_buf(), e));
            }
        }
    }
    log::info!("base map: {} points from {} files", report.rows.len(), report.loaded.len());
    report
}

// ── Buildings ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BuildingRow {
    #[serde(rename = "buildingId")]
    building_id:   u32,
    location:      String,
    #[serde(rename = "buildingType")]
    building_type: String,
}

/// Load building footprints from `Buildings.csv`.
pub fn load_buildings(path: &Path) -> JournalResult<(Vec<Building>, RowStats)> {
    let file = std::fs::File::open(path)?;
    load_buildings_reader(file)
}

/// Like [`load_buildings`] but accepts any `Read` source.
///
/// Rows whose location is not a polygon of at least three vertices are
/// dropped as malformed.
pub fn load_buildings_reader<R: Read>(reader: R) -> JournalResult<(Vec<Building>, RowStats)> {
    read_rows(reader, &["buildingId", "location", "buildingType"], |_, row: BuildingRow| {
        match Geometry::parse(&row.location) {
            Ok(Geometry::Polygon(footprint)) => Row::Keep(Building {
                building_id: row.building_id,
                kind:        BuildingKind::normalize(&row.building_type),
                footprint,
            }),
            _ => Row::Malformed,
        }
    })
}
