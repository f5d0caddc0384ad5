//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `layers.csv`
//! - `layer_points.csv`
//! - `density_cells.csv`
//! - `controls.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ct_layers::{ControlPanel, LayerSet};
use ct_trajectory::TripSegment;

use crate::row::{cell_rows, control_rows, point_rows, trip_point_rows, LayerRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes layer sets and their controls to CSV files.
pub struct CsvWriter {
    layers:   Writer<File>,
    points:   Writer<File>,
    cells:    Writer<File>,
    controls: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut layers = Writer::from_path(dir.join("layers.csv"))?;
        layers.write_record([
            "layer_id",
            "name",
            "kind",
            "color",
            "width",
            "opacity",
            "initially_visible",
        ])?;

        let mut points = Writer::from_path(dir.join("layer_points.csv"))?;
        points.write_record(["layer_id", "seq", "x", "y"])?;

        let mut cells = Writer::from_path(dir.join("density_cells.csv"))?;
        cells.write_record(["layer_id", "column", "row", "count"])?;

        let mut controls = Writer::from_path(dir.join("controls.csv"))?;
        controls.write_record(["control", "entry", "visible_layer_ids"])?;

        Ok(Self {
            layers,
            points,
            cells,
            controls,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_layers(&mut self, layers: &LayerSet) -> OutputResult<()> {
        for layer in layers {
            let row = LayerRow::from_layer(layer);
            self.layers.write_record(&[
                row.layer_id.to_string(),
                row.name,
                row.kind.to_owned(),
                row.color,
                row.width.to_string(),
                row.opacity.to_string(),
                (row.initially_visible as u8).to_string(),
            ])?;
            for p in point_rows(layer) {
                self.points.write_record(&[
                    p.layer_id.to_string(),
                    p.seq.to_string(),
                    p.x.to_string(),
                    p.y.to_string(),
                ])?;
            }
            for c in cell_rows(layer) {
                self.cells.write_record(&[
                    c.layer_id.to_string(),
                    c.column.to_string(),
                    c.row.to_string(),
                    c.count.to_string(),
                ])?;
            }
        }
        log::debug!("wrote {} layers to CSV", layers.len());
        Ok(())
    }

    fn write_controls(&mut self, panel: &ControlPanel) -> OutputResult<()> {
        for row in control_rows(panel) {
            self.controls.write_record([row.control, row.entry, row.visible_layer_ids])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.layers.flush()?;
        self.points.flush()?;
        self.cells.flush()?;
        self.controls.flush()?;
        Ok(())
    }
}

/// Write every point of `segments` to `path`, one row per point.  Returns
/// the number of rows written.
pub fn write_trip_segments_csv(path: &Path, segments: &[TripSegment]) -> OutputResult<usize> {
    let mut w = Writer::from_path(path)?;
    w.write_record([
        "trip_id",
        "participant_id",
        "purpose",
        "day",
        "time_of_day",
        "timestamp",
        "x",
        "y",
    ])?;
    let mut n = 0;
    for seg in segments {
        for row in trip_point_rows(seg) {
            w.write_record(&[
                row.trip_id.to_string(),
                row.participant_id.to_string(),
                row.purpose,
                row.day,
                row.time_of_day.to_owned(),
                row.timestamp,
                row.x.to_string(),
                row.y.to_string(),
            ])?;
            n += 1;
        }
    }
    w.flush()?;
    log::info!("wrote {n} trip points to {}", path.display());
    Ok(n)
}
