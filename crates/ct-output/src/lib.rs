//! `ct-output` — writers for layer sets, controls, and reconstructed trips.
//!
//! | Backend       | Files created                                                      |
//! |---------------|--------------------------------------------------------------------|
//! | [`CsvWriter`] | `layers.csv`, `layer_points.csv`, `density_cells.csv`, `controls.csv` |
//! | [`JsonWriter`]| `figure.json`                                                      |
//!
//! Both implement [`OutputWriter`].  [`write_trip_segments_csv`] dumps
//! reconstructed trips one point per row.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ct_output::{CsvWriter, OutputWriter};
//!
//! let mut w = CsvWriter::new(Path::new("./output"))?;
//! w.write_layers(&layers)?;
//! w.write_controls(&ControlPanel::for_layers(&layers)?)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;


pub use csv::{write_trip_segments_csv, CsvWriter};
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use row::{CellRow, ControlRow, LayerRow, PointRow, TripPointRow};
pub use writer::OutputWriter;
