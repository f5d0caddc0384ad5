//! `ct-journal` — CSV loaders for the city dataset.
//!
//! # Crate layout
//!
//! | Module           | Contents                                               |
//! |------------------|--------------------------------------------------------|
//! | [`journal`]      | `load_travel_journal`, `load_travel_journal_reader`    |
//! | [`activity_log`] | `load_location_log(s)`, `list_numbered_files`          |
//! | [`attributes`]   | `load_base_map`, `load_buildings`                      |
//! | [`report`]       | `RowStats`, `LoadReport<T>`                            |
//! | [`error`]        | `JournalError`, `JournalResult<T>`                     |
//!
//! # Failure model
//!
//! Bad *rows* never fail a load: malformed geometry, timestamps, or modes
//! drop the row and bump [`RowStats::malformed`].  Bad *files* (missing,
//! empty, wrong columns) fail single-file loads with a [`JournalError`]; the
//! multi-file loaders record them in [`LoadReport::failed`] and carry on.

pub mod activity_log;
pub mod attributes;
pub mod error;
pub mod journal;
pub mod report;

mod read;


pub use activity_log::{
    list_numbered_files, load_location_log, load_location_log_reader, load_location_logs,
};
pub use attributes::{
    load_base_map, load_buildings, load_buildings_reader, load_location_points_reader,
};
pub use error::{JournalError, JournalResult};
pub use journal::{load_travel_journal, load_travel_journal_reader};
pub use report::{LoadReport, RowStats};
