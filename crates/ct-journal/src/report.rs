//! Row accounting and multi-file load reports.

use std::fmt;
use std::path::PathBuf;

use crate::JournalError;

/// Per-file row counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RowStats {
    /// Data rows read (header excluded).
    pub read:      usize,
    /// Rows converted into records.
    pub kept:      usize,
    /// Rows dropped for bad geometry, timestamps, ids, or modes.
    pub malformed: usize,
    /// Well-formed rows the loader does not use (e.g. polygons in a point file).
    pub skipped:   usize,
}

impl RowStats {
    pub fn merge(&mut self, other: RowStats) {
        self.read      += other.read;
        self.kept      += other.kept;
        self.malformed += other.malformed;
        self.skipped   += other.skipped;
    }
}

impl fmt::Display for RowStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} read, {} kept, {} malformed, {} skipped",
            self.read, self.kept, self.malformed, self.skipped
        )
    }
}

/// Result of loading several files where individual failures are tolerated.
///
/// `rows` holds everything from the files that loaded; `failed` lists the
/// ones that did not, with the reason.
#[derive(Debug)]
pub struct LoadReport<T> {
    pub rows:   Vec<T>,
    pub stats:  RowStats,
    pub loaded: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, JournalError)>,
}

impl<T> LoadReport<T> {
    pub(crate) fn new() -> Self {
        Self { rows: Vec::new(), stats: RowStats::default(), loaded: Vec::new(), failed: Vec::new() }
    }

    /// `true` when every file failed (or none were given).
    pub fn is_total_failure(&self) -> bool {
        self.loaded.is_empty()
    }
}
