//! The `OutputWriter` trait implemented by all backend writers.

use ct_layers::{ControlPanel, LayerSet};

use crate::OutputResult;

/// Trait implemented by the CSV and JSON writers.
pub trait OutputWriter {
    /// Write every layer of `layers` with its geometry and style.
    fn write_layers(&mut self, layers: &LayerSet) -> OutputResult<()>;

    /// Write every menu entry and interval step with its visible layer ids.
    fn write_controls(&mut self, panel: &ControlPanel) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
