//! Analysis configuration.
//!
//! One immutable `AnalysisConfig` is built by the application (usually from a
//! JSON file) and handed to every component at construction.  Fields left out
//! of the JSON take their `Default` values.

use chrono::Weekday;

use crate::time::check_bucket_width;
use crate::{ActivityMode, CtError, CtResult, DayOfWeek, ParticipantId, Purpose};

/// Which travel purposes survive filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PurposeFilter {
    /// Keep every purpose.
    All,
    /// Keep only these purposes.
    Named(Vec<Purpose>),
    /// Keep the `n` most frequent purposes among the day-filtered records.
    TopN(usize),
}

/// Top-level analysis configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// Weekdays to keep.  Empty keeps all seven.
    pub day_filter: Vec<DayOfWeek>,

    pub purpose_filter: PurposeFilter,

    /// Participants to keep.  Empty keeps everyone.
    pub participant_filter: Vec<ParticipantId>,

    /// Keep only samples logged in this mode.  `None` keeps all samples.
    pub mode_filter: Option<ActivityMode>,

    /// Heatmap interval width in hours (1–24).
    pub bucket_width_hours: u8,

    /// First hour classified as `Day` (inclusive).
    pub day_start_hour: u32,

    /// First hour classified as `Night` again (exclusive end of `Day`).
    pub night_start_hour: u32,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Heatmap bins per axis.
    pub density_bins: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            day_filter:         vec![DayOfWeek(Weekday::Tue), DayOfWeek(Weekday::Sat)],
            purpose_filter:     PurposeFilter::TopN(3),
            participant_filter: Vec::new(),
            mode_filter:        Some(ActivityMode::Transport),
            bucket_width_hours: 3,
            day_start_hour:     6,
            night_start_hour:   18,
            num_threads:        None,
            density_bins:       100,
        }
    }
}

impl AnalysisConfig {
    /// Check every field for internal consistency.
    pub fn validate(&self) -> CtResult<()> {
        check_bucket_width(self.bucket_width_hours)?;
        if self.day_start_hour >= self.night_start_hour || self.night_start_hour > 24 {
            return Err(CtError::Config(format!(
                "day hours must satisfy day_start < night_start <= 24, got [{}, {})",
                self.day_start_hour, self.night_start_hour
            )));
        }
        if self.density_bins == 0 {
            return Err(CtError::Config("density_bins must be > 0".into()));
        }
        if self.num_threads == Some(0) {
            return Err(CtError::Config("num_threads must be > 0 when set".into()));
        }
        if let PurposeFilter::TopN(0) = self.purpose_filter {
            return Err(CtError::Config("TopN purpose filter needs n > 0".into()));
        }
        Ok(())
    }

    /// Weekdays in effect, Monday-first.  An empty filter expands to all
    /// seven days.
    pub fn days(&self) -> Vec<DayOfWeek> {
        let mut days = if self.day_filter.is_empty() {
            DayOfWeek::ALL.to_vec()
        } else {
            self.day_filter.clone()
        };
        days.sort();
        days.dedup();
        days
    }
}
