//! Time-of-day classification.

use ct_core::{AnalysisConfig, TimeOfDay, Timestamp};

/// Maps a timestamp to its time-of-day bucket.
///
/// Must be pure: the reconstructor may call it from several threads and in
/// any order.  Any `Fn(Timestamp) -> TimeOfDay + Sync` closure qualifies.
pub trait TimeOfDayClassifier: Sync {
    fn classify(&self, ts: Timestamp) -> TimeOfDay;
}

impl<F> TimeOfDayClassifier for F
where
    F: Fn(Timestamp) -> TimeOfDay + Sync,
{
    fn classify(&self, ts: Timestamp) -> TimeOfDay {
        self(ts)
    }
}

/// `Day` for hour ∈ `[day_start, night_start)`, otherwise `Night`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DayNight {
    pub day_start:   u32,
    pub night_start: u32,
}

impl DayNight {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self { day_start: config.day_start_hour, night_start: config.night_start_hour }
    }
}

impl Default for DayNight {
    fn default() -> Self {
        Self { day_start: 6, night_start: 18 }
    }
}

impl TimeOfDayClassifier for DayNight {
    #[inline]
    fn classify(&self, ts: Timestamp) -> TimeOfDay {
        TimeOfDay::classify(ts.hour(), self.day_start, self.night_start)
    }
}
