//! The per-record join and the `Reconstructor` that drives it.
//!
//! ```text
//! samples ─► filter ─► SampleIndex::build   (one-time barrier)
//! records ─► filter ─► par/seq map(reconstruct_trip) ─► collect ─► drop empties
//! ```
//!
//! Each record only reads its own participant's slice, so the map phase
//! shares nothing mutable.  With the `parallel` Cargo feature it runs on
//! Rayon; indexed `collect` keeps record order either way.

use ct_core::{AnalysisConfig, LocationSample, TravelRecord};

use crate::{
    DayNight, ReconstructFilter, SampleIndex, TimeOfDayClassifier, TrajectoryResult, TripPoint,
    TripSegment,
};

// ── Single record ─────────────────────────────────────────────────────────────

/// What happened to one travel record.
#[derive(Clone, Debug, PartialEq)]
pub enum TripOutcome {
    Matched(TripSegment),
    /// The participant has samples, none inside the window.
    Empty,
    /// The participant has no samples at all.
    MissingParticipant,
}

/// Join one travel record against the index.
pub fn reconstruct_trip<C: TimeOfDayClassifier + ?Sized>(
    record:     &TravelRecord,
    index:      &SampleIndex,
    classifier: &C,
) -> TripOutcome {
    let Some(window) = index.window(record.participant_id, record.start, record.end) else {
        return TripOutcome::MissingParticipant;
    };
    if window.is_empty() {
        return TripOutcome::Empty;
    }

    let points = window
        .iter()
        .map(|s| TripPoint {
            timestamp:   s.timestamp,
            location:    s.location,
            time_of_day: classifier.classify(s.timestamp),
            day:         s.timestamp.weekday(),
        })
        .collect();

    TripOutcome::Matched(TripSegment {
        trip_id:        record.trip_id,
        participant_id: record.participant_id,
        purpose:        record.purpose.clone(),
        day:            record.start.weekday(),
        points,
    })
}

// ── Many records ──────────────────────────────────────────────────────────────

/// Join every record, returning one outcome per record in input order.
pub fn reconstruct_outcomes<C: TimeOfDayClassifier + ?Sized>(
    records:    &[TravelRecord],
    index:      &SampleIndex,
    classifier: &C,
) -> Vec<TripOutcome> {
    #[cfg(not(feature = "parallel"))]
    {
        records
            .iter()
            .map(|r| reconstruct_trip(r, index, classifier))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        records
            .par_iter()
            .map(|r| reconstruct_trip(r, index, classifier))
            .collect()
    }
}

/// Join every record and keep the non-empty segments.
///
/// Records whose participant is absent from `index`, or whose window holds
/// no samples, contribute nothing.  An empty `records` slice yields an
/// empty result.
pub fn reconstruct<C: TimeOfDayClassifier + ?Sized>(
    records:    &[TravelRecord],
    index:      &SampleIndex,
    classifier: &C,
) -> Vec<TripSegment> {
    reconstruct_outcomes(records, index, classifier)
        .into_iter()
        .filter_map(|o| match o {
            TripOutcome::Matched(seg) => Some(seg),
            _ => None,
        })
        .collect()
}

// ── Reconstructor ─────────────────────────────────────────────────────────────

/// Counts describing one reconstruction run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconstructStats {
    /// Records passed in.
    pub records_in:          usize,
    /// Records surviving the day/participant/purpose filters.
    pub records_considered:  usize,
    /// Records that produced a segment.
    pub matched:             usize,
    /// Records whose window held no samples.
    pub empty:               usize,
    /// Records whose participant had no samples.
    pub missing_participant: usize,
    /// Samples indexed after filtering.
    pub samples_indexed:     usize,
    /// Points across all emitted segments.
    pub points:              usize,
}

/// Output of [`Reconstructor::run`].
#[derive(Debug, Default)]
pub struct Reconstruction {
    pub segments: Vec<TripSegment>,
    pub stats:    ReconstructStats,
}

/// Config-driven reconstruction: filters, index build, and the join.
pub struct Reconstructor {
    filter:      ReconstructFilter,
    classifier:  DayNight,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    num_threads: Option<usize>,
}

impl Reconstructor {
    /// Validate `config` and capture what the run needs from it.
    pub fn new(config: &AnalysisConfig) -> TrajectoryResult<Self> {
        config.validate()?;
        Ok(Self {
            filter:      ReconstructFilter::from_config(config),
            classifier:  DayNight::from_config(config),
            num_threads: config.num_threads,
        })
    }

    /// Replace the config-derived filter.
    pub fn with_filter(mut self, filter: ReconstructFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> &ReconstructFilter {
        &self.filter
    }

    /// Filter, index, and join.
    pub fn run(
        &self,
        records: Vec<TravelRecord>,
        samples: Vec<LocationSample>,
    ) -> TrajectoryResult<Reconstruction> {
        let records_in = records.len();
        let records = self.filter.apply_records(records);
        let index = SampleIndex::build(samples.into_iter().filter(|s| self.filter.keep_sample(s)));
        log::debug!(
            "indexed {} samples for {} participants",
            index.len(),
            index.participant_count()
        );

        let outcomes = self.join(&records, &index)?;

        let mut stats = ReconstructStats {
            records_in,
            records_considered: records.len(),
            samples_indexed:    index.len(),
            ..Default::default()
        };
        let mut segments = Vec::new();
        for outcome in outcomes {
            match outcome {
                TripOutcome::Matched(seg) => {
                    stats.matched += 1;
                    stats.points += seg.len();
                    segments.push(seg);
                }
                TripOutcome::Empty => stats.empty += 1,
                TripOutcome::MissingParticipant => stats.missing_participant += 1,
            }
        }

        log::info!(
            "reconstructed {} trips ({} points) from {} of {} records; {} empty, {} without samples",
            stats.matched,
            stats.points,
            stats.records_considered,
            stats.records_in,
            stats.empty,
            stats.missing_participant
        );
        Ok(Reconstruction { segments, stats })
    }

    #[cfg(not(feature = "parallel"))]
    fn join(&self, records: &[TravelRecord], index: &SampleIndex) -> TrajectoryResult<Vec<TripOutcome>> {
        Ok(reconstruct_outcomes(records, index, &self.classifier))
    }

    #[cfg(feature = "parallel")]
    fn join(&self, records: &[TravelRecord], index: &SampleIndex) -> TrajectoryResult<Vec<TripOutcome>> {
        match self.num_threads {
            None => Ok(reconstruct_outcomes(records, index, &self.classifier)),
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| crate::TrajectoryError::ThreadPool(e.to_string()))?;
                Ok(pool.install(|| reconstruct_outcomes(records, index, &self.classifier)))
            }
        }
    }
}
