//! Record and sample pre-filters.
//!
//! Applied before the join so the index only holds samples that can
//! contribute to a visible trip.

use std::collections::{BTreeSet, HashMap, HashSet};

use ct_core::{
    ActivityMode, AnalysisConfig, DayOfWeek, LocationSample, ParticipantId, Purpose,
    PurposeFilter, TravelRecord,
};

/// Restricts which travel records and location samples take part in a
/// reconstruction.  `None` on a field means "no restriction".
#[derive(Clone, Debug, Default)]
pub struct ReconstructFilter {
    pub days:         Option<BTreeSet<DayOfWeek>>,
    pub purposes:     Option<PurposeFilter>,
    pub participants: Option<HashSet<ParticipantId>>,
    pub mode:         Option<ActivityMode>,
}

impl ReconstructFilter {
    /// Filter matching everything.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            days: (!config.day_filter.is_empty())
                .then(|| config.day_filter.iter().copied().collect()),
            purposes: match &config.purpose_filter {
                PurposeFilter::All => None,
                other => Some(other.clone()),
            },
            participants: (!config.participant_filter.is_empty())
                .then(|| config.participant_filter.iter().copied().collect()),
            mode: config.mode_filter,
        }
    }

    fn day_ok(&self, day: DayOfWeek) -> bool {
        self.days.as_ref().is_none_or(|d| d.contains(&day))
    }

    fn participant_ok(&self, p: ParticipantId) -> bool {
        self.participants.as_ref().is_none_or(|set| set.contains(&p))
    }

    /// `true` if a sample survives the mode, day, and participant filters.
    pub fn keep_sample(&self, s: &LocationSample) -> bool {
        self.mode.is_none_or(|m| s.mode == m)
            && self.day_ok(s.timestamp.weekday())
            && self.participant_ok(s.participant_id)
    }

    /// Apply day, participant, then purpose filters to `records`.
    ///
    /// `TopN` is resolved against the records left after the day and
    /// participant filters; ties in frequency break by purpose name.
    pub fn apply_records(&self, records: Vec<TravelRecord>) -> Vec<TravelRecord> {
        let records: Vec<TravelRecord> = records
            .into_iter()
            .filter(|r| self.day_ok(r.start.weekday()) && self.participant_ok(r.participant_id))
            .collect();

        let Some(allowed) = self.purposes.as_ref().map(|f| resolve_purposes(f, &records)) else {
            return records;
        };
        records.into_iter().filter(|r| allowed.contains(&r.purpose)).collect()
    }
}

/// The concrete purpose set a `PurposeFilter` admits for `records`.
pub fn resolve_purposes(filter: &PurposeFilter, records: &[TravelRecord]) -> BTreeSet<Purpose> {
    match filter {
        PurposeFilter::All => records.iter().map(|r| r.purpose.clone()).collect(),
        PurposeFilter::Named(names) => names.iter().cloned().collect(),
        PurposeFilter::TopN(n) => {
            let mut counts: HashMap<&Purpose, usize> = HashMap::new();
            for r in records {
                *counts.entry(&r.purpose).or_default() += 1;
            }
            let mut ranked: Vec<(&Purpose, usize)> = counts.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            ranked.into_iter().take(*n).map(|(p, _)| p.clone()).collect()
        }
    }
}
