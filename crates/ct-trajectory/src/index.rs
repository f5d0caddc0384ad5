//! `SampleIndex` — location samples partitioned by participant.
//!
//! Built once before any trip is reconstructed; afterwards it is read-only
//! and shared by every worker.  Each participant's slice is sorted by
//! timestamp (stable), so a trip window is two binary searches.

use ct_core::{LocationSample, ParticipantId, Timestamp};

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

/// Per-participant, time-sorted location samples.
#[derive(Default, Debug)]
pub struct SampleIndex {
    by_participant: Map<ParticipantId, Vec<LocationSample>>,
    total:          usize,
}

impl SampleIndex {
    /// Partition `samples` by participant.
    pub fn build<I: IntoIterator<Item = LocationSample>>(samples: I) -> Self {
        let mut by_participant: Map<ParticipantId, Vec<LocationSample>> = Map::default();
        let mut total = 0;
        for s in samples {
            by_participant.entry(s.participant_id).or_default().push(s);
            total += 1;
        }
        // Logs are already time-ordered within a file; merging several files
        // can interleave them.
        for slice in by_participant.values_mut() {
            slice.sort_by_key(|s| s.timestamp);
        }
        Self { by_participant, total }
    }

    /// All samples for `participant`, or `None` if it never appears.
    pub fn samples(&self, participant: ParticipantId) -> Option<&[LocationSample]> {
        self.by_participant.get(&participant).map(Vec::as_slice)
    }

    /// Samples for `participant` with `start <= timestamp <= end`.
    ///
    /// Returns `None` if the participant is unknown and an empty slice if it
    /// is known but has nothing in the window.
    pub fn window(
        &self,
        participant: ParticipantId,
        start:       Timestamp,
        end:         Timestamp,
    ) -> Option<&[LocationSample]> {
        let slice = self.samples(participant)?;
        let lo = slice.partition_point(|s| s.timestamp < start);
        let hi = slice.partition_point(|s| s.timestamp <= end).max(lo);
        Some(&slice[lo..hi])
    }

    pub fn participant_count(&self) -> usize {
        self.by_participant.len()
    }

    /// Total samples across all participants.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
