//! Source records: travel-journal entries and location-log samples.

use std::fmt;

use crate::{ActivityMode, ParticipantId, Point, Timestamp, TripId};

// ── Purpose ───────────────────────────────────────────────────────────────────

/// Free-text travel purpose ("Work/Home Commute", "Eating", …).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Purpose(pub String);

impl Purpose {
    pub fn new(s: impl Into<String>) -> Self {
        Purpose(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Purpose {
    fn from(s: &str) -> Self {
        Purpose(s.to_owned())
    }
}

// ── TravelRecord ──────────────────────────────────────────────────────────────

/// One travel-journal row: a participant moving for `purpose` between
/// `start` and `end` (inclusive).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelRecord {
    pub trip_id:        TripId,
    pub participant_id: ParticipantId,
    pub start:          Timestamp,
    pub end:            Timestamp,
    pub purpose:        Purpose,
}

impl TravelRecord {
    /// `true` if `ts` falls in `[start, end]`.
    #[inline]
    pub fn covers(&self, ts: Timestamp) -> bool {
        self.start <= ts && ts <= self.end
    }
}

// ── LocationSample ────────────────────────────────────────────────────────────

/// One periodic activity-log row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationSample {
    pub participant_id: ParticipantId,
    pub timestamp:      Timestamp,
    pub location:       Point,
    pub mode:           ActivityMode,
}
