//! Reconstructed trips.

use ct_core::{DayOfWeek, ParticipantId, Point, Purpose, TimeOfDay, Timestamp, TripId};

/// One location sample inside a trip, tagged with its own buckets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripPoint {
    pub timestamp:   Timestamp,
    pub location:    Point,
    pub time_of_day: TimeOfDay,
    /// Weekday of this sample.  Differs from the trip's `day` only when the
    /// trip crosses midnight.
    pub day:         DayOfWeek,
}

/// The samples of one travel record that fall inside its time window.
///
/// Never empty: records whose window holds no samples produce no segment.
#[derive(Clone, Debug, PartialEq)]
pub struct TripSegment {
    pub trip_id:        TripId,
    pub participant_id: ParticipantId,
    pub purpose:        Purpose,
    /// Weekday the trip started on.
    pub day:            DayOfWeek,
    /// Time-ordered points.
    pub points:         Vec<TripPoint>,
}

impl TripSegment {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
