//! `ct-trajectory` — reconstructs participant trips from travel journals and
//! activity logs.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`index`]       | `SampleIndex` — samples partitioned by participant        |
//! | [`classify`]    | `TimeOfDayClassifier` trait, `DayNight`                   |
//! | [`filter`]      | `ReconstructFilter`, `resolve_purposes`                   |
//! | [`segment`]     | `TripSegment`, `TripPoint`                                |
//! | [`reconstruct`] | `reconstruct`, `reconstruct_trip`, `Reconstructor`        |
//! | [`error`]       | `TrajectoryError`, `TrajectoryResult<T>`                  |
//!
//! # Join rule
//!
//! A travel record `r` yields the samples `s` with
//! `s.participant_id == r.participant_id` and
//! `r.start <= s.timestamp <= r.end`, each tagged with its time-of-day
//! bucket.  No samples, no segment.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-record join on Rayon's thread pool.       |
//! | `fx-hash`  | FxHash instead of SipHash for the participant index.   |

pub mod classify;
pub mod error;
pub mod filter;
pub mod index;
pub mod reconstruct;
pub mod segment;

#[cfg(test)]
mod tests;

pub use classify::{DayNight, TimeOfDayClassifier};
pub use error::{TrajectoryError, TrajectoryResult};
pub use filter::{resolve_purposes, ReconstructFilter};
pub use index::SampleIndex;
pub use reconstruct::{
    reconstruct, reconstruct_outcomes, reconstruct_trip, ReconstructStats, Reconstruction,
    Reconstructor, TripOutcome,
};
pub use segment::{TripPoint, TripSegment};
