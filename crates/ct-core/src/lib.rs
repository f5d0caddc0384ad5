//! `ct-core` — foundational types for the `city_trails` workspace.
//!
//! Every other `ct-*` crate depends on this one.  It has no `ct-*`
//! dependencies and few external ones (`chrono`, `thiserror`, optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `ParticipantId`, `TripId`, `LayerId`                     |
//! | [`building`] | `Building`, `BuildingKind`                               |
//! | [`geo`]      | `Point`, `Geometry` (WKT parser), `Extent`               |
//! | [`time`]     | `Timestamp`, `DayOfWeek`, `TimeOfDay`, `HourInterval`    |
//! | [`mode`]     | `ActivityMode` enum                                      |
//! | [`record`]   | `TravelRecord`, `LocationSample`, `Purpose`              |
//! | [`config`]   | `AnalysisConfig`, `PurposeFilter`                        |
//! | [`error`]    | `CtError`, `CtResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod building;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod mode;
pub mod record;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::{Building, BuildingKind};
pub use config::{AnalysisConfig, PurposeFilter};
pub use error::{CtError, CtResult};
pub use geo::{parse_point, Extent, Geometry, Point};
pub use ids::{LayerId, ParticipantId, TripId};
pub use mode::ActivityMode;
pub use record::{LocationSample, Purpose, TravelRecord};
pub use time::{DayOfWeek, HourInterval, TimeOfDay, Timestamp};
