//! `ct-layers` — turns reconstructed trips and raw traffic into togglable
//! layers, visibility masks, and the controls that switch between them.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`dimension`]   | `Dimension`, `DimValue` — grouping axes and their values   |
//! | [`layer`]       | `Layer`, `LayerKind`, `LayerGeometry`, `LayerSet`          |
//! | [`selection`]   | `Selection` — accepted values per dimension                |
//! | [`mask`]        | `VisibilityMask`, `compute_mask`, `initial_mask`           |
//! | [`trip_layers`] | `TripLayerBuilder` — one path layer per (key, trip)        |
//! | [`heatmap`]     | `HeatmapBuilder`, `DensityGrid` — day × interval density   |
//! | [`buildings`]   | `build_building_layers` — footprints coloured by type      |
//! | [`controls`]    | `build_menus`, `ControlPanel` — flat dropdowns             |
//! | [`hierarchy`]   | `IntervalControls` — day → interval state machine          |
//! | [`error`]       | `LayerError`, `LayerResult<T>`                             |
//!
//! # Invariants
//!
//! * A `LayerSet` is never empty.  No data gives one placeholder layer.
//! * Only key combinations present in the data get layers.
//! * Every mask covers every layer of its set, in layer order.  Control
//!   actions produce whole new masks.
//! * Legend, base, and placeholder layers are visible under every mask.

pub mod buildings;
pub mod controls;
pub mod dimension;
pub mod error;
pub mod heatmap;
pub mod hierarchy;
pub mod layer;
pub mod mask;
pub mod selection;
pub mod trip_layers;

#[cfg(test)]
mod tests;

pub use buildings::{build_building_layers, building_color};
pub use controls::{build_menus, ControlEntry, ControlMenu, ControlPanel};
pub use dimension::{DimValue, Dimension};
pub use error::{LayerError, LayerResult};
pub use heatmap::{
    build_heatmap_layers, heatmap_title, Bins, DensityGrid, HeatmapBuilder, NO_DATA_TITLE,
};
pub use hierarchy::{ControlEvent, DayOption, IntervalControls, IntervalStep};
pub use layer::{Layer, LayerGeometry, LayerKind, LayerSet, LayerStyle, NO_DATA};
pub use mask::{compute_mask, initial_mask, VisibilityMask};
pub use selection::Selection;
pub use trip_layers::{build_layers, TripLayerBuilder, PALETTE};
