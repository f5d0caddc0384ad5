//! Trajectory layers: one path per (grouping key, trip).
//!
//! ```text
//! for each segment, for each point:
//!     key = (dim₁(point), dim₂(point), …)      // declared order
//!     groups[(key, trip_id)].push(point)
//! data layers   = groups in (key, trip_id) order
//! legend layers = one per distinct colour value, appended last
//! ```
//!
//! Only keys that occur in the data get layers.  A trip whose points fall
//! under two keys (say it runs from 17:50 to 18:10 across the Day/Night
//! boundary) becomes two layers, one per key.

use std::collections::{BTreeMap, BTreeSet};

use ct_core::{AnalysisConfig, Point, TimeOfDay, TripId};
use ct_trajectory::TripSegment;

use crate::dimension::check_dimensions;
use crate::layer::LayerDraft;
use crate::{
    DimValue, Dimension, LayerError, LayerGeometry, LayerKind, LayerResult, LayerSet, LayerStyle,
    Selection,
};

/// Colours handed out to colour-dimension values in order, cycling.
pub const PALETTE: [&str; 8] = ["blue", "orange", "green", "red", "purple", "brown", "pink", "gray"];

const TRIP_WIDTH:     f32 = 1.0;
const TRIP_OPACITY:   f32 = 0.15;
const LEGEND_WIDTH:   f32 = 3.0;

/// Fluent builder for trip layer sets.
///
/// # Defaults
///
/// | Method                    | Default                          |
/// |---------------------------|----------------------------------|
/// | `.color_by(d)`            | `Dimension::Purpose` if declared |
/// | `.initially_visible(sel)` | everything visible               |
pub struct TripLayerBuilder {
    dimensions: Vec<Dimension>,
    color_by:   Option<Dimension>,
    initial:    Option<Selection>,
}

impl TripLayerBuilder {
    pub fn new(dimensions: Vec<Dimension>) -> Self {
        let color_by = dimensions.contains(&Dimension::Purpose).then_some(Dimension::Purpose);
        Self { dimensions, color_by, initial: None }
    }

    /// Day × time-of-day × purpose layers configured from `config`: the
    /// first configured day's daytime trips start visible.
    pub fn from_config(config: &AnalysisConfig) -> LayerResult<Self> {
        let dimensions = vec![Dimension::Day, Dimension::TimeOfDay, Dimension::Purpose];
        let mut initial = Selection::all(&dimensions).only(Dimension::TimeOfDay, [TimeOfDay::Day])?;
        if let Some(&first) = config.days().first() {
            initial = initial.only(Dimension::Day, [first])?;
        }
        Ok(Self::new(dimensions).initially_visible(initial))
    }

    /// Colour layers (and emit legend entries) by `dim`.  `None` disables
    /// legend layers.
    pub fn color_by(mut self, dim: Option<Dimension>) -> Self {
        self.color_by = dim;
        self
    }

    /// Data layers matching `selection` start visible; the rest start hidden.
    pub fn initially_visible(mut self, selection: Selection) -> Self {
        self.initial = Some(selection);
        self
    }

    /// Group `segments` into layers.
    pub fn build(self, segments: &[TripSegment]) -> LayerResult<LayerSet> {
        check_dimensions(&self.dimensions)?;
        if let Some(&dim) = self.dimensions.iter().find(|d| !d.is_trip_dimension()) {
            return Err(LayerError::NotATripDimension(dim));
        }
        let color_pos = match self.color_by {
            Some(dim) => Some(
                self.dimensions
                    .iter()
                    .position(|d| *d == dim)
                    .ok_or(LayerError::UnknownDimension(dim))?,
            ),
            None => None,
        };
        if let Some(sel) = &self.initial {
            if sel.dimensions() != self.dimensions.as_slice() {
                return Err(LayerError::DimensionMismatch {
                    expected: self.dimensions.clone(),
                    got:      sel.dimensions().to_vec(),
                });
            }
        }

        // ── Group points by (key, trip) ───────────────────────────────────
        let mut groups: BTreeMap<(Vec<DimValue>, TripId), Vec<Point>> = BTreeMap::new();
        for seg in segments {
            for point in &seg.points {
                let key = self
                    .dimensions
                    .iter()
                    .map(|d| d.extract(seg, point))
                    .collect::<LayerResult<Vec<DimValue>>>()?;
                groups.entry((key, seg.trip_id)).or_default().push(point.location);
            }
        }

        // ── Colour assignment ─────────────────────────────────────────────
        let color_values: Vec<DimValue> = match color_pos {
            Some(pos) => groups
                .keys()
                .map(|(key, _)| key[pos].clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            None => Vec::new(),
        };
        let color_of = |key: &[DimValue]| -> &'static str {
            color_pos
                .and_then(|pos| color_values.iter().position(|v| *v == key[pos]))
                .map_or(PALETTE[0], |i| PALETTE[i % PALETTE.len()])
        };

        // ── Data layers ───────────────────────────────────────────────────
        let mut drafts: Vec<LayerDraft> = Vec::with_capacity(groups.len() + color_values.len());
        for ((key, trip), points) in groups {
            let initially_visible = self.initial.as_ref().is_none_or(|sel| sel.matches(&key));
            drafts.push(LayerDraft {
                name:     layer_name(&key, color_pos),
                style:    LayerStyle::new(color_of(&key), TRIP_WIDTH, TRIP_OPACITY),
                geometry: LayerGeometry::Path(points),
                kind:     LayerKind::Data { key, trip: Some(trip) },
                initially_visible,
            });
        }
        let data_count = drafts.len();

        // ── Legend layers ─────────────────────────────────────────────────
        for (i, value) in color_values.into_iter().enumerate() {
            drafts.push(LayerDraft {
                name:              value.to_string(),
                style:             LayerStyle::new(PALETTE[i % PALETTE.len()], LEGEND_WIDTH, 1.0),
                geometry:          LayerGeometry::None,
                kind:              LayerKind::Legend { value },
                initially_visible: true,
            });
        }

        log::info!(
            "built {} trip layers and {} legend layers",
            data_count,
            drafts.len() - data_count
        );
        Ok(LayerSet::from_drafts(self.dimensions, drafts))
    }
}

/// `"Work (Tuesday, Day)"`: the colour value first, the rest in parentheses.
fn layer_name(key: &[DimValue], color_pos: Option<usize>) -> String {
    let lead = color_pos.unwrap_or(0);
    let rest: Vec<String> = key
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != lead)
        .map(|(_, v)| v.to_string())
        .collect();
    if rest.is_empty() {
        key[lead].to_string()
    } else {
        format!("{} ({})", key[lead], rest.join(", "))
    }
}

/// Trip layers grouped by `dimensions` with default colouring and
/// everything initially visible.
pub fn build_layers(segments: &[TripSegment], dimensions: &[Dimension]) -> LayerResult<LayerSet> {
    TripLayerBuilder::new(dimensions.to_vec()).build(segments)
}
