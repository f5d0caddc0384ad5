//! `Layer` and `LayerSet`.
//!
//! A `LayerSet` is the ordered list handed to the renderer.  Layer ids are
//! assigned from list position when the set is built and never change, so a
//! [`VisibilityMask`][crate::VisibilityMask] can be both index-aligned with
//! the list and looked up by id.
//!
//! A `LayerSet` is never empty: with no layers to show it holds a single
//! `Placeholder`.

use std::collections::BTreeSet;

use ct_core::{LayerId, Point, TripId};

use crate::{DensityGrid, DimValue, Dimension, LayerError, LayerResult};

// ── Layer ─────────────────────────────────────────────────────────────────────

/// What a layer represents, which also decides how masks treat it.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerKind {
    /// Data grouped by `key` (one value per declared dimension, in order).
    /// Trip layers carry their trip; heatmap layers do not.
    Data { key: Vec<DimValue>, trip: Option<TripId> },
    /// Geometry-free legend entry for one value of the colour dimension.
    Legend { value: DimValue },
    /// Static background (city locations).
    Base,
    /// Stand-in when there is no data at all.
    Placeholder,
}

/// Drawable content of a layer.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerGeometry {
    /// Connected line through the points, in order.
    Path(Vec<Point>),
    /// Unconnected markers.
    Markers(Vec<Point>),
    /// Binned 2-D point density.
    Density(DensityGrid),
    None,
}

impl LayerGeometry {
    /// Points drawn by a path or marker layer.  Empty for the others.
    pub fn points(&self) -> &[Point] {
        match self {
            LayerGeometry::Path(p) | LayerGeometry::Markers(p) => p,
            LayerGeometry::Density(_) | LayerGeometry::None => &[],
        }
    }
}

/// Display hints.  For density layers `color` names a colour scale.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStyle {
    pub color:   String,
    /// Line width, or marker size for marker layers.
    pub width:   f32,
    pub opacity: f32,
}

impl LayerStyle {
    pub fn new(color: impl Into<String>, width: f32, opacity: f32) -> Self {
        Self { color: color.into(), width, opacity }
    }
}

/// One togglable visual group.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub id:                LayerId,
    pub name:              String,
    pub kind:              LayerKind,
    pub geometry:          LayerGeometry,
    pub style:             LayerStyle,
    pub initially_visible: bool,
}

impl Layer {
    /// Legend, base, and placeholder layers are visible under every selection.
    #[inline]
    pub fn is_always_visible(&self) -> bool {
        !matches!(self.kind, LayerKind::Data { .. })
    }

    /// Grouping key of a data layer.
    pub fn key(&self) -> Option<&[DimValue]> {
        match &self.kind {
            LayerKind::Data { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// A layer before it has been given an id.
pub(crate) struct LayerDraft {
    pub name:              String,
    pub kind:              LayerKind,
    pub geometry:          LayerGeometry,
    pub style:             LayerStyle,
    pub initially_visible: bool,
}

// ── LayerSet ──────────────────────────────────────────────────────────────────

/// Name of the stand-in layer of an empty set.
pub const NO_DATA: &str = "No data";

/// Ordered, id-stable layers plus the dimensions their keys follow.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSet {
    dimensions: Vec<Dimension>,
    layers:     Vec<Layer>,
}

impl LayerSet {
    /// Assign ids in order.  An empty draft list becomes one placeholder.
    pub(crate) fn from_drafts(dimensions: Vec<Dimension>, drafts: Vec<LayerDraft>) -> Self {
        let drafts = if drafts.is_empty() {
            log::warn!("no data for any layer; using a placeholder");
            vec![LayerDraft {
                name:              NO_DATA.to_owned(),
                kind:              LayerKind::Placeholder,
                geometry:          LayerGeometry::None,
                style:             LayerStyle::new("lightgrey", 0.0, 0.0),
                initially_visible: true,
            }]
        } else {
            drafts
        };

        let layers = drafts
            .into_iter()
            .enumerate()
            .map(|(i, d)| Layer {
                id:                LayerId(i as u32),
                name:              d.name,
                kind:              d.kind,
                geometry:          d.geometry,
                style:             d.style,
                initially_visible: d.initially_visible,
            })
            .collect();

        Self { dimensions, layers }
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Always ≥ 1.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
        self.layers.iter()
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.index())
    }

    /// `true` if the set is just the no-data placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.layers.as_slice(), [only] if only.kind == LayerKind::Placeholder)
    }

    pub fn data_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|l| matches!(l.kind, LayerKind::Data { .. }))
    }

    pub fn legend_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|l| matches!(l.kind, LayerKind::Legend { .. }))
    }

    /// Position of `dim` in the declared dimensions.
    pub fn position(&self, dim: Dimension) -> LayerResult<usize> {
        self.dimensions
            .iter()
            .position(|d| *d == dim)
            .ok_or(LayerError::UnknownDimension(dim))
    }

    /// Distinct values of `dim` across the data layers, in order.
    pub fn values(&self, dim: Dimension) -> LayerResult<Vec<DimValue>> {
        let pos = self.position(dim)?;
        let set: BTreeSet<&DimValue> = self.data_layers().filter_map(|l| l.key()).map(|k| &k[pos]).collect();
        Ok(set.into_iter().cloned().collect())
    }

    /// Distinct grouping keys, in layer order.  Trip layers sharing a key
    /// count once.
    pub fn groups(&self) -> Vec<&[DimValue]> {
        let mut seen: Vec<&[DimValue]> = Vec::new();
        for key in self.data_layers().filter_map(Layer::key) {
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a LayerSet {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;
    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
