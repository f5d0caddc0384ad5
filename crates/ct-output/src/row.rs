//! Plain data row types written by output backends.

use ct_layers::{ControlPanel, Layer, LayerGeometry, LayerKind, VisibilityMask};
use ct_trajectory::TripSegment;

/// One layer's identity and style.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRow {
    pub layer_id:          u32,
    pub name:              String,
    /// `data`, `legend`, `base`, or `placeholder`.
    pub kind:              &'static str,
    pub color:             String,
    pub width:             f32,
    pub opacity:           f32,
    pub initially_visible: bool,
}

impl LayerRow {
    pub fn from_layer(layer: &Layer) -> Self {
        Self {
            layer_id:          layer.id.0,
            name:              layer.name.clone(),
            kind:              kind_name(&layer.kind),
            color:             layer.style.color.clone(),
            width:             layer.style.width,
            opacity:           layer.style.opacity,
            initially_visible: layer.initially_visible,
        }
    }
}

/// One vertex of a path or marker layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRow {
    pub layer_id: u32,
    /// Position along the path, from 0.
    pub seq:      u32,
    pub x:        f64,
    pub y:        f64,
}

/// One non-empty cell of a density layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRow {
    pub layer_id: u32,
    pub column:   u32,
    pub row:      u32,
    pub count:    u32,
}

/// One menu entry or interval step and the layers it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRow {
    pub control:           String,
    pub entry:             String,
    /// Visible layer ids joined by `;`.
    pub visible_layer_ids: String,
}

/// One point of a reconstructed trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPointRow {
    pub trip_id:        u32,
    pub participant_id: u32,
    pub purpose:        String,
    pub day:            String,
    pub time_of_day:    &'static str,
    pub timestamp:      String,
    pub x:              f64,
    pub y:              f64,
}

pub fn kind_name(kind: &LayerKind) -> &'static str {
    match kind {
        LayerKind::Data { .. } => "data",
        LayerKind::Legend { .. } => "legend",
        LayerKind::Base => "base",
        LayerKind::Placeholder => "placeholder",
    }
}

pub fn point_rows(layer: &Layer) -> impl Iterator<Item = PointRow> + '_ {
    layer.geometry.points().iter().enumerate().map(|(seq, p)| PointRow {
        layer_id: layer.id.0,
        seq:      seq as u32,
        x:        p.x,
        y:        p.y,
    })
}

pub fn cell_rows(layer: &Layer) -> Vec<CellRow> {
    let LayerGeometry::Density(grid) = &layer.geometry else {
        return Vec::new();
    };
    let nx = grid.bins.nx;
    grid.counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .map(|(i, &count)| CellRow {
            layer_id: layer.id.0,
            column:   (i % nx) as u32,
            row:      (i / nx) as u32,
            count,
        })
        .collect()
}

pub fn visible_ids(mask: &VisibilityMask) -> String {
    mask.visible_ids().map(|id| id.0.to_string()).collect::<Vec<_>>().join(";")
}

/// Flat menus first, then the day buttons, then one block of steps per day.
pub fn control_rows(panel: &ControlPanel) -> Vec<ControlRow> {
    let mut rows = Vec::new();
    for menu in &panel.menus {
        for entry in &menu.entries {
            rows.push(ControlRow {
                control:           menu.name.clone(),
                entry:             entry.label.clone(),
                visible_layer_ids: visible_ids(&entry.mask),
            });
        }
    }
    if let Some(intervals) = &panel.intervals {
        for day in intervals.days() {
            rows.push(ControlRow {
                control:           "Day".to_owned(),
                entry:             day.label.clone(),
                visible_layer_ids: visible_ids(&day.mask),
            });
        }
        for day in intervals.days() {
            for step in &day.steps {
                rows.push(ControlRow {
                    control:           format!("{} Hours", day.label),
                    entry:             step.label.clone(),
                    visible_layer_ids: visible_ids(&step.mask),
                });
            }
        }
    }
    rows
}

pub fn trip_point_rows(segment: &TripSegment) -> impl Iterator<Item = TripPointRow> + '_ {
    segment.points.iter().map(move |p| TripPointRow {
        trip_id:        segment.trip_id.0,
        participant_id: segment.participant_id.0,
        purpose:        segment.purpose.to_string(),
        day:            p.day.to_string(),
        time_of_day:    p.time_of_day.as_str(),
        timestamp:      p.timestamp.to_string(),
        x:              p.location.x,
        y:              p.location.y,
    })
}
