//! Building footprint layers: one closed outline per building, coloured by
//! type, plus an always-visible legend entry per standard type.
//!
//! The set declares the single dimension [`Dimension::BuildingType`], so the
//! usual flat menu ("All Types", "Commercial", ...) toggles footprints by
//! type.  Footprints keep input order.

use ct_core::{Building, BuildingKind, Point};

use crate::layer::LayerDraft;
use crate::{DimValue, Dimension, LayerGeometry, LayerKind, LayerSet, LayerStyle};

const FOOTPRINT_WIDTH:   f32 = 1.0;
const FOOTPRINT_OPACITY: f32 = 0.5;
const LEGEND_WIDTH:      f32 = 4.0;

/// Outline colour for a building type.
pub fn building_color(kind: &BuildingKind) -> &'static str {
    match kind {
        BuildingKind::Commercial  => "blue",
        BuildingKind::Residential => "green",
        BuildingKind::School      => "orange",
        BuildingKind::Other(_)    => "gray",
    }
}

/// Footprint and legend layers for `buildings`.  No buildings gives the
/// placeholder set.
pub fn build_building_layers(buildings: &[Building]) -> LayerSet {
    let dimensions = vec![Dimension::BuildingType];
    let mut drafts: Vec<LayerDraft> = Vec::with_capacity(buildings.len() + 3);

    for b in buildings {
        drafts.push(LayerDraft {
            name:              format!("{} {}", b.kind, b.building_id),
            kind:              LayerKind::Data {
                key:  vec![DimValue::BuildingType(b.kind.clone())],
                trip: None,
            },
            geometry:          LayerGeometry::Path(closed_ring(&b.footprint)),
            style:             LayerStyle::new(
                building_color(&b.kind),
                FOOTPRINT_WIDTH,
                FOOTPRINT_OPACITY,
            ),
            initially_visible: true,
        });
    }

    if !buildings.is_empty() {
        for kind in BuildingKind::STANDARD {
            drafts.push(LayerDraft {
                name:              format!("{kind} Buildings"),
                style:             LayerStyle::new(building_color(&kind), LEGEND_WIDTH, 1.0),
                geometry:          LayerGeometry::None,
                kind:              LayerKind::Legend { value: DimValue::BuildingType(kind) },
                initially_visible: true,
            });
        }
    }

    log::info!("built {} building footprint layers", buildings.len());
    LayerSet::from_drafts(dimensions, drafts)
}

/// `ring` with its first vertex repeated at the end, unless already closed.
fn closed_ring(ring: &[Point]) -> Vec<Point> {
    let mut points = ring.to_vec();
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
        if first != last {
            points.push(first);
        }
    }
    points
}
