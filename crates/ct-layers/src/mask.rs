//! `VisibilityMask` and `compute_mask`.
//!
//! A mask always covers every layer of its set, in layer order.  Masks are
//! recomputed from scratch for each control action; there is no way to
//! patch one.

use ct_core::LayerId;

use crate::{LayerError, LayerResult, LayerSet, Selection};

/// One visibility flag per layer, keyed by layer id and ordered like the
/// layer list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityMask {
    entries: Vec<(LayerId, bool)>,
}

impl VisibilityMask {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visibility of layer `id`, or `None` if the id is not in the set.
    pub fn get(&self, id: LayerId) -> Option<bool> {
        self.entries
            .get(id.index())
            .filter(|(eid, _)| *eid == id)
            .map(|&(_, v)| v)
    }

    /// `(id, visible)` pairs in layer order.
    pub fn entries(&self) -> &[(LayerId, bool)] {
        &self.entries
    }

    /// Plain flags, index-aligned with the layer list.
    pub fn to_bools(&self) -> Vec<bool> {
        self.entries.iter().map(|&(_, v)| v).collect()
    }

    pub fn visible_ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.entries.iter().filter(|(_, v)| *v).map(|&(id, _)| id)
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| *v).count()
    }
}

/// Visibility of every layer in `layers` under `selection`.
///
/// Legend, base, and placeholder layers are always visible.  A data layer is
/// visible iff each of its key values lies in the selected subset for its
/// dimension.
///
/// # Errors
///
/// [`LayerError::DimensionMismatch`] if `selection` was built for other
/// dimensions than `layers`.
pub fn compute_mask(layers: &LayerSet, selection: &Selection) -> LayerResult<VisibilityMask> {
    if layers.dimensions() != selection.dimensions() {
        return Err(LayerError::DimensionMismatch {
            expected: layers.dimensions().to_vec(),
            got:      selection.dimensions().to_vec(),
        });
    }
    let entries = layers
        .iter()
        .map(|layer| {
            let visible = match layer.key() {
                Some(key) => selection.matches(key),
                None => true,
            };
            (layer.id, visible)
        })
        .collect();
    Ok(VisibilityMask { entries })
}

/// The mask matching each layer's `initially_visible` flag.
pub fn initial_mask(layers: &LayerSet) -> VisibilityMask {
    VisibilityMask {
        entries: layers.iter().map(|l| (l.id, l.initially_visible)).collect(),
    }
}
