//! Per-dimension value selections.

use std::collections::BTreeSet;

use crate::{DimValue, Dimension, LayerError, LayerResult, LayerSet};

/// For each declared dimension, the set of acceptable values.  `None`
/// accepts every value of that dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    dimensions: Vec<Dimension>,
    chosen:     Vec<Option<BTreeSet<DimValue>>>,
}

impl Selection {
    /// Accept everything along `dimensions`.
    pub fn all(dimensions: &[Dimension]) -> Self {
        Self { dimensions: dimensions.to_vec(), chosen: vec![None; dimensions.len()] }
    }

    /// Accept everything along the dimensions of `layers`.
    pub fn all_of(layers: &LayerSet) -> Self {
        Self::all(layers.dimensions())
    }

    /// Restrict `dim` to `values`, replacing any earlier restriction on it.
    pub fn only<I, V>(mut self, dim: Dimension, values: I) -> LayerResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<DimValue>,
    {
        let pos = self
            .dimensions
            .iter()
            .position(|d| *d == dim)
            .ok_or(LayerError::UnknownDimension(dim))?;
        self.chosen[pos] = Some(values.into_iter().map(Into::into).collect());
        Ok(self)
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// `true` iff every value of `key` is accepted by its dimension.
    pub fn matches(&self, key: &[DimValue]) -> bool {
        key.len() == self.chosen.len()
            && key
                .iter()
                .zip(&self.chosen)
                .all(|(v, allowed)| allowed.as_ref().is_none_or(|set| set.contains(v)))
    }
}
