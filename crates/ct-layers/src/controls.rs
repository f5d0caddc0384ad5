//! Flat dropdown menus: one per dimension.
//!
//! Each menu offers an "all" entry and one entry per value present in the
//! data.  An entry's mask restricts its own dimension to that value and
//! leaves the others open.

use crate::{
    compute_mask, DimValue, Dimension, IntervalControls, LayerResult, LayerSet, Selection,
    VisibilityMask,
};

/// One menu button.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlEntry {
    pub label: String,
    pub mask:  VisibilityMask,
}

/// A dropdown over one dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlMenu {
    pub name:      String,
    pub dimension: Dimension,
    pub entries:   Vec<ControlEntry>,
}

impl ControlMenu {
    pub fn entry(&self, label: &str) -> Option<&ControlEntry> {
        self.entries.iter().find(|e| e.label == label)
    }
}

/// One menu per dimension of `layers`, in declared order.
///
/// The "all" entry comes first, except on the time-of-day menu where
/// `"Day Only"`/`"Night Only"` come first and `"Both"` last.
pub fn build_menus(layers: &LayerSet) -> LayerResult<Vec<ControlMenu>> {
    let everything = Selection::all_of(layers);
    let mut menus = Vec::with_capacity(layers.dimensions().len());

    for &dim in layers.dimensions() {
        let values = layers.values(dim)?;
        let all = ControlEntry {
            label: dim.all_label(values.len()),
            mask:  compute_mask(layers, &everything)?,
        };

        let mut entries = Vec::with_capacity(values.len() + 1);
        let all_last = dim == Dimension::TimeOfDay;
        if !all_last {
            entries.push(all.clone());
        }
        for value in values {
            let label = entry_label(&value);
            let selection = everything.clone().only(dim, [value])?;
            entries.push(ControlEntry { label, mask: compute_mask(layers, &selection)? });
        }
        if all_last {
            entries.push(all);
        }

        menus.push(ControlMenu { name: menu_name(dim), dimension: dim, entries });
    }

    log::debug!("built {} control menus", menus.len());
    Ok(menus)
}

/// Every control for one layer set: the day → interval control for
/// `[Day, Interval]` sets, flat menus for everything else.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPanel {
    pub menus:     Vec<ControlMenu>,
    pub intervals: Option<IntervalControls>,
}

impl ControlPanel {
    pub fn for_layers(layers: &LayerSet) -> LayerResult<Self> {
        if matches!(layers.dimensions(), [Dimension::Day, Dimension::Interval(_)]) {
            Ok(Self { menus: Vec::new(), intervals: IntervalControls::build(layers)? })
        } else {
            Ok(Self { menus: build_menus(layers)?, intervals: None })
        }
    }
}

fn entry_label(value: &DimValue) -> String {
    match value {
        DimValue::TimeOfDay(t) => format!("{t} Only"),
        other => other.to_string(),
    }
}

fn menu_name(dim: Dimension) -> String {
    match dim {
        Dimension::Day          => "Day".to_owned(),
        Dimension::Purpose      => "Purpose".to_owned(),
        Dimension::TimeOfDay    => "Time of Day".to_owned(),
        Dimension::Interval(_)  => "Hours".to_owned(),
        Dimension::BuildingType => "Building Type".to_owned(),
    }
}
