//! Traffic heatmap layers: one density grid per (day, hour interval).
//!
//! All grids share one set of bins spanning the extent of every traffic
//! point, so switching layers never shifts the picture.  An optional base
//! map (static city locations) goes first and is always visible.

use std::collections::{BTreeMap, BTreeSet};

use ct_core::{ActivityMode, DayOfWeek, Extent, HourInterval, LocationSample, Point};

use crate::layer::LayerDraft;
use crate::{
    DimValue, Dimension, LayerGeometry, LayerKind, LayerResult, LayerSet, LayerStyle,
};

/// Title shown when there is no traffic data.
pub const NO_DATA_TITLE: &str = "Traffic Density Heatmap (No Data)";

const HEAT_SCALE: &str = "Hot";

/// `"Traffic: Tuesday, 21:00-23:59"`.
pub fn heatmap_title(day: DayOfWeek, interval: HourInterval) -> String {
    format!("Traffic: {day}, {interval}")
}

// ── Bins ──────────────────────────────────────────────────────────────────────

/// Regular 2-D binning over an extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bins {
    pub extent: Extent,
    pub size_x: f64,
    pub size_y: f64,
    pub nx:     usize,
    pub ny:     usize,
}

impl Bins {
    /// `n` bins per axis over `extent` (at least one).  A zero-width axis
    /// gets a single bin of size 1.
    pub fn over(extent: Extent, n: usize) -> Self {
        let n = n.max(1);
        let axis = |span: f64| if span > 0.0 { (span / n as f64, n) } else { (1.0, 1) };
        let (size_x, nx) = axis(extent.width());
        let (size_y, ny) = axis(extent.height());
        Self { extent, size_x, size_y, nx, ny }
    }

    /// `(column, row)` of `p`.  Points on the far edge land in the last bin;
    /// points outside the extent have no bin.
    pub fn bin_of(&self, p: Point) -> Option<(usize, usize)> {
        let e = &self.extent;
        if !(e.min_x..=e.max_x).contains(&p.x) || !(e.min_y..=e.max_y).contains(&p.y) {
            return None;
        }
        // The quotient can round up to `n` at the far edge.
        let cx = (((p.x - e.min_x) / self.size_x) as usize).min(self.nx - 1);
        let cy = (((p.y - e.min_y) / self.size_y) as usize).min(self.ny - 1);
        Some((cx, cy))
    }
}

// ── DensityGrid ───────────────────────────────────────────────────────────────

/// Point counts per bin, row-major (`row * nx + column`).
#[derive(Clone, Debug, PartialEq)]
pub struct DensityGrid {
    pub bins:   Bins,
    pub counts: Vec<u32>,
}

impl DensityGrid {
    pub fn new(bins: Bins) -> Self {
        Self { bins, counts: vec![0; bins.nx * bins.ny] }
    }

    /// Count `p`; returns `false` if it falls outside the bins.
    pub fn add(&mut self, p: Point) -> bool {
        match self.bins.bin_of(p) {
            Some((cx, cy)) => {
                self.counts[cy * self.bins.nx + cx] += 1;
                true
            }
            None => false,
        }
    }

    pub fn count_at(&self, column: usize, row: usize) -> u32 {
        self.counts[row * self.bins.nx + column]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for `[Day, Interval(width)]` heatmap layer sets.
pub struct HeatmapBuilder {
    bucket_width: u8,
    bins:         usize,
    mode:         Option<ActivityMode>,
    days:         Option<BTreeSet<DayOfWeek>>,
    base_map:     Vec<Point>,
}

impl HeatmapBuilder {
    /// `bucket_width` hours per interval; 100 bins per axis; `Transport`
    /// samples only; all days; no base map.
    pub fn new(bucket_width: u8) -> Self {
        Self {
            bucket_width,
            bins:     100,
            mode:     Some(ActivityMode::Transport),
            days:     None,
            base_map: Vec::new(),
        }
    }

    pub fn from_config(config: &ct_core::AnalysisConfig) -> Self {
        Self::new(config.bucket_width_hours)
            .bins(config.density_bins as usize)
            .mode(config.mode_filter)
            .days(config.days())
    }

    pub fn bins(mut self, n: usize) -> Self {
        self.bins = n.max(1);
        self
    }

    /// Keep only samples in `mode` (`None` keeps all).
    pub fn mode(mut self, mode: Option<ActivityMode>) -> Self {
        self.mode = mode;
        self
    }

    /// Keep only samples on these weekdays.
    pub fn days<I: IntoIterator<Item = DayOfWeek>>(mut self, days: I) -> Self {
        self.days = Some(days.into_iter().collect());
        self
    }

    /// Static background points, drawn under every heatmap.
    pub fn base_map(mut self, points: Vec<Point>) -> Self {
        self.base_map = points;
        self
    }

    pub fn dimensions(&self) -> Vec<Dimension> {
        vec![Dimension::Day, Dimension::Interval(self.bucket_width)]
    }

    /// Bin `samples` into per-(day, interval) density layers.
    pub fn build(self, samples: &[LocationSample]) -> LayerResult<LayerSet> {
        ct_core::time::check_bucket_width(self.bucket_width)?;
        let dimensions = self.dimensions();

        let traffic: Vec<&LocationSample> = samples
            .iter()
            .filter(|s| self.mode.is_none_or(|m| s.mode == m))
            .filter(|s| self.days.as_ref().is_none_or(|d| d.contains(&s.timestamp.weekday())))
            .collect();

        let mut drafts = Vec::new();
        if !self.base_map.is_empty() {
            drafts.push(LayerDraft {
                name:              "City Locations".to_owned(),
                kind:              LayerKind::Base,
                geometry:          LayerGeometry::Markers(self.base_map),
                style:             LayerStyle::new("lightgrey", 2.0, 0.5),
                initially_visible: true,
            });
        }

        if let Some(extent) = Extent::of(traffic.iter().map(|s| s.location)) {
            let bins = Bins::over(extent, self.bins);
            let mut grids: BTreeMap<(DayOfWeek, HourInterval), DensityGrid> = BTreeMap::new();
            for s in &traffic {
                let interval = HourInterval::of_timestamp(s.timestamp, self.bucket_width)?;
                grids
                    .entry((s.timestamp.weekday(), interval))
                    .or_insert_with(|| DensityGrid::new(bins))
                    .add(s.location);
            }

            log::info!(
                "built {} heatmap layers from {} traffic points",
                grids.len(),
                traffic.len()
            );
            for (i, ((day, interval), grid)) in grids.into_iter().enumerate() {
                drafts.push(LayerDraft {
                    name:              format!("{day} {:02}h", interval.start),
                    kind:              LayerKind::Data {
                        key:  vec![DimValue::Day(day), DimValue::Interval(interval)],
                        trip: None,
                    },
                    geometry:          LayerGeometry::Density(grid),
                    style:             LayerStyle::new(HEAT_SCALE, 0.0, 1.0),
                    initially_visible: i == 0,
                });
            }
        }

        Ok(LayerSet::from_drafts(dimensions, drafts))
    }
}

/// Transport heatmap layers over every day, `bucket_width`-hour intervals,
/// and an optional base map.
pub fn build_heatmap_layers(
    samples:      &[LocationSample],
    bucket_width: u8,
    base_map:     Option<Vec<Point>>,
) -> LayerResult<LayerSet> {
    HeatmapBuilder::new(bucket_width).base_map(base_map.unwrap_or_default()).build(samples)
}
