//! JSON output backend: one `figure.json` holding layers and controls.
//!
//! Layers and controls are buffered and written together by
//! [`OutputWriter::finish`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ct_layers::{ControlPanel, IntervalControls, Layer, LayerGeometry, LayerSet, VisibilityMask};
use serde::Serialize;

use crate::row::kind_name;
use crate::writer::OutputWriter;
use crate::OutputResult;

// ── Documents ─────────────────────────────────────────────────────────────────

#[derive(Serialize, Default)]
struct FigureDoc {
    layers:    Vec<LayerDoc>,
    menus:     Vec<MenuDoc>,
    intervals: Option<IntervalDoc>,
}

#[derive(Serialize)]
struct LayerDoc {
    id:                u32,
    name:              String,
    kind:              &'static str,
    color:             String,
    width:             f32,
    opacity:           f32,
    initially_visible: bool,
    geometry:          GeometryDoc,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum GeometryDoc {
    Path { points: Vec<[f64; 2]> },
    Markers { points: Vec<[f64; 2]> },
    Density {
        origin: [f64; 2],
        size_x: f64,
        size_y: f64,
        nx:     usize,
        ny:     usize,
        counts: Vec<u32>,
    },
    None,
}

#[derive(Serialize)]
struct MenuDoc {
    name:    String,
    entries: Vec<EntryDoc>,
}

#[derive(Serialize)]
struct EntryDoc {
    label:   String,
    title:   Option<String>,
    visible: Vec<bool>,
}

#[derive(Serialize)]
struct IntervalDoc {
    active_day: String,
    days:       Vec<DayDoc>,
}

#[derive(Serialize)]
struct DayDoc {
    #[serde(flatten)]
    button: EntryDoc,
    steps:  Vec<EntryDoc>,
}

fn xy(points: &[ct_core::Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn layer_doc(layer: &Layer) -> LayerDoc {
    let geometry = match &layer.geometry {
        LayerGeometry::Path(p) => GeometryDoc::Path { points: xy(p) },
        LayerGeometry::Markers(p) => GeometryDoc::Markers { points: xy(p) },
        LayerGeometry::Density(g) => GeometryDoc::Density {
            origin: [g.bins.extent.min_x, g.bins.extent.min_y],
            size_x: g.bins.size_x,
            size_y: g.bins.size_y,
            nx:     g.bins.nx,
            ny:     g.bins.ny,
            counts: g.counts.clone(),
        },
        LayerGeometry::None => GeometryDoc::None,
    };
    LayerDoc {
        id: layer.id.0,
        name: layer.name.clone(),
        kind: kind_name(&layer.kind),
        color: layer.style.color.clone(),
        width: layer.style.width,
        opacity: layer.style.opacity,
        initially_visible: layer.initially_visible,
        geometry,
    }
}

fn entry_doc(label: &str, title: Option<&str>, mask: &VisibilityMask) -> EntryDoc {
    EntryDoc {
        label:   label.to_owned(),
        title:   title.map(str::to_owned),
        visible: mask.to_bools(),
    }
}

fn interval_doc(ctl: &IntervalControls) -> IntervalDoc {
    let days = ctl
        .days()
        .iter()
        .map(|d| DayDoc {
            button: entry_doc(&d.label, Some(&d.title), &d.mask),
            steps:  d.steps.iter().map(|s| entry_doc(&s.label, Some(&s.title), &s.mask)).collect(),
        })
        .collect();
    IntervalDoc { active_day: ctl.active_day().to_string(), days }
}

// ── JsonWriter ────────────────────────────────────────────────────────────────

/// Buffers layers and controls and writes them to `figure.json`.
pub struct JsonWriter {
    path:     PathBuf,
    doc:      FigureDoc,
    finished: bool,
}

impl JsonWriter {
    /// Target `dir/figure.json`.  The file is created by `finish`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self { path: dir.join("figure.json"), doc: FigureDoc::default(), finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for JsonWriter {
    fn write_layers(&mut self, layers: &LayerSet) -> OutputResult<()> {
        self.doc.layers.extend(layers.iter().map(layer_doc));
        Ok(())
    }

    fn write_controls(&mut self, panel: &ControlPanel) -> OutputResult<()> {
        self.doc.menus.extend(panel.menus.iter().map(|m| MenuDoc {
            name:    m.name.clone(),
            entries: m.entries.iter().map(|e| entry_doc(&e.label, None, &e.mask)).collect(),
        }));
        if let Some(ctl) = &panel.intervals {
            self.doc.intervals = Some(interval_doc(ctl));
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &self.doc)?;
        out.flush()?;
        log::info!("wrote {} layers to {}", self.doc.layers.len(), self.path.display());
        Ok(())
    }
}
