//! trails — end-to-end run of the city_trails pipeline.
//!
//! Loads a travel journal and participant status logs, reconstructs trips,
//! builds the trip, traffic-heatmap, and building layer sets with their
//! controls, and writes each as CSV and JSON.
//!
//! ```text
//! trails [DATA_DIR] [CONFIG_JSON]
//! ```
//!
//! `DATA_DIR` follows the challenge layout (`Journals/TravelJournal.csv`,
//! `Activity_Logs/ParticipantStatusLogs*.csv`, `Attributes/*.csv`).  Without
//! it a small embedded dataset is used.  `RUST_LOG` sets the log level.

mod sample;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};

use ct_core::{AnalysisConfig, Building, LocationSample, Point, TravelRecord};
use ct_journal::{
    list_numbered_files, load_base_map, load_buildings, load_buildings_reader,
    load_location_log_reader, load_location_logs, load_location_points_reader,
    load_travel_journal, load_travel_journal_reader,
};
use ct_layers::{
    build_building_layers, ControlEvent, ControlPanel, HeatmapBuilder, LayerSet,
    TripLayerBuilder,
};
use ct_output::{write_trip_segments_csv, CsvWriter, JsonWriter, OutputWriter};
use ct_trajectory::Reconstructor;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/trails";

const BASE_MAP_FILES: [&str; 5] =
    ["Apartments.csv", "Employers.csv", "Pubs.csv", "Restaurants.csv", "Schools.csv"];

// ── Inputs ────────────────────────────────────────────────────────────────────

struct Inputs {
    records:   Vec<TravelRecord>,
    samples:   Vec<LocationSample>,
    base_map:  Vec<Point>,
    buildings: Vec<Building>,
}

fn load_dir(dir: &Path) -> Result<Inputs> {
    let journal = dir.join("Journals").join("TravelJournal.csv");
    let (records, _) = load_travel_journal(&journal)
        .with_context(|| format!("loading {}", journal.display()))?;

    let log_dir = dir.join("Activity_Logs");
    let log_files = list_numbered_files(&log_dir, "ParticipantStatusLogs")
        .with_context(|| format!("listing {}", log_dir.display()))?;
    let logs = load_location_logs(&log_files);
    if logs.is_total_failure() {
        bail!("no activity logs could be read from {}", log_dir.display());
    }

    let attributes = dir.join("Attributes");
    let base_paths: Vec<PathBuf> = BASE_MAP_FILES.iter().map(|f| attributes.join(f)).collect();
    let base_map = load_base_map(&base_paths).rows;

    let buildings = match load_buildings(&attributes.join("Buildings.csv")) {
        Ok((buildings, stats)) => {
            println!("Buildings: {stats}");
            buildings
        }
        Err(e) => {
            log::warn!("buildings not loaded: {e}");
            Vec::new()
        }
    };

    Ok(Inputs { records, samples: logs.rows, base_map, buildings })
}

fn load_embedded() -> Result<Inputs> {
    let (records, _) = load_travel_journal_reader(Cursor::new(sample::TRAVEL_JOURNAL_CSV))?;
    let (samples, stats) = load_location_log_reader(Cursor::new(sample::STATUS_LOG_CSV))?;
    println!("Embedded status log: {stats}");
    let (base_map, _) = load_location_points_reader(Cursor::new(sample::BASE_MAP_CSV))?;
    let (buildings, _) = load_buildings_reader(Cursor::new(sample::BUILDINGS_CSV))?;
    Ok(Inputs { records, samples, base_map, buildings })
}

fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: AnalysisConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

// ── Output ────────────────────────────────────────────────────────────────────

fn write_figure(dir: &Path, layers: &LayerSet, panel: &ControlPanel) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut writers: Vec<Box<dyn OutputWriter>> =
        vec![Box::new(CsvWriter::new(dir)?), Box::new(JsonWriter::new(dir)?)];
    for w in &mut writers {
        w.write_layers(layers)?;
        w.write_controls(panel)?;
        w.finish()?;
    }
    Ok(())
}

fn print_layers(layers: &LayerSet) {
    println!("{:<6} {:<40} {:<8} {:<8}", "Id", "Layer", "Color", "Visible");
    println!("{}", "-".repeat(64));
    for layer in layers {
        println!(
            "{:<6} {:<40} {:<8} {:<8}",
            layer.id.0,
            layer.name,
            layer.style.color,
            if layer.initially_visible { "yes" } else { "no" },
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let data_dir = args.next().map(PathBuf::from);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => AnalysisConfig::default(),
    };

    println!("=== trails — city_trails ===");
    println!(
        "Days: {}  |  Purposes: {:?}  |  Interval: {} h",
        config.days().iter().map(|d| d.to_string()).collect::<Vec<_>>().join(", "),
        config.purpose_filter,
        config.bucket_width_hours,
    );
    println!();

    // 1. Load.
    let t0 = Instant::now();
    let inputs = match &data_dir {
        Some(dir) => load_dir(dir)?,
        None => load_embedded()?,
    };
    println!(
        "Loaded {} travel records, {} location samples, {} base-map points, {} buildings \
         in {:.3} s",
        inputs.records.len(),
        inputs.samples.len(),
        inputs.base_map.len(),
        inputs.buildings.len(),
        t0.elapsed().as_secs_f64()
    );

    // 2. Reconstruct.
    let reconstruction = Reconstructor::new(&config)?.run(inputs.records, inputs.samples.clone())?;
    let stats = reconstruction.stats;
    println!(
        "Trips: {} matched, {} empty, {} without samples ({} of {} records considered)",
        stats.matched, stats.empty, stats.missing_participant, stats.records_considered, stats.records_in
    );
    println!();

    // 3. Trip layers.
    let trips = TripLayerBuilder::from_config(&config)?.build(&reconstruction.segments)?;
    let trip_panel = ControlPanel::for_layers(&trips)?;
    print_layers(&trips);
    println!();

    // 4. Heatmap layers.
    let heat = HeatmapBuilder::from_config(&config)
        .base_map(inputs.base_map)
        .build(&inputs.samples)?;
    let mut heat_panel = ControlPanel::for_layers(&heat)?;
    match &heat_panel.intervals {
        Some(ctl) => println!("Heatmap: {} layers, showing {:?}", heat.len(), ctl.current_title()),
        None => println!("Heatmap: {}", ct_layers::NO_DATA_TITLE),
    }

    // 5. Walk the day → interval control once.
    if let Some(ctl) = heat_panel.intervals.as_mut() {
        let days: Vec<_> = ctl.days().iter().map(|d| d.day).collect();
        for day in days {
            if let ControlEvent::Regenerated { title, steps, .. } = ctl.select_day(day)? {
                let labels: Vec<_> = steps.iter().map(|s| s.label.as_str()).collect();
                println!("  {title:<36} steps: {}", labels.join(" "));
            }
        }
        if let Some(first) = ctl.days().first().map(|d| d.day) {
            ctl.select_day(first)?;
        }
    }
    println!();

    // 6. Building layers.
    let buildings = build_building_layers(&inputs.buildings);
    let building_panel = ControlPanel::for_layers(&buildings)?;

    // 7. Write.
    let out = Path::new(OUTPUT_DIR);
    write_figure(&out.join("trips"), &trips, &trip_panel)?;
    write_figure(&out.join("heatmap"), &heat, &heat_panel)?;
    write_figure(&out.join("buildings"), &buildings, &building_panel)?;
    std::fs::create_dir_all(out)?;
    let rows = write_trip_segments_csv(&out.join("trip_points.csv"), &reconstruction.segments)?;

    println!("Output written to {OUTPUT_DIR}/");
    println!("  trips/    : {} layers, {} menus", trips.len(), trip_panel.menus.len());
    println!("  heatmap/  : {} layers", heat.len());
    println!(
        "  buildings/: {} layers, {} legend entries",
        buildings.len(),
        buildings.legend_layers().count()
    );
    println!("  trip_points.csv : {rows} rows");
    Ok(())
}
