//! Participant status-log loader.
//!
//! # CSV format
//!
//! ```csv
//! timestamp,currentLocation,participantId,currentMode,hungerStatus,sleepStatus,...
//! 2022-03-01T00:00:00Z,POINT (-2724.64 6866.54),0,AtHome,JustAte,Sleeping,...
//! ```
//!
//! The logs are split across many numbered files
//! (`ParticipantStatusLogs1.csv` … `ParticipantStatusLogs72.csv`).
//! [`load_location_logs`] reads a list of them, tolerating individual
//! failures: missing, unreadable, or empty files are logged and reported in
//! the [`LoadReport`] while the rest still load.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use ct_core::{parse_point, ActivityMode, LocationSample, ParticipantId, Timestamp};

use crate::read::{read_rows, Row};
use crate::{JournalResult, LoadReport, RowStats};

#[derive(Deserialize)]
struct StatusRow {
    #[serde(rename = "participantId")]
    participant_id: u32,
    timestamp:      String,
    #[serde(rename = "currentLocation")]
    location:       String,
    #[serde(rename = "currentMode")]
    mode:           String,
}

const REQUIRED: [&str; 4] = ["participantId", "timestamp", "currentLocation", "currentMode"];

/// Load one activity-log file.
pub fn load_location_log(path: &Path) -> JournalResult<(Vec<LocationSample>, RowStats)> {
    let file = std::fs::File::open(path)?;
    load_location_log_reader(file)
}

/// Like [`load_location_log`] but accepts any `Read` source.
///
/// Rows with malformed geometry, timestamps, or unknown modes are dropped.
pub fn load_location_log_reader<R: Read>(reader: R) -> JournalResult<(Vec<LocationSample>, RowStats)> {
    read_rows(reader, &REQUIRED, |_, row: StatusRow| {
        let (Ok(location), Ok(timestamp), Ok(mode)) = (
            parse_point(&row.location),
            Timestamp::parse(&row.timestamp),
            row.mode.parse::<ActivityMode>(),
        ) else {
            return Row::Malformed;
        };
        Row::Keep(LocationSample {
            participant_id: ParticipantId(row.participant_id),
            timestamp,
            location,
            mode,
        })
    })
}

/// Load many activity-log files, continuing past failures.
pub fn load_location_logs<P: AsRef<Path>>(paths: &[P]) -> LoadReport<LocationSample> {
    let mut report = LoadReport::new();
    for path in paths {
        let path = path.as_ref();
        match load_location_log(path) {
            Ok((samples, stats)) => {
                log::debug!("activity log {}: {stats}", path.display());
                if stats.malformed > 0 {
                    log::warn!("activity log {}: dropped {} malformed rows", path.display(), stats.malformed);
                }
                report.rows.extend(samples);
                report.stats.merge(stats);
                report.loaded.push(path.to_path_buf());
            }
            Err(e) => {
                log::warn!("skipping activity log {}: {e}", path.display());
                report.failed.push((path.to_path_buf(), e));
            }
        }
    }
    log::info!(
        "activity logs: {} of {} files loaded, {}",
        report.loaded.len(),
        paths.len(),
        report.stats
    );
    report
}

/// List `dir/<prefix>*.csv`, ordered by the number embedded in the file
/// name so `Logs2.csv` sorts before `Logs10.csv`.
pub fn list_numbered_files(dir: &Path, prefix: &str) -> JournalResult<Vec<PathBuf>> {
    let mut files: Vec<(u64, String, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else { continue };
        let Some(stem) = name.strip_prefix(prefix).and_then(|s| s.strip_suffix(".csv")) else {
            continue;
        };
        let number = stem.parse::<u64>().unwrap_or(u64::MAX);
        files.push((number, name.to_owned(), path));
    }
    files.sort();
    Ok(files.into_iter().map(|(_, _, p)| p).collect())
}
