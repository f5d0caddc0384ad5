//! Travel-journal loader.
//!
//! # CSV format
//!
//! ```csv
//! participantId,travelStartTime,travelStartLocationId,travelEndTime,travelEndLocationId,purpose,checkInTime,startingBalance,endingBalance
//! 7,2022-03-01T09:00:00Z,,2022-03-01T09:30:00Z,,Work/Home Commute,...
//! ```
//!
//! Only `participantId`, `travelStartTime`, `travelEndTime`, and `purpose` are
//! read.  Each record's `TripId` is its zero-based data-row position, counted
//! over *all* rows so that ids stay stable whether or not earlier rows were
//! dropped.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ct_core::{ParticipantId, Purpose, Timestamp, TravelRecord, TripId};

use crate::read::{read_rows, Row};
use crate::{JournalResult, RowStats};

#[derive(Deserialize)]
struct TravelRow {
    #[serde(rename = "participantId")]
    participant_id: u32,
    #[serde(rename = "travelStartTime")]
    start:          String,
    #[serde(rename = "travelEndTime")]
    end:            String,
    purpose:        String,
}

const REQUIRED: [&str; 4] = ["participantId", "travelStartTime", "travelEndTime", "purpose"];

/// Load a travel journal from a CSV file.
pub fn load_travel_journal(path: &Path) -> JournalResult<(Vec<TravelRecord>, RowStats)> {
    let file = std::fs::File::open(path)?;
    let (records, stats) = load_travel_journal_reader(file)?;
    log::info!("travel journal {}: {stats}", path.display());
    Ok((records, stats))
}

/// Like [`load_travel_journal`] but accepts any `Read` source.
///
/// Rows with unparseable timestamps, or whose start is after their end, are
/// dropped and counted as malformed.
pub fn load_travel_journal_reader<R: Read>(reader: R) -> JournalResult<(Vec<TravelRecord>, RowStats)> {
    read_rows(reader, &REQUIRED, |i, row: TravelRow| {
        let (Ok(start), Ok(end)) = (Timestamp::parse(&row.start), Timestamp::parse(&row.end)) else {
            return Row::Malformed;
        };
        if start > end {
            log::warn!(
                "travel row {i}: start {start} is after end {end}; dropping"
            );
            return Row::Malformed;
        }
        let Ok(trip_id) = TripId::try_from(i) else {
            return Row::Malformed;
        };
        Row::Keep(TravelRecord {
            trip_id,
            participant_id: ParticipantId(row.participant_id),
            start,
            end,
            purpose: Purpose(row.purpose),
        })
    })
}
