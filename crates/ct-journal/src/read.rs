//! Shared CSV row reader.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::{JournalError, JournalResult, RowStats};

/// What a row converter decided about one row.
pub(crate) enum Row<T> {
    Keep(T),
    Malformed,
    Skip,
}

/// Read every data row of a headed CSV into `T` via `convert`.
///
/// Headers and fields are whitespace-trimmed.  A row that fails to
/// deserialize counts as malformed; it never aborts the file.  Structural
/// problems (no header, a required column missing) do.
pub(crate) fn read_rows<R, S, T, F>(
    reader:   R,
    required: &[&'static str],
    mut convert: F,
) -> JournalResult<(Vec<T>, RowStats)>
where
    R: Read,
    S: DeserializeOwned,
    F: FnMut(usize, S) -> Row<T>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(JournalError::Empty);
    }
    for &col in required {
        if !headers.iter().any(|h| h == col) {
            return Err(JournalError::MissingColumn(col));
        }
    }

    let mut rows = Vec::new();
    let mut stats = RowStats::default();

    for (i, result) in rdr.deserialize::<S>().enumerate() {
        stats.read += 1;
        let decision = match result {
            Ok(raw) => convert(i, raw),
            Err(_) => Row::Malformed,
        };
        match decision {
            Row::Keep(t) => {
                rows.push(t);
                stats.kept += 1;
            }
            Row::Malformed => stats.malformed += 1,
            Row::Skip => stats.skipped += 1,
        }
    }

    Ok((rows, stats))
}
