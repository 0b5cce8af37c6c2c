//! Delimited feed file reading.
//!
//! Splits the input into raw rows and hands each one to the record parser.
//! Only I/O failures are fatal; rows the reader cannot decode are dropped
//! with a diagnostic.

use crate::parser::ParseOutcome;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tickstat_core::config::InputConfig;
use tickstat_core::{Error, Result};
use tracing::{debug, warn};

/// Read and parse every row of a feed file.
pub fn read_ticks(path: impl AsRef<Path>, input: &InputConfig) -> Result<ParseOutcome> {
    let path = path.as_ref();
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(Error::input_not_found(path)),
        Err(err) => return Err(err.into()),
    };
    debug!(path = %path.display(), "reading feed file");
    read_ticks_from(file, input)
}

/// Read and parse every row from any reader.
pub fn read_ticks_from<R: Read>(reader: R, input: &InputConfig) -> Result<ParseOutcome> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(input.has_header)
        .delimiter(input.delimiter_byte())
        .flexible(true)
        .from_reader(reader);

    let mut outcome = ParseOutcome::default();
    let mut record = csv::StringRecord::new();
    let mut fallback_line = if input.has_header { 1 } else { 0 };

    loop {
        fallback_line += 1;
        match csv_reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);
                let fields: Vec<&str> = record.iter().collect();
                outcome.push_row(line, &fields);
            }
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                let line = err.position().map(|p| p.line()).unwrap_or(fallback_line);
                warn!(line, error = %err, "dropping unreadable row");
                outcome.push_unreadable(line, err.to_string());
            }
        }
    }

    debug!(
        rows = outcome.rows_read,
        ticks = outcome.ticks.len(),
        dropped = outcome.dropped_rows(),
        defaulted = outcome.defaulted_fields(),
        "parsed feed"
    );
    Ok(outcome)
}
