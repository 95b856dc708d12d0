//! Reading the Daily Time App CSV export.

use crate::errors::{AppError, AppResult};
use crate::models::RawRecord;
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

/// Read all rows: no header, `#` comments skipped, short rows allowed.
pub fn read_records<R: Read>(input: R, delimiter: u8) -> AppResult<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();
    for row in rdr.records() {
        records.push(RawRecord::from_csv(&row?));
    }

    tracing::debug!(rows = records.len(), "csv rows read");
    Ok(records)
}

/// Read from the given file, or from stdin when it is piped in.
pub fn read_source(path: Option<&Path>, delimiter: u8) -> AppResult<Vec<RawRecord>> {
    match path {
        Some(p) => {
            let file = File::open(p)?;
            read_records(file, delimiter)
        }
        None if !io::stdin().is_terminal() => read_records(io::stdin().lock(), delimiter),
        None => Err(AppError::MissingInput),
    }
}
