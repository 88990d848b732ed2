//! CSV export and read-back.

use crate::error::ExportError;
use crate::models::{COLUMNS, ListingRecord};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Write the header row and one row per record to any writer.
pub fn write_to<W: Write>(records: &[ListingRecord], writer: W) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(COLUMNS)?;
    for record in records {
        w.write_record(record.fields().map(|f| f.unwrap_or("")))?;
    }
    w.flush()?;
    Ok(())
}

/// Write `records` to `path` as UTF-8 CSV, truncating any existing file.
#[instrument(level = "info", skip(records), fields(path = %path.display(), count = records.len()))]
pub fn write_records(records: &[ListingRecord], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_to(records, file)?;
    info!("Wrote CSV export");
    Ok(())
}

/// Read records from CSV produced by [`write_to`]. Empty cells become `None`.
pub fn read_from<R: Read>(reader: R) -> Result<Vec<ListingRecord>, ExportError> {
    let mut r = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut records = Vec::new();
    for row in r.records() {
        let row = row?;
        records.push(ListingRecord::from_cells(row.iter()));
    }
    Ok(records)
}

/// Read an exported CSV file back into records.
#[instrument(level = "info", fields(path = %path.display()))]
pub fn read_records(path: &Path) -> Result<Vec<ListingRecord>, ExportError> {
    let file = File::open(path)?;
    read_from(file)
}
