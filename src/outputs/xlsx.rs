//! XLSX export.
//!
//! Spreadsheet support is an optional capability behind the `xlsx` feature.
//! Without it, [`write_records`] fails with [`ExportError::Unavailable`]
//! rather than quietly writing CSV instead.

use crate::error::ExportError;
use crate::models::ListingRecord;
use std::path::Path;

#[cfg(feature = "xlsx")]
#[tracing::instrument(level = "info", skip(records), fields(path = %path.display(), count = records.len()))]
pub fn write_records(records: &[ListingRecord], path: &Path) -> Result<(), ExportError> {
    use crate::models::COLUMNS;
    use rust_xlsxwriter::Workbook;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, value) in record.fields().iter().enumerate() {
            if let Some(value) = value {
                sheet.write_string(row, col as u16, *value)?;
            }
        }
    }
    workbook.save(path)?;
    tracing::info!("Wrote XLSX export");
    Ok(())
}

#[cfg(not(feature = "xlsx"))]
pub fn write_records(records: &[ListingRecord], path: &Path) -> Result<(), ExportError> {
    tracing::warn!(path = %path.display(), count = records.len(), "XLSX support not compiled in");
    Err(ExportError::Unavailable { format: "xlsx" })
}
