//! Tabular exports of accumulated listing records.
//!
//! # Submodules
//!
//! - [`csv`]: UTF-8 CSV with a header row, always available
//! - [`xlsx`]: single-sheet workbook, requires the `xlsx` cargo feature
//!
//! Both writers use the fixed column order of
//! [`COLUMNS`](crate::models::COLUMNS), render absent fields as empty cells and
//! overwrite the target file in full.

pub mod csv;
pub mod xlsx;

use crate::error::ExportError;
use crate::models::ListingRecord;
use std::fmt;
use std::path::Path;

/// A supported export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Whether this build can write the format.
    pub fn is_available(self) -> bool {
        match self {
            ExportFormat::Csv => true,
            ExportFormat::Xlsx => cfg!(feature = "xlsx"),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write `records` to `path` in `format`, replacing any existing file.
pub fn export(records: &[ListingRecord], path: &Path, format: ExportFormat) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => csv::write_records(records, path),
        ExportFormat::Xlsx => xlsx::write_records(records, path),
    }
}
