//! Command-line interface definitions.
//!
//! The CLI is a thin front end over the library: it collects a URL and the
//! run bounds, prints progress lines to stdout and reports the outcome.
//!
//! # Examples
//!
//! ```sh
//! # Inspect one watch page
//! listing_importer single https://www.youporn.com/watch/123/slug/
//!
//! # Import three pages of a category as CSV and XLSX
//! listing_importer category https://www.youporn.com/category/foo/ -p 3 --format both
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use listing_importer::outputs::ExportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, global = true, env = "LISTING_IMPORTER_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract title, thumbnail and embed code from one watch page
    Single {
        /// Watch page URL
        #[arg(value_parser = non_empty)]
        url: String,

        /// Print the record as JSON instead of labelled text
        #[arg(long)]
        json: bool,
    },
    /// Import cards from one or more pages of a category listing
    Category {
        /// Category listing URL (page 1)
        #[arg(value_parser = non_empty)]
        url: String,

        /// Number of pages to import
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,

        /// Cards taken from each page (defaults to the configured value)
        #[arg(long)]
        max_items: Option<usize>,

        /// Export format
        #[arg(short, long, value_enum, default_value_t = FormatChoice::Xlsx)]
        format: FormatChoice,

        /// Directory the export files are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Skip pages that fail to download instead of aborting the run
        #[arg(long)]
        skip_failed_pages: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    Csv,
    Xlsx,
    Both,
}

impl FormatChoice {
    pub fn formats(self) -> Vec<ExportFormat> {
        match self {
            FormatChoice::Csv => vec![ExportFormat::Csv],
            FormatChoice::Xlsx => vec![ExportFormat::Xlsx],
            FormatChoice::Both => vec![ExportFormat::Csv, ExportFormat::Xlsx],
        }
    }
}

fn non_empty(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err("URL must not be empty".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
