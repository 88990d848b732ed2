//! # listing_importer
//!
//! Command-line front end for the listing import pipeline.
//!
//! ## Usage
//!
//! ```sh
//! listing_importer single https://www.youporn.com/watch/123/slug/
//! listing_importer category https://www.youporn.com/category/foo/ -p 3 -f both
//! ```
//!
//! Progress lines go to stdout; diagnostics go to stderr through `tracing`
//! (filter with `RUST_LOG`).

use clap::Parser;
use listing_importer::config::{ImporterConfig, load_config};
use listing_importer::error::ExportError;
use listing_importer::outputs::{ExportFormat, export};
use listing_importer::pagination::{ListingOptions, PageErrorPolicy, ProgressEvent, scrape_listing};
use listing_importer::scrapers::video::import_single;
use listing_importer::utils::{ensure_output_dir, output_path};
use listing_importer::{HttpFetcher, SingleItemRecord};
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use url::Url;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = load_config(args.config.as_deref())?;
    let fetcher = HttpFetcher::new(&config)?;

    match args.command {
        Command::Single { url, json } => run_single(&fetcher, &url, json).await?,
        Command::Category {
            url,
            pages,
            max_items,
            format,
            output_dir,
            skip_failed_pages,
        } => {
            let policy = if skip_failed_pages {
                PageErrorPolicy::Skip
            } else {
                PageErrorPolicy::Abort
            };
            let request = CategoryRequest {
                url: &url,
                pages,
                max_items: max_items.unwrap_or(config.max_items_per_page),
                formats: format.formats(),
                output_dir: &output_dir,
                policy,
            };
            run_category(&fetcher, &config, request).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

#[instrument(level = "info", skip(fetcher))]
async fn run_single(fetcher: &HttpFetcher, url: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let record = match import_single(fetcher, url).await {
        Ok(record) => record,
        Err(e) => {
            error!(error = %e, "Extraction failed");
            println!("Extraction failed.");
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_single(&record);
    }
    Ok(())
}

fn print_single(record: &SingleItemRecord) {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    println!("TITLE:\n{}\n", show(&record.title));
    println!("THUMBNAIL:\n{}\n", show(&record.thumbnail_url));
    println!("EMBED CODE:\n{}", show(&record.embed_snippet));
}

#[derive(Debug)]
struct CategoryRequest<'a> {
    url: &'a str,
    pages: u32,
    max_items: usize,
    formats: Vec<ExportFormat>,
    output_dir: &'a Path,
    policy: PageErrorPolicy,
}

#[instrument(level = "info", skip(fetcher, config))]
async fn run_category(
    fetcher: &HttpFetcher,
    config: &ImporterConfig,
    request: CategoryRequest<'_>,
) -> Result<(), Box<dyn Error>> {
    if request.pages > config.max_pages {
        return Err(format!(
            "requested {} pages, at most {} are allowed",
            request.pages, config.max_pages
        )
        .into());
    }
    if !request.formats.iter().any(|f| f.is_available()) {
        return Err("none of the requested export formats is available in this build".into());
    }

    let options = ListingOptions {
        max_items_per_page: request.max_items,
        origin: Url::parse(&config.site_origin)?,
        on_page_error: request.policy,
    };

    println!("[INFO] Starting import from: {}", request.url);
    let run = scrape_listing(fetcher, request.url, request.pages, &options, |event: &ProgressEvent| {
        println!("{event}");
    })
    .await?;

    for failed in &run.failed_pages {
        warn!(page = failed.page, url = %failed.url, error = %failed.error, "Page was skipped");
    }

    ensure_output_dir(request.output_dir)?;
    let mut written = 0;
    for format in &request.formats {
        let path = output_path(request.output_dir, &config.output_basename, format.extension());
        match export(&run.records, &path, *format) {
            Ok(()) => {
                written += 1;
                println!("[INFO] Saved {} videos to {}", run.records.len(), path.display());
            }
            Err(ExportError::Unavailable { format: name }) => {
                warn!(format = name, "Export format unavailable in this build; skipping");
                println!("[WARN] {name} export is not available in this build");
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Export failed");
                return Err(e.into());
            }
        }
    }

    if written == 0 {
        return Err("no export file could be written".into());
    }
    if !run.failed_pages.is_empty() {
        println!(
            "[WARN] {} of {} pages were skipped",
            run.failed_pages.len(),
            request.pages
        );
    }
    Ok(())
}
