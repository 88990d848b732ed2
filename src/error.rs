//! Error types for the import pipeline.
//!
//! Per-field extraction never fails (missing markup degrades to `None`), so
//! the only surfaced errors are network failures, export failures and
//! configuration loading failures.

use reqwest::StatusCode;
use thiserror::Error;

/// A page could not be retrieved.
///
/// Carries the URL that was requested so callers running a multi-page import
/// can report exactly which page failed.
#[derive(Debug, Error)]
#[error("failed to fetch {url}: {cause}")]
pub struct FetchError {
    /// The URL that was requested.
    pub url: String,
    /// What went wrong.
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(url: impl Into<String>, cause: impl Into<FetchCause>) -> Self {
        Self {
            url: url.into(),
            cause: cause.into(),
        }
    }
}

/// Underlying reason for a [`FetchError`].
#[derive(Debug, Error)]
pub enum FetchCause {
    /// DNS, connection, TLS, timeout or body decoding failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned {0}")]
    Status(StatusCode),
}

impl From<StatusCode> for FetchCause {
    fn from(status: StatusCode) -> Self {
        FetchCause::Status(status)
    }
}

/// Writing an export file failed.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format was not compiled into this build.
    ///
    /// Recoverable: CSV export is always available.
    #[error("{format} export is not available in this build")]
    Unavailable { format: &'static str },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[cfg(feature = "xlsx")]
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Loading the YAML configuration file failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
