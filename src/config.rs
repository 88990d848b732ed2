//! Runtime configuration.
//!
//! Settings come from built-in defaults, optionally overridden by a YAML file
//! passed with `--config`, then by individual command-line flags.
//!
//! ```yaml
//! user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"
//! timeout_secs: 10
//! site_origin: "https://www.youporn.com"
//! max_items_per_page: 20
//! max_pages: 20
//! output_basename: "categoria_dettagliata"
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.youporn.com";
pub const DEFAULT_MAX_ITEMS_PER_PAGE: usize = 20;
pub const DEFAULT_MAX_PAGES: u32 = 20;
pub const DEFAULT_OUTPUT_BASENAME: &str = "categoria_dettagliata";

/// Settings shared by the fetcher, the extractors and the exporters.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImporterConfig {
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Origin that relative watch links are resolved against.
    pub site_origin: String,
    /// Cards taken from each listing page, in document order.
    pub max_items_per_page: usize,
    /// Upper bound on pages per run, enforced by the front end.
    pub max_pages: u32,
    /// Export file name without extension.
    pub output_basename: String,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            max_items_per_page: DEFAULT_MAX_ITEMS_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
            output_basename: DEFAULT_OUTPUT_BASENAME.to_string(),
        }
    }
}

impl ImporterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Parse a YAML document; keys that are not present keep their defaults.
pub fn parse_config(yaml: &str, path: &str) -> Result<ImporterConfig, ConfigError> {
    serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Load configuration from `path`, or return the defaults when `path` is `None`.
#[instrument(level = "info")]
pub fn load_config(path: Option<&str>) -> Result<ImporterConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(ImporterConfig::default());
    };
    let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    let config = parse_config(&yaml, path)?;
    info!(path, "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = parse_config("timeout_secs: 3\nmax_pages: 5\n", "inline").unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.max_pages, 5);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.site_origin, DEFAULT_SITE_ORIGIN);
        assert_eq!(config.output_basename, DEFAULT_OUTPUT_BASENAME);
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let err = parse_config("timeout_secs: [not a number", "bad.yaml").unwrap_err();
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ImporterConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_config(Some("/nonexistent/listing_importer.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
