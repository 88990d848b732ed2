//! HTTP retrieval of listing and video pages.
//!
//! The pipeline only needs "give me the markup behind this URL", so that is
//! the whole of the [`PageSource`] trait. [`HttpFetcher`] is the real
//! implementation; tests drive the pipeline with an in-memory source.
//!
//! There are no retries and no caching at this layer. One request is one
//! attempt bounded by the configured timeout.

use crate::config::ImporterConfig;
use crate::error::{FetchCause, FetchError};
use crate::utils::truncate_for_log;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Anything that can turn a URL into raw markup.
// Runs are driven on a single task, so futures need no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Retrieve the body of `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// `reqwest`-backed [`PageSource`] with a browser-like `User-Agent` and a
/// fixed per-request timeout. No cookie store is kept between requests.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher from the configured identity and timeout.
    pub fn new(config: &ImporterConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        debug!(user_agent = %config.user_agent, timeout_secs = config.timeout_secs, "HTTP client ready");
        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Non-success status");
            return Err(FetchError::new(url, FetchCause::Status(status)));
        }

        let body = response.text().await.map_err(|e| FetchError::new(url, e))?;
        info!(bytes = body.len(), "Fetched page");
        debug!(preview = %truncate_for_log(&body, 200), "Page body");
        Ok(body)
    }
}
