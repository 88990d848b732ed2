//! In-memory page source for exercising the pipeline without a network.

use crate::error::FetchError;
use crate::fetch::PageSource;
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::HashMap;

/// Serves canned bodies by exact URL; unknown URLs fail with a 404.
#[derive(Debug, Default)]
pub struct StubSource {
    pages: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    /// Every URL requested so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl PageSource for StubSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::new(url, StatusCode::NOT_FOUND))
    }
}
