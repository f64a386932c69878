//! Recording fetcher for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Page, PageFetcher};
use crate::utils::{Error, Result};

/// Serves canned bodies by exact URL; anything else is a 404.
#[derive(Debug, Default)]
pub struct MockFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<(String, Vec<String>)>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    /// Every requested URL, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn headers_for(&self, url: &str) -> Option<Vec<String>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, h)| h.clone())
    }

    pub fn count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| u == url)
            .count()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str, headers: &[String]) -> Result<Page> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), headers.to_vec()));
        match self.pages.get(url) {
            Some(body) => Ok(Page {
                url: url.to_string(),
                body: body.clone(),
            }),
            None => Err(Error::HttpStatus {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
