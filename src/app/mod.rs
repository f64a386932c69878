mod film;
mod search;

use std::sync::Arc;

use crate::config::Config;
use crate::core::cache::ResultCache;
use crate::core::fetch::{HttpFetcher, PageFetcher};
use crate::utils::Result;

/// Entry point for film lookups and searches.
///
/// One instance owns the HTTP client and the film cache; share it behind an
/// `Arc` to reuse both across calls.
pub struct Imdb {
    config: Config,
    fetcher: Arc<dyn PageFetcher>,
    cache: ResultCache,
}

impl Imdb {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Build with a custom fetcher (proxies, fixtures, ...).
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn PageFetcher>) -> Self {
        let cache = ResultCache::from_config(&config.cache);
        Self {
            config,
            fetcher,
            cache,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    fn site_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.site.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
