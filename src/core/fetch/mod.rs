#[cfg(test)]
pub mod mock;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::utils::{Error, Result};

/// Raw body of a fetched URL.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub body: String,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` with the given `Name: value` header lines.
    ///
    /// Transport errors, timeouts and non-success statuses are errors.
    async fn fetch(&self, url: &str, headers: &[String]) -> Result<Page>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &crate::config::Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .user_agent(config.http.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, headers: &[String]) -> Result<Page> {
        let header_map = parse_headers(headers)?;
        tracing::debug!("GET {} ({} extra headers)", url, header_map.len());

        let resp = self
            .client
            .get(url)
            .headers(header_map)
            .send()
            .await
            .map_err(|e| Error::Network {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| Error::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!("Fetched {} ({}, {} bytes)", url, status, body.len());

        Ok(Page {
            url: url.to_string(),
            body,
        })
    }
}

/// Turn `Name: value` lines into a header map. Later lines win on duplicates.
pub fn parse_headers(lines: &[String]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            return Err(Error::InvalidHeader(line.clone()));
        };
        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|_| Error::InvalidHeader(line.clone()))?;
        let value =
            HeaderValue::from_str(value.trim()).map_err(|_| Error::InvalidHeader(line.clone()))?;
        map.insert(name, value);
    }
    Ok(map)
}
