//! Secondary video-hosting search: ids in, embed URLs out.

use serde::Deserialize;

use crate::config::VideoConfig;
use crate::core::fetch::PageFetcher;
use crate::utils::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
struct VideoListResponse {
    list: Vec<VideoEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct VideoEntry {
    id: String,
}

pub fn search_url(config: &VideoConfig, normalized_term: &str) -> String {
    format!(
        "{}/videos?search={}&fields=id&country={}",
        config.api_base.trim_end_matches('/'),
        normalized_term,
        config.country
    )
}

fn request_headers(config: &VideoConfig) -> Vec<String> {
    vec![
        "Content-Type: application/json".to_string(),
        "Accept: application/json".to_string(),
        format!("User-Agent: {}", config.user_agent),
    ]
}

/// Parse the `{"list": [{"id": ...}, ...]}` body into embed URLs.
pub fn embed_urls(config: &VideoConfig, url: &str, body: &str) -> Result<Vec<String>> {
    let parsed: VideoListResponse =
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    Ok(parsed
        .list
        .into_iter()
        .map(|entry| format!("{}{}", config.embed_base, entry.id))
        .collect())
}

/// Query the video API for `normalized_term` (already percent-encoded).
pub async fn find_videos(
    fetcher: &dyn PageFetcher,
    config: &VideoConfig,
    normalized_term: &str,
) -> Result<Vec<String>> {
    let url = search_url(config, normalized_term);
    let page = fetcher.fetch(&url, &request_headers(config)).await?;
    let links = embed_urls(config, &url, &page.body)?;
    tracing::debug!("Found {} videos at {}", links.len(), url);
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::mock::MockFetcher;

    #[test]
    fn builds_search_url() {
        let cfg = VideoConfig::default();
        assert_eq!(
            search_url(&cfg, "the%20matrix"),
            "https://api.dailymotion.com/videos?search=the%20matrix&fields=id&country=us"
        );
    }

    #[test]
    fn maps_ids_to_embed_urls() {
        let cfg = VideoConfig::default();
        let links = embed_urls(
            &cfg,
            "u",
            r#"{"page":1,"list":[{"id":"x7tgad0"},{"id":"x8abc12"}],"has_more":true}"#,
        )
        .unwrap();
        assert_eq!(
            links,
            vec![
                "https://www.dailymotion.com/embed/video/x7tgad0",
                "https://www.dailymotion.com/embed/video/x8abc12",
            ]
        );
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let cfg = VideoConfig::default();
        for body in [r#"{"error": "nope"}"#, r#"{"list": [{"title": "x"}]}"#, "<html>"] {
            assert!(matches!(
                embed_urls(&cfg, "u", body),
                Err(Error::MalformedResponse { .. })
            ));
        }
    }

    #[tokio::test]
    async fn sends_json_headers() {
        let cfg = VideoConfig::default();
        let url = search_url(&cfg, "alien");
        let fetcher = MockFetcher::new().with_page(url.clone(), r#"{"list":[]}"#);

        let links = find_videos(&fetcher, &cfg, "alien").await.unwrap();
        assert!(links.is_empty());

        let headers = fetcher.headers_for(&url).unwrap();
        assert!(headers.contains(&"Accept: application/json".to_string()));
        assert!(headers.contains(&"Content-Type: application/json".to_string()));
        assert!(headers.iter().any(|h| h.starts_with("User-Agent: Mozilla/5.0")));
    }
}
