use super::Imdb;
use crate::core::extract::{Document, Field, FieldValue};
use crate::core::options::{Options, OptionsOverrides};
use crate::core::response::{RecordKey, ResponseBuilder};
use crate::core::video;
use crate::models::SearchRecord;
use crate::utils::query::normalize_term;
use crate::utils::Result;

impl Imdb {
    /// Search the site for titles, names and companies, plus embeddable
    /// videos for the same term.
    ///
    /// A failing find page aborts the search. A failing video lookup yields
    /// an empty `movies` list unless `video.strict` is set.
    pub async fn search(
        &self,
        term: &str,
        overrides: OptionsOverrides,
    ) -> Result<SearchRecord> {
        let options = Options::resolve(overrides);
        let query = normalize_term(term);

        let url = self.find_url(&query, &options.category);
        tracing::info!("Searching: {}", url);
        let page = self.fetcher.fetch(&url, &options.request_headers).await?;

        let movies =
            match video::find_videos(self.fetcher.as_ref(), &self.config.video, &query).await {
                Ok(links) => links,
                Err(e) if !self.config.video.strict => {
                    tracing::warn!(
                        "Video lookup failed for '{}', continuing without videos: {e}",
                        query
                    );
                    Vec::new()
                }
                Err(e) => return Err(e),
            };

        let mut response = ResponseBuilder::new();
        response.add(RecordKey::Movies, FieldValue::Links(movies));
        let doc = Document::parse(&page);
        for field in Field::SEARCH_PAGE {
            response.add(field, doc.get(field));
        }

        let record = response.into_search();
        tracing::info!(
            "Search '{}': {} titles, {} names, {} companies, {} videos",
            query,
            record.titles.len(),
            record.names.len(),
            record.companies.len(),
            record.movies.len()
        );
        Ok(record)
    }

    fn find_url(&self, query: &str, category: &str) -> String {
        self.site_url(&format!(
            "find?q={}&s={}",
            query,
            urlencoding::encode(category)
        ))
    }
}
