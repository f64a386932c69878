use super::Imdb;
use crate::core::extract::{Document, Field, FieldValue};
use crate::core::options::{Options, OptionsOverrides};
use crate::core::response::{RecordKey, RecordKind, ResponseBuilder};
use crate::models::FilmRecord;
use crate::utils::Result;

const FILM_ID_PREFIX: &str = "tt";

impl Imdb {
    /// Fetch a film by id (`tt…`) or by free-text title.
    ///
    /// A title is resolved to the first `tt` search hit; when there is none the
    /// empty default record is returned (see [`FilmRecord::is_empty`]).
    /// Fetch failures abort the call and nothing is cached.
    pub async fn film(
        &self,
        film_id: &str,
        overrides: OptionsOverrides,
    ) -> Result<FilmRecord> {
        let options = Options::resolve(overrides);

        let Some(film_id) = self.resolve_film_id(film_id, &options).await? else {
            return Ok(ResponseBuilder::default_record(RecordKind::Film)
                .into_film()
                .unwrap_or_default());
        };

        if options.cache {
            if let Some(record) = self.cache.lookup(&film_id).await {
                tracing::debug!("Cache hit for '{}'", film_id);
                return Ok(record);
            }
        }

        let mut response = ResponseBuilder::new();
        response.add(RecordKey::Id, FieldValue::Text(film_id.clone()));

        let page = self
            .fetcher
            .fetch(&self.title_url(&film_id, None), &options.request_headers)
            .await?;
        {
            let doc = Document::parse(&page);
            for field in Field::FILM_PAGE {
                response.add(field, doc.get(field));
            }
        }

        if options.include_tech_specs {
            let specs_page = self
                .fetcher
                .fetch(
                    &self.title_url(&film_id, Some("technical")),
                    &options.request_headers,
                )
                .await?;
            let doc = Document::parse(&specs_page);
            response.add(Field::TechnicalSpecs, doc.get(Field::TechnicalSpecs));
        } else {
            response.add(Field::TechnicalSpecs, FieldValue::TechSpecs(Vec::new()));
        }

        let record = response.into_film();
        tracing::info!(
            "Scraped '{}' ({}) with {} cast members",
            record.title,
            film_id,
            record.cast.len()
        );

        if options.cache {
            self.cache.add(&film_id, record.clone()).await;
        }
        Ok(record)
    }

    /// `tt…` ids pass through; anything else goes through a title search.
    async fn resolve_film_id(
        &self,
        film_id: &str,
        options: &Options,
    ) -> Result<Option<String>> {
        if film_id.starts_with(FILM_ID_PREFIX) {
            return Ok(Some(film_id.to_string()));
        }

        let found = self
            .search(
                film_id,
                OptionsOverrides::default()
                    .category(FILM_ID_PREFIX)
                    .request_headers(options.request_headers.clone()),
            )
            .await?;

        match found.titles.into_iter().next() {
            Some(first) => {
                tracing::info!("Resolved '{}' to {} ({})", film_id, first.id, first.title);
                Ok(Some(first.id))
            }
            None => {
                tracing::info!("No title found for '{}'", film_id);
                Ok(None)
            }
        }
    }

    fn title_url(&self, film_id: &str, sub_page: Option<&str>) -> String {
        let id = urlencoding::encode(film_id);
        match sub_page {
            Some(sub) => self.site_url(&format!("title/{id}/{sub}")),
            None => self.site_url(&format!("title/{id}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::fixtures;
    use super::*;
    use crate::config::Config;
    use crate::core::fetch::mock::MockFetcher;
    use crate::models::TechSpec;
    use crate::utils::Error;

    const MATRIX: &str = "https://www.imdb.com/title/tt0133093";
    const MATRIX_TECH: &str = "https://www.imdb.com/title/tt0133093/technical";

    fn matrix_fetcher() -> Arc<MockFetcher> {
        Arc::new(
            MockFetcher::new()
                .with_page(MATRIX, fixtures::TITLE_PAGE)
                .with_page(MATRIX_TECH, fixtures::TECH_PAGE),
        )
    }

    #[tokio::test]
    async fn populates_every_field() {
        let fetcher = matrix_fetcher();
        let imdb = Imdb::with_fetcher(Config::default(), fetcher.clone());

        let film = imdb.film("tt0133093", OptionsOverrides::default()).await.unwrap();

        assert_eq!(film.id, "tt0133093");
        assert_eq!(film.title, "The Matrix");
        assert_eq!(film.year, "1999");
        assert_eq!(film.length, "2h 16m");
        assert_eq!(film.plot, "Neo learns the truth.");
        assert_eq!(film.rating, "8.7");
        assert_eq!(film.rating_votes, "2.1M");
        assert_eq!(film.poster, "https://img.test/matrix.jpg");
        assert_eq!(film.trailer.id, "vi1032782617");
        assert_eq!(film.trailer.link, "https://www.imdb.com/video/vi1032782617/");
        assert_eq!(film.cast.len(), 1);
        assert_eq!(film.cast[0].character, "Neo");
        assert_eq!(
            film.technical_specs,
            vec![TechSpec("Runtime".to_string(), "2h 16m (136 min)".to_string())]
        );
        assert_eq!(fetcher.requested_urls(), vec![MATRIX, MATRIX_TECH]);
    }

    #[tokio::test]
    async fn ids_never_trigger_a_search() {
        let fetcher = matrix_fetcher();
        let imdb = Imdb::with_fetcher(Config::default(), fetcher.clone());

        imdb.film("tt0133093", OptionsOverrides::default().tech_specs(false))
            .await
            .unwrap();

        assert!(fetcher.requested_urls().iter().all(|u| !u.contains("/find")));
    }

    #[tokio::test]
    async fn second_call_is_served_from_cache() {
        let fetcher = matrix_fetcher();
        let imdb = Imdb::with_fetcher(Config::default(), fetcher.clone());

        let first = imdb.film("tt0133093", OptionsOverrides::default()).await.unwrap();
        let second = imdb.film("tt0133093", OptionsOverrides::default()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.count(MATRIX), 1);
        assert_eq!(fetcher.count(MATRIX_TECH), 1);
        assert_eq!(fetcher.requested_urls().len(), 2);
        assert!(imdb.cache().has("tt0133093").await);
    }

    #[tokio::test]
    async fn cache_disabled_fetches_every_time() {
        let fetcher = matrix_fetcher();
        let imdb = Imdb::with_fetcher(Config::default(), fetcher.clone());

        for _ in 0..2 {
            imdb.film("tt0133093", OptionsOverrides::default().cache(false))
                .await
                .unwrap();
        }

        assert_eq!(fetcher.count(MATRIX), 2);
        assert!(imdb.cache().is_empty().await);
    }

    #[tokio::test]
    async fn tech_specs_disabled_skips_sub_page() {
        let fetcher = matrix_fetcher();
        let imdb = Imdb::with_fetcher(Config::default(), fetcher.clone());

        let film = imdb
            .film("tt0133093", OptionsOverrides::default().tech_specs(false))
            .await
            .unwrap();

        assert!(film.technical_specs.is_empty());
        assert_eq!(fetcher.count(MATRIX_TECH), 0);
        assert_eq!(film.title, "The Matrix");
    }

    #[tokio::test]
    async fn title_is_resolved_through_first_search_hit() {
        let find = "https://www.imdb.com/find?q=the%20matrix&s=tt";
        let fetcher = Arc::new(
            MockFetcher::new()
                .with_page(find, fixtures::FIND_PAGE)
                .with_page(MATRIX, fixtures::TITLE_PAGE)
                .with_page(MATRIX_TECH, fixtures::TECH_PAGE),
        );
        let imdb = Imdb::with_fetcher(Config::default(), fetcher.clone());

        let film = imdb.film("the matrix", OptionsOverrides::default()).await.unwrap();

        assert_eq!(film.id, "tt0133093");
        assert_eq!(fetcher.count(find), 1);
        assert_eq!(fetcher.count(MATRIX), 1);
        assert!(imdb.cache().has("tt0133093").await);
    }

    #[tokio::test]
    async fn title_resolution_forwards_request_headers() {
        let find = "https://www.imdb.com/find?q=the%20matrix&s=tt";
        let fetcher = Arc::new(
            MockFetcher::new()
                .with_page(find, fixtures::FIND_PAGE)
                .with_page(MATRIX, fixtures::TITLE_PAGE)
                .with_page(MATRIX_TECH, fixtures::TECH_PAGE),
        );
        let imdb = Imdb::with_fetcher(Config::default(), fetcher.clone());

        imdb.film(
            "the matrix",
            OptionsOverrides::default().request_headers(["Accept-Language: fr-FR"]),
        )
        .await
        .unwrap();

        let expected = Some(vec!["Accept-Language: fr-FR".to_string()]);
        assert_eq!(fetcher.headers_for(find), expected);
        assert_eq!(fetcher.headers_for(MATRIX), expected);
        assert_eq!(fetcher.headers_for(MATRIX_TECH), expected);
    }

    #[tokio::test]
    async fn unknown_title_returns_empty_default_without_fetching_pages() {
        let find = "https://www.imdb.com/find?q=zzzz%20qqqq&s=tt";
        let fetcher = Arc::new(MockFetcher::new().with_page(find, fixtures::EMPTY_FIND_PAGE));
        let imdb = Imdb::with_fetcher(Config::default(), fetcher.clone());

        let film = imdb.film("zzzz qqqq", OptionsOverrides::default()).await.unwrap();

        assert!(film.is_empty());
        assert_eq!(film, FilmRecord::default());
        assert!(fetcher
            .requested_urls()
            .iter()
            .all(|u| !u.contains("/title/")));
        assert!(imdb.cache().is_empty().await);
    }

    #[tokio::test]
    async fn main_page_failure_propagates_and_caches_nothing() {
        let fetcher = Arc::new(MockFetcher::new());
        let imdb = Imdb::with_fetcher(Config::default(), fetcher);

        let err = imdb
            .film("tt0133093", OptionsOverrides::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
        assert!(!imdb.cache().has("tt0133093").await);
    }

    #[tokio::test]
    async fn tech_page_failure_aborts_the_call() {
        let fetcher = Arc::new(MockFetcher::new().with_page(MATRIX, fixtures::TITLE_PAGE));
        let imdb = Imdb::with_fetcher(Config::default(), fetcher);

        let err = imdb
            .film("tt0133093", OptionsOverrides::default())
            .await
            .unwrap_err();

        assert!(err.is_network());
        assert!(imdb.cache().is_empty().await);
    }

    #[tokio::test]
    async fn cached_record_is_written_to_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.cache.dir = Some(tmp.path().to_string_lossy().into_owned());

        let imdb = Imdb::with_fetcher(config.clone(), matrix_fetcher());
        let first = imdb.film("tt0133093", OptionsOverrides::default()).await.unwrap();

        // a fresh instance with no pages at all is served from the file
        let offline = Imdb::with_fetcher(config, Arc::new(MockFetcher::new()));
        let second = offline.film("tt0133093", OptionsOverrides::default()).await.unwrap();
        assert_eq!(first, second);
    }
}
