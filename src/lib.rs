//! Film metadata scraped from IMDb pages, with embeddable videos from a
//! video-hosting search API.
//!
//! ```no_run
//! # async fn demo() -> imdb_scrape::Result<()> {
//! use imdb_scrape::{Config, Imdb, OptionsOverrides};
//!
//! let imdb = Imdb::new(Config::init()?)?;
//! let film = imdb.film("tt0133093", OptionsOverrides::default()).await?;
//! let hits = imdb.search("the matrix", OptionsOverrides::default().category("tt")).await?;
//! println!("{} / {} titles", film.title, hits.titles.len());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::app::Imdb;
pub use crate::config::Config;
pub use crate::core::options::{Options, OptionsOverrides};
pub use crate::models::{FilmRecord, SearchRecord};
pub use crate::utils::logging::init_logging;
pub use crate::utils::{Error, Result};
