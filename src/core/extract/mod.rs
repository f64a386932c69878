//! Field extraction from fetched pages.
//!
//! Each [`Field`] maps to exactly one extraction function. Markup that is not
//! there yields an empty value rather than an error.

mod film;
mod search;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::core::fetch::Page;
use crate::models::{CastMember, CompanyEntry, NameEntry, TechSpec, TitleEntry, Trailer};

static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Year,
    Length,
    Plot,
    Rating,
    RatingVotes,
    Poster,
    Trailer,
    Cast,
    TechnicalSpecs,
    Titles,
    Names,
    Companies,
}

impl Field {
    /// Fields read from a film's main page, in record order.
    pub const FILM_PAGE: [Field; 9] = [
        Field::Title,
        Field::Year,
        Field::Length,
        Field::Plot,
        Field::Rating,
        Field::RatingVotes,
        Field::Poster,
        Field::Trailer,
        Field::Cast,
    ];

    /// Fields read from the find page.
    pub const SEARCH_PAGE: [Field; 3] = [Field::Titles, Field::Names, Field::Companies];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Trailer(Trailer),
    Cast(Vec<CastMember>),
    TechSpecs(Vec<TechSpec>),
    Titles(Vec<TitleEntry>),
    Names(Vec<NameEntry>),
    Companies(Vec<CompanyEntry>),
    Links(Vec<String>),
}

impl FieldValue {
    /// Number of entries for list-shaped values, 0 otherwise.
    pub fn count(&self) -> usize {
        match self {
            FieldValue::Text(_) | FieldValue::Trailer(_) => 0,
            FieldValue::Cast(v) => v.len(),
            FieldValue::TechSpecs(v) => v.len(),
            FieldValue::Titles(v) => v.len(),
            FieldValue::Names(v) => v.len(),
            FieldValue::Companies(v) => v.len(),
            FieldValue::Links(v) => v.len(),
        }
    }
}

pub fn count(value: &FieldValue) -> usize {
    value.count()
}

/// A parsed page. Not `Send`: parse, extract and drop it between awaits.
pub struct Document {
    html: Html,
    origin: String,
}

impl Document {
    pub fn parse(page: &Page) -> Self {
        Self {
            html: Html::parse_document(&page.body),
            origin: origin_of(&page.url).to_string(),
        }
    }

    pub fn get(&self, field: Field) -> FieldValue {
        let html = &self.html;
        match field {
            Field::Title => FieldValue::Text(film::title(html)),
            Field::Year => FieldValue::Text(film::year(html)),
            Field::Length => FieldValue::Text(film::length(html)),
            Field::Plot => FieldValue::Text(film::plot(html)),
            Field::Rating => FieldValue::Text(film::rating(html)),
            Field::RatingVotes => FieldValue::Text(film::rating_votes(html)),
            Field::Poster => FieldValue::Text(film::poster(html)),
            Field::Trailer => FieldValue::Trailer(film::trailer(html, &self.origin)),
            Field::Cast => FieldValue::Cast(film::cast(html)),
            Field::TechnicalSpecs => FieldValue::TechSpecs(film::technical_specs(html)),
            Field::Titles => FieldValue::Titles(search::titles(html)),
            Field::Names => FieldValue::Names(search::names(html)),
            Field::Companies => FieldValue::Companies(search::companies(html)),
        }
    }
}

/// "https://host/path?x" -> "https://host"
fn origin_of(url: &str) -> &str {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    match url[after_scheme..].find('/') {
        Some(i) => &url[..after_scheme + i],
        None => url,
    }
}

fn clean_text(el: ElementRef) -> String {
    let raw = el.text().collect::<String>();
    WS_RE.replace_all(raw.trim(), " ").into_owned()
}

fn first_text<'a>(scope: impl Iterator<Item = ElementRef<'a>>) -> String {
    scope
        .map(clean_text)
        .find(|t| !t.is_empty())
        .unwrap_or_default()
}

fn first_attr<'a>(mut scope: impl Iterator<Item = ElementRef<'a>>, attr: &str) -> String {
    scope
        .find_map(|el| el.value().attr(attr).map(|v| v.trim().to_string()))
        .unwrap_or_default()
}
