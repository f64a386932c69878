use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use super::{clean_text, first_attr};
use crate::models::{CompanyEntry, NameEntry, TitleEntry};

static TITLE_ITEM_SEL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"section[data-testid="find-results-section-title"] li.find-result-item"#)
        .unwrap()
});
static NAME_ITEM_SEL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"section[data-testid="find-results-section-name"] li.find-result-item"#)
        .unwrap()
});
static COMPANY_ITEM_SEL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"section[data-testid="find-results-section-company"] li.find-result-item"#)
        .unwrap()
});
static LINK_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.ipc-metadata-list-summary-item__t").unwrap());
static IMG_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

static TITLE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"tt\d+").unwrap());
static NAME_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"nm\d+").unwrap());
static COMPANY_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"co\d+").unwrap());

struct ResultItem {
    id: String,
    label: String,
    image: String,
}

/// Walk one results section; entries whose link carries no id are dropped.
fn result_items(html: &Html, items: &Selector, id_re: &Regex) -> Vec<ResultItem> {
    html.select(items)
        .filter_map(|item| {
            let link = item.select(&LINK_SEL).next()?;
            let id = id_re.find(link.value().attr("href")?)?.as_str().to_string();
            Some(ResultItem {
                id,
                label: clean_text(link),
                image: first_attr(item.select(&IMG_SEL), "src"),
            })
        })
        .collect()
}

pub(super) fn titles(html: &Html) -> Vec<TitleEntry> {
    result_items(html, &TITLE_ITEM_SEL, &TITLE_ID_RE)
        .into_iter()
        .map(|r| TitleEntry {
            id: r.id,
            title: r.label,
            image: r.image,
        })
        .collect()
}

pub(super) fn names(html: &Html) -> Vec<NameEntry> {
    result_items(html, &NAME_ITEM_SEL, &NAME_ID_RE)
        .into_iter()
        .map(|r| NameEntry {
            id: r.id,
            name: r.label,
            image: r.image,
        })
        .collect()
}

pub(super) fn companies(html: &Html) -> Vec<CompanyEntry> {
    result_items(html, &COMPANY_ITEM_SEL, &COMPANY_ID_RE)
        .into_iter()
        .map(|r| CompanyEntry {
            id: r.id,
            name: r.label,
        })
        .collect()
}
