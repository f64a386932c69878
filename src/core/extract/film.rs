use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use super::{clean_text, first_attr, first_text};
use crate::models::{CastMember, TechSpec, Trailer};

static TITLE_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"h1[data-testid="hero__pageTitle"]"#).unwrap());
static YEAR_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href*="/releaseinfo"]"#).unwrap());
static METADATA_ITEM_SEL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"ul[data-testid="hero-title-block__metadata"] > li"#).unwrap()
});
static PLOT_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"span[data-testid="plot-xl"]"#).unwrap());
static RATING_SEL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"div[data-testid="hero-rating-bar__aggregate-rating__score"] > span"#)
        .unwrap()
});
static RATING_VOTES_SEL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"div[data-testid="hero-rating-bar__aggregate-rating__score"] + div"#)
        .unwrap()
});
static POSTER_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[data-testid="hero-media__poster"] img"#).unwrap());
static TRAILER_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[data-testid="video-player-slate-overlay"]"#).unwrap());

static CAST_ITEM_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"div[data-testid="title-cast-item"]"#).unwrap());
static CAST_ACTOR_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[data-testid="title-cast-item__actor"]"#).unwrap());
static CAST_CHARACTER_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[data-testid="cast-item-characters-link"] span"#).unwrap());
static IMG_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

static SPEC_ITEM_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"li[data-testid^="title-techspec_"]"#).unwrap());
static SPEC_LABEL_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".ipc-metadata-list-item__label").unwrap());
static SPEC_VALUE_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".ipc-metadata-list-item__list-content-item").unwrap());
static SPEC_CONTENT_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".ipc-metadata-list-item__content-container").unwrap());

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(18|19|20)\d{2}\b").unwrap());
static LENGTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+h( \d+m)?|\d+m)$").unwrap());
static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"vi\d+").unwrap());
static NAME_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"nm\d+").unwrap());

pub(super) fn title(html: &Html) -> String {
    first_text(html.select(&TITLE_SEL))
}

pub(super) fn year(html: &Html) -> String {
    html.select(&YEAR_SEL)
        .map(clean_text)
        .find_map(|t| YEAR_RE.find(&t).map(|m| m.as_str().to_string()))
        .unwrap_or_default()
}

/// Runtime as printed in the title block, e.g. "2h 16m".
pub(super) fn length(html: &Html) -> String {
    html.select(&METADATA_ITEM_SEL)
        .map(clean_text)
        .find(|t| LENGTH_RE.is_match(t))
        .unwrap_or_default()
}

pub(super) fn plot(html: &Html) -> String {
    first_text(html.select(&PLOT_SEL))
}

pub(super) fn rating(html: &Html) -> String {
    first_text(html.select(&RATING_SEL))
}

pub(super) fn rating_votes(html: &Html) -> String {
    first_text(html.select(&RATING_VOTES_SEL))
}

pub(super) fn poster(html: &Html) -> String {
    first_attr(html.select(&POSTER_SEL), "src")
}

pub(super) fn trailer(html: &Html, origin: &str) -> Trailer {
    let href = first_attr(html.select(&TRAILER_SEL), "href");
    match VIDEO_ID_RE.find(&href) {
        Some(m) => Trailer {
            id: m.as_str().to_string(),
            link: format!("{}/video/{}/", origin, m.as_str()),
        },
        None => Trailer::default(),
    }
}

pub(super) fn cast(html: &Html) -> Vec<CastMember> {
    html.select(&CAST_ITEM_SEL)
        .filter_map(|item| {
            let actor_link = item.select(&CAST_ACTOR_SEL).next()?;
            let actor = clean_text(actor_link);
            if actor.is_empty() {
                return None;
            }
            let actor_id = actor_link
                .value()
                .attr("href")
                .and_then(|href| NAME_ID_RE.find(href))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            Some(CastMember {
                actor,
                actor_id,
                character: first_text(item.select(&CAST_CHARACTER_SEL)),
                image: first_attr(item.select(&IMG_SEL), "src"),
            })
        })
        .collect()
}

pub(super) fn technical_specs(html: &Html) -> Vec<TechSpec> {
    html.select(&SPEC_ITEM_SEL)
        .filter_map(|item| {
            let label = first_text(item.select(&SPEC_LABEL_SEL));
            if label.is_empty() {
                return None;
            }
            let values: Vec<String> = item
                .select(&SPEC_VALUE_SEL)
                .map(clean_text)
                .filter(|v| !v.is_empty())
                .collect();
            let value = if values.is_empty() {
                first_text(item.select(&SPEC_CONTENT_SEL))
            } else {
                values.join(", ")
            };
            Some(TechSpec(label, value))
        })
        .collect()
}
