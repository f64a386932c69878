use crate::core::extract::{Field, FieldValue};
use crate::models::{FilmRecord, SearchRecord};

/// Record keys, in film-then-search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Id,
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
    Movies,
    Titles,
    Names,
    Companies,
}

impl From<Field> for RecordKey {
    fn from(field: Field) -> Self {
        match field {
            Field::Title => RecordKey::Title,
            Field::Year => RecordKey::Year,
            Field::Length => RecordKey::Length,
            Field::Plot => RecordKey::Plot,
            Field::Rating => RecordKey::Rating,
            Field::RatingVotes => RecordKey::RatingVotes,
            Field::Poster => RecordKey::Poster,
            Field::Trailer => RecordKey::Trailer,
            Field::Cast => RecordKey::Cast,
            Field::TechnicalSpecs => RecordKey::TechnicalSpecs,
            Field::Titles => RecordKey::Titles,
            Field::Names => RecordKey::Names,
            Field::Companies => RecordKey::Companies,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Film,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Film(FilmRecord),
    Search(SearchRecord),
}

impl Record {
    pub fn into_film(self) -> Option<FilmRecord> {
        match self {
            Record::Film(film) => Some(film),
            Record::Search(_) => None,
        }
    }
}

/// Accumulates fields for one call. A repeated key overwrites in place.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    entries: Vec<(RecordKey, FieldValue)>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<RecordKey>, value: FieldValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Fixed empty shape for a failure path.
    pub fn default_record(kind: RecordKind) -> Record {
        match kind {
            RecordKind::Film => Record::Film(FilmRecord::default()),
            RecordKind::Search => Record::Search(SearchRecord::default()),
        }
    }

    /// Finish as a film record. Keys that were never added, or whose value
    /// has the wrong shape, stay empty.
    pub fn into_film(self) -> FilmRecord {
        let mut film = FilmRecord::default();
        for (key, value) in self.entries {
            match (key, value) {
                (RecordKey::Id, FieldValue::Text(v)) => film.id = v,
                (RecordKey::Title, FieldValue::Text(v)) => film.title = v,
                (RecordKey::Year, FieldValue::Text(v)) => film.year = v,
                (RecordKey::Length, FieldValue::Text(v)) => film.length = v,
                (RecordKey::Plot, FieldValue::Text(v)) => film.plot = v,
                (RecordKey::Rating, FieldValue::Text(v)) => film.rating = v,
                (RecordKey::RatingVotes, FieldValue::Text(v)) => film.rating_votes = v,
                (RecordKey::Poster, FieldValue::Text(v)) => film.poster = v,
                (RecordKey::Trailer, FieldValue::Trailer(v)) => film.trailer = v,
                (RecordKey::Cast, FieldValue::Cast(v)) => film.cast = v,
                (RecordKey::TechnicalSpecs, FieldValue::TechSpecs(v)) => film.technical_specs = v,
                (key, _) => {
                    tracing::debug!("Dropping {:?}: not part of a film record", key);
                }
            }
        }
        film
    }

    pub fn into_search(self) -> SearchRecord {
        let mut search = SearchRecord::default();
        for (key, value) in self.entries {
            match (key, value) {
                (RecordKey::Movies, FieldValue::Links(v)) => search.movies = v,
                (RecordKey::Titles, FieldValue::Titles(v)) => search.titles = v,
                (RecordKey::Names, FieldValue::Names(v)) => search.names = v,
                (RecordKey::Companies, FieldValue::Companies(v)) => search.companies = v,
                (key, _) => {
                    tracing::debug!("Dropping {:?}: not part of a search record", key);
                }
            }
        }
        search
    }
}
