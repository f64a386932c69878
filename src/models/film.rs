use serde::{Deserialize, Serialize};

/// A scraped film page. Field order is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmRecord {
    pub id: String,
    pub title: String,
    pub year: String,
    pub length: String,
    pub plot: String,
    pub rating: String,
    pub rating_votes: String,
    pub poster: String,
    pub trailer: Trailer,
    pub cast: Vec<CastMember>,
    pub technical_specs: Vec<TechSpec>,
}

impl FilmRecord {
    /// The "film not found" default carries no id.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    pub id: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub actor: String,
    pub actor_id: String,
    pub character: String,
    pub image: String,
}

/// `[label, value]` pair from the technical specs page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechSpec(pub String, pub String);
