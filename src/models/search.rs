use serde::{Deserialize, Serialize};

/// Combined result of a site search and a video lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Embed URLs from the video API.
    pub movies: Vec<String>,
    pub titles: Vec<TitleEntry>,
    pub names: Vec<NameEntry>,
    pub companies: Vec<CompanyEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleEntry {
    pub id: String,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub id: String,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEntry {
    pub id: String,
    pub name: String,
}
