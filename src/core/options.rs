use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_CATEGORY: &str = "all";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "Accept-Language: en-US,en;q=0.5";

/// Per-call options, resolved once and passed by value down the call chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub cache: bool,
    /// Search category sent as `s=` on the find page ("all", "tt", "nm", "co", ...).
    pub category: String,
    /// Raw `Name: value` header lines sent with every page fetch.
    pub request_headers: Vec<String>,
    pub include_tech_specs: bool,
    /// Caller data carried through untouched.
    pub extensions: BTreeMap<String, Value>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cache: true,
            category: DEFAULT_CATEGORY.to_string(),
            request_headers: vec![DEFAULT_ACCEPT_LANGUAGE.to_string()],
            include_tech_specs: true,
            extensions: BTreeMap::new(),
        }
    }
}

impl Options {
    /// Overlay every field present in `overrides` on the defaults.
    pub fn resolve(overrides: OptionsOverrides) -> Self {
        let defaults = Self::default();
        Self {
            cache: overrides.cache.unwrap_or(defaults.cache),
            category: overrides.category.unwrap_or(defaults.category),
            request_headers: overrides
                .request_headers
                .unwrap_or(defaults.request_headers),
            include_tech_specs: overrides.tech_specs.unwrap_or(defaults.include_tech_specs),
            extensions: overrides.extensions,
        }
    }
}

/// Call-site overrides. Unknown top-level keys are rejected when deserializing;
/// free-form data goes under `extensions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionsOverrides {
    pub cache: Option<bool>,
    pub category: Option<String>,
    #[serde(alias = "curlHeaders")]
    pub request_headers: Option<Vec<String>>,
    pub tech_specs: Option<bool>,
    #[serde(default)]
    pub extensions: BTreeMap<String, Value>,
}

impl OptionsOverrides {
    pub fn cache(mut self, enabled: bool) -> Self {
        self.cache = Some(enabled);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn request_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn tech_specs(mut self, enabled: bool) -> Self {
        self.tech_specs = Some(enabled);
        self
    }

    pub fn extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }
}
