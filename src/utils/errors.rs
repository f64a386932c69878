use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request to '{url}' failed: {reason}")]
    Network { url: String, reason: String },

    #[error("Request to '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("No cached record for '{0}'")]
    NotFound(String),

    #[error("Malformed response from '{url}': {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("Invalid request header '{0}' (expected 'Name: value')")]
    InvalidHeader(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for transport failures, timeouts and non-success statuses.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::Network { .. } | Error::HttpStatus { .. } | Error::HttpClient(_)
        )
    }
}
