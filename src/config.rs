use serde::Deserialize;

impl Config {
    pub fn init() -> Result<Self, config::ConfigError> {
        // get config toml path from env, with default
        let config_path = std::env::var("IMDB_SCRAPE_CONFIG_PATH")
            .unwrap_or_else(|_| String::from("./config.toml"));

        let config = config::Config::builder()
            // Add in config toml (optional, every key has a default)
            .add_source(config::File::with_name(&config_path).required(false))
            // Add in settings from the environment (with a prefix of IMDB_SCRAPE)
            .add_source(config::Environment::with_prefix("IMDB_SCRAPE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub video: VideoConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

// ===============================================================================
// Logs
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

// ===============================================================================
// Http
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout applied to every outbound call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent sent with page fetches (request headers may override it).
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.95 Safari/537.36".to_string()
}

// ===============================================================================
// Film site
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Root of the film site, e.g. "https://www.imdb.com"
    #[serde(default = "default_site_base")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_site_base(),
        }
    }
}

fn default_site_base() -> String {
    "https://www.imdb.com".to_string()
}

// ===============================================================================
// Video API
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct VideoConfig {
    #[serde(default = "default_video_api")]
    pub api_base: String,
    /// Prefix every returned video id is appended to.
    #[serde(default = "default_embed_base")]
    pub embed_base: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// When true, a failing video lookup aborts the whole search instead of
    /// yielding an empty `movies` list.
    #[serde(default)]
    pub strict: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            api_base: default_video_api(),
            embed_base: default_embed_base(),
            country: default_country(),
            user_agent: default_user_agent(),
            strict: false,
        }
    }
}

fn default_video_api() -> String {
    "https://api.dailymotion.com".to_string()
}

fn default_embed_base() -> String {
    "https://www.dailymotion.com/embed/video/".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

// ===============================================================================
// Cache
// ===============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of film records kept in memory (LRU).
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
    /// Optional directory for `<id>.json` copies of cached records.
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            dir: None,
        }
    }
}

fn default_cache_capacity() -> usize {
    256
}
