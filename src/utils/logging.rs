use std::str::FromStr;

use tracing::Level;

/// Install the global fmt subscriber at the configured level.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging(config: &crate::config::Config) {
    let level = Level::from_str(&config.logs.level).unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
