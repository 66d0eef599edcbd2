//! Logging setup based on `tracing-subscriber`.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber with the default filter.
///
/// `RUST_LOG` takes precedence when set. Calling this more than once is a no-op.
pub fn init() {
    init_with(&Config::default());
}

/// Install a fmt subscriber using the filter from `config`.
pub fn init_with(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::trace!("tracing subscriber already installed");
    }
}
