//! `tracing` subscriber bootstrap for applications embedding the library

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::GeocodingConfig;

/// Install a formatted stdout subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns `false` when a
/// global subscriber was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(resolve_filter(env_directives.as_deref(), default_filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Install the subscriber with the configured `log_filter` as fallback
pub fn init_logging_from(config: &GeocodingConfig) -> bool {
    init_logging(&config.log_filter)
}

/// Environment directives win when they parse; otherwise `default_filter` applies
fn resolve_filter(env_directives: Option<&str>, default_filter: &str) -> EnvFilter {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}
