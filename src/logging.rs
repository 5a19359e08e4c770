//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "PATHWAY_CAROUSEL_LOG";

/// Install the global fmt subscriber.
///
/// Returns false if a subscriber was already installed, which makes repeated
/// calls from tests harmless.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
