//! Logging setup
//!
//! Events go to stderr so stdout stays reserved for command output. The
//! filter comes from `REGPATH_LOG`, then `RUST_LOG`, then the `-v` count.

use crate::context::VerbosityLevel;
use std::{io, sync::Once};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Environment variable holding an explicit filter directive
pub const LOG_ENV: &str = "REGPATH_LOG";

/// Initialize the tracing subscriber. Later calls are no-ops.
pub fn init(verbosity: VerbosityLevel) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .with(create_env_filter(verbosity))
            .init();

        tracing::debug!(filter = verbosity.as_filter(), "Logging initialized");
    });
}

/// Create an EnvFilter based on environment variables and verbosity
fn create_env_filter(verbosity: VerbosityLevel) -> EnvFilter {
    let fallback = || EnvFilter::new(verbosity.as_filter());

    if let Ok(directives) = std::env::var(LOG_ENV) {
        return EnvFilter::try_new(&directives).unwrap_or_else(|_| fallback());
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
}

/// Check if logging has been initialized
#[cfg(test)]
fn is_initialized() -> bool {
    INIT.is_completed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_multiple_calls_safe() {
        init(VerbosityLevel::Normal);
        init(VerbosityLevel::Trace);
        assert!(is_initialized());
    }

    #[test]
    fn test_filter_follows_verbosity_without_env() {
        if std::env::var(LOG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let filter = create_env_filter(VerbosityLevel::VeryVerbose);
        assert_eq!(filter.to_string(), "debug");
    }
}
