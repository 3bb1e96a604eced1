//! Subscriber installation, span macros and log events.
//!
//! Every initializer uses `try_init`: the first call in a process installs
//! the global subscriber, later calls return `false` and change nothing.

pub mod events;
pub mod spans;

use shroud_core::config::defaults::DEFAULT_LOG_LEVEL;
use shroud_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides any configured filter.
pub const LOG_ENV: &str = "SHROUD_LOG";

fn filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// JSON output with thread ids and source locations, filtered by
/// `SHROUD_LOG` (default `info`).
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or(DEFAULT_LOG_LEVEL))
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// JSON output with an explicit filter string, ignoring the environment.
/// Meant for tests and embedding.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

/// Level and format from configuration; `SHROUD_LOG` still wins when set.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_or(&config.log_level))
        .with_target(true);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    installed.is_ok()
}
