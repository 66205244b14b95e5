//! Logging initialization for `dashlay`.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `DASHLAY_LOG` environment variable. When the variable is unset or invalid
//! the `[logging] level` from the configuration file applies.
//!
//! # Usage
//!
//! ```bash
//! # Level from config (info by default)
//! dashlay show
//!
//! # Debug level
//! DASHLAY_LOG=debug dashlay layout a b c
//!
//! # Module-specific filtering
//! DASHLAY_LOG=dashboard_layout::preferences=debug,warn dashlay show
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "DASHLAY_LOG";

/// Builds the filter: `DASHLAY_LOG` if it parses, else `fallback`.
pub fn filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback.as_filter()))
}

/// Initialize the tracing subscriber, writing to stderr.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (call once, at
/// startup).
pub fn init(fallback: LogLevel) {
    fmt()
        .with_env_filter(filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
