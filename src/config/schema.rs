//! TOML configuration schema types.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so any subset of the file is valid. Durations use
//! human-readable strings (e.g. `"1825d"`) parsed by `humantime`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::error::ConfigError;
use crate::config::xdg;
use crate::dashboard::DashboardOptions;
use crate::preferences::{FileStore, DEFAULT_PREFIX};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration:
/// ```toml
/// [dashboard]
/// [store]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Options of the dashboard instance.
    pub dashboard: DashboardOptions,
    /// Fallback preference store.
    pub store: StoreConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

impl Config {
    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.columns == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.columns".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.store.expiry_duration()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Fallback store settings, used when no load/save hook is configured.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding stored preferences. Empty means the XDG data dir.
    /// A leading `~` is expanded.
    pub dir: String,
    /// Lifetime of a stored entry, refreshed on every save.
    pub expiry: String,
    /// File name prefix of stored entries.
    pub prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            expiry: "1825d".to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    /// Directory the store writes to.
    pub fn resolved_dir(&self) -> PathBuf {
        if self.dir.is_empty() {
            xdg::data_dir()
        } else {
            xdg::expand_tilde(&self.dir)
        }
    }

    /// Parsed `expiry`.
    pub fn expiry_duration(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(&self.expiry).map_err(|e| ConfigError::InvalidValue {
            field: "store.expiry".to_string(),
            message: e.to_string(),
        })
    }

    /// Builds the file store these settings describe.
    pub fn file_store(&self) -> Result<FileStore, ConfigError> {
        Ok(FileStore::new(self.resolved_dir())
            .with_prefix(self.prefix.clone())
            .with_expiry(self.expiry_duration()?))
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Log output settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Verbosity when `DASHLAY_LOG` is unset.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
