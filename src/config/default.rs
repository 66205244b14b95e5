//! Default configuration template and file creation.
//!
//! The template is commented TOML whose values match `Config::default()`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// Commented TOML template holding every default value.
///
/// Every value here must match `Config::default()` from `schema.rs`.
/// Sections: `[dashboard]`, `[store]`, `[logging]`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# dashboard-layout configuration
#
# This file was generated with the built-in defaults.
# Modify values to customize the dashboard.
#
# Location: $XDG_CONFIG_HOME/dashboard-layout/config.toml

# ==============================================================================
# Dashboard
# ==============================================================================

[dashboard]

# Identifier of the dashboard. Stored preferences are keyed by it, so two
# dashboards with the same id share their layout.
dashboard_id = "dashboard"

# Container id of the panel listing removed widgets.
panel_id = "dashboard-panel"

# Class the host puts on every widget element.
dashboard_module_class = "dashboard-module"

# Number of columns. Must be at least 1.
# Changing it discards stored column sizes; widgets are split evenly again.
columns = 2

# ==============================================================================
# Preference store
# ==============================================================================

[store]

# Directory holding stored preferences, one JSON file per dashboard.
# Empty means $XDG_DATA_HOME/dashboard-layout. A leading "~" is expanded.
dir = ""

# Lifetime of a stored entry, refreshed on every save.
# Examples: "30d", "1y", "1825d"
expiry = "1825d"

# File name prefix: entries are named <prefix>.<dashboard_id>.json
prefix = "admin-tools"

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Verbosity used when DASHLAY_LOG is not set.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(path)
}

/// Writes the template to `path` with 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    xdg::ensure_config_dir().map_err(write_error)?;
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Config;
    use serial_test::serial;

    /// Run closure with `XDG_CONFIG_HOME` temporarily pointed at `dir`.
    fn with_xdg_config<F: FnOnce()>(dir: &Path, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", dir);
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    // -- Template validity --------------------------------------------------

    #[test]
    fn template_values_match_config_default() {
        let from_template: Config =
            toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(from_template, Config::default());
        assert!(from_template.validate().is_ok());
    }

    #[test]
    fn template_contains_all_section_headers() {
        for section in ["[dashboard]", "[store]", "[logging]"] {
            assert!(
                DEFAULT_CONFIG_TEMPLATE.contains(section),
                "missing {section} section"
            );
        }
    }

    // -- create_default_config ----------------------------------------------

    #[test]
    #[serial]
    fn create_writes_template_to_xdg_path() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let expected = tmp.path().join("dashboard-layout/config.toml");
        with_xdg_config(tmp.path(), || {
            let path = create_default_config(false).expect("should succeed");
            assert_eq!(path, expected);
            let content = fs::read_to_string(&path).expect("should read");
            assert_eq!(content, DEFAULT_CONFIG_TEMPLATE);
        });
    }

    #[test]
    #[serial]
    fn create_without_force_returns_already_exists() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(tmp.path(), || {
            create_default_config(false).expect("first call should succeed");
            let err = create_default_config(false).expect_err("should fail with AlreadyExists");
            match err {
                ConfigError::AlreadyExists { .. } => {}
                other => panic!("expected AlreadyExists, got: {other:?}"),
            }
        });
    }

    #[test]
    #[serial]
    fn create_with_force_creates_backup() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(tmp.path(), || {
            let path = create_default_config(false).expect("first call should succeed");
            fs::write(&path, "# custom content\n").expect("overwrite for test");

            let new_path = create_default_config(true).expect("force should succeed");
            assert_eq!(new_path, path);

            let backup = path.with_extension("toml.backup");
            let backup_content = fs::read_to_string(&backup).expect("read backup");
            assert_eq!(backup_content, "# custom content\n");
            let content = fs::read_to_string(&path).expect("read new");
            assert_eq!(content, DEFAULT_CONFIG_TEMPLATE);
        });
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn file_permissions_are_0600() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(tmp.path(), || {
            let path = create_default_config(false).expect("should succeed");
            let mode = fs::metadata(&path).expect("metadata").permissions().mode();
            assert_eq!(mode & 0o777, 0o600, "file should be owner-only read/write");
        });
    }
}
