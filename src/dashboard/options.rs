//! Dashboard options.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Options of one dashboard instance.
///
/// This is also the `[dashboard]` section of the configuration file. The
/// load/save hooks are not serializable and are given to
/// [`PreferenceStore::builder`](crate::preferences::PreferenceStore::builder)
/// instead.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardOptions {
    /// Container id of the removed-widgets panel.
    pub panel_id: String,
    /// Dashboard id; also the key of the fallback store entry.
    pub dashboard_id: String,
    /// Class the host uses to mark widget elements.
    pub dashboard_module_class: String,
    /// Number of columns. Must be at least 1.
    pub columns: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            panel_id: "dashboard-panel".to_string(),
            dashboard_id: "dashboard".to_string(),
            dashboard_module_class: "dashboard-module".to_string(),
            columns: 2,
        }
    }
}

impl DashboardOptions {
    /// Options for `dashboard_id` with defaults elsewhere.
    pub fn new(dashboard_id: impl Into<String>) -> Self {
        Self {
            dashboard_id: dashboard_id.into(),
            ..Self::default()
        }
    }

    /// Sets the column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Rejects option values the engine cannot work with.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.columns == 0 {
            return Err(DashboardError::InvalidColumns(self.columns));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plugin_defaults() {
        let opts = DashboardOptions::default();
        assert_eq!(opts.panel_id, "dashboard-panel");
        assert_eq!(opts.dashboard_module_class, "dashboard-module");
        assert_eq!(opts.columns, 2);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn zero_columns_is_rejected() {
        let err = DashboardOptions::new("home").with_columns(0).validate();
        assert!(matches!(err, Err(DashboardError::InvalidColumns(0))));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let opts: DashboardOptions = toml::from_str("columns = 3").expect("valid TOML");
        assert_eq!(opts.columns, 3);
        assert_eq!(opts.dashboard_id, "dashboard");
    }
}
