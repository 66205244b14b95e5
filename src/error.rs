//! Engine-level error type.
//!
//! Only precondition violations surface as errors. Stale or malformed
//! preference data and failed writes are recovered inside the engine.

use thiserror::Error;

/// Errors returned when a dashboard cannot be initialized.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The configured column count is not a positive integer.
    #[error("Invalid column count {0}: a dashboard needs at least one column")]
    InvalidColumns(usize),

    /// Two widgets share the same id.
    #[error("Duplicate widget id: {0}")]
    DuplicateWidgetId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_columns() {
        let msg = DashboardError::InvalidColumns(0).to_string();
        assert!(msg.contains("Invalid column count 0"));
    }

    #[test]
    fn display_duplicate_widget_id() {
        let msg = DashboardError::DuplicateWidgetId("module_1".to_string()).to_string();
        assert!(msg.contains("module_1"));
    }
}
