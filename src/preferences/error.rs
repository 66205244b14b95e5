//! Error types for preference persistence.
//!
//! None of these reach the user: the store logs them and keeps the in-memory
//! document authoritative for the rest of the session.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by preference sources and sinks.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the fallback store failed.
    #[error("Preference store I/O failed: {path}")]
    Io {
        /// File that could not be read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stored entry is not valid JSON.
    #[error("Invalid preference data in {path}: {message}")]
    Parse {
        /// File holding the malformed entry.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The document could not be serialized.
    #[error("Failed to serialize preferences: {0}")]
    Serialize(String),

    /// The transport side of a channel sink has gone away.
    #[error("Preference channel closed")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_io_error_includes_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/prefs/admin-tools.dashboard.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("admin-tools.dashboard.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn display_parse_error_includes_message() {
        let err = StoreError::Parse {
            path: PathBuf::from("prefs.json"),
            message: "expected value at line 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("prefs.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn display_channel_closed() {
        assert_eq!(StoreError::ChannelClosed.to_string(), "Preference channel closed");
    }
}
