//! Long-lived on-disk fallback store.
//!
//! One JSON file per dashboard, `<dir>/<prefix>.<dashboard_id>.json`:
//!
//! ```json
//! { "expires": "2031-10-16T12:00:00Z", "value": "{\"positions\":[...]}" }
//! ```
//!
//! Entries past their expiry are treated as absent. Writes use the
//! temp-file-then-rename pattern so a crash never leaves a truncated entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dashboard::DashboardOptions;
use crate::preferences::document::PreferenceDocument;
use crate::preferences::error::StoreError;
use crate::preferences::source::{PreferenceSink, PreferenceSource};

/// Default entry lifetime in days (five years).
pub const DEFAULT_EXPIRY_DAYS: i64 = 1825;

/// Default entry lifetime.
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(DEFAULT_EXPIRY_DAYS as u64 * 86_400);

/// Default file name prefix.
pub const DEFAULT_PREFIX: &str = "admin-tools";

/// On-disk envelope around the serialized document.
#[derive(Debug, Serialize, Deserialize)]
struct Entry {
    expires: DateTime<Utc>,
    value: String,
}

/// Fallback store keyed by dashboard id.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    prefix: String,
    expiry: Duration,
}

impl FileStore {
    /// Creates a store rooted at `dir` with the default prefix and expiry.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            expiry: DEFAULT_EXPIRY,
        }
    }

    /// Overrides the file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Overrides the entry lifetime.
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }

    /// Directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the entry for `dashboard_id`.
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced so an id can never
    /// escape the store directory.
    pub fn path_for(&self, dashboard_id: &str) -> PathBuf {
        let safe: String = dashboard_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.{}.json", self.prefix, safe))
    }

    /// Reads the entry for `dashboard_id`.
    ///
    /// Returns `Ok(None)` for a missing or expired entry. A malformed entry is
    /// an error here; the [`PreferenceSource`] impl downgrades it to `None`.
    pub fn read(&self, dashboard_id: &str) -> Result<Option<PreferenceDocument>, StoreError> {
        let path = self.path_for(dashboard_id);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io { path, source: e }),
        };
        let entry: Entry = serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        if entry.expires <= Utc::now() {
            tracing::debug!("Preference entry {:?} expired at {}", path, entry.expires);
            return Ok(None);
        }
        PreferenceDocument::from_json(&entry.value)
            .map(Some)
            .ok_or_else(|| StoreError::Parse {
                path,
                message: "stored value is not a JSON object".to_string(),
            })
    }

    /// Writes `document` for `dashboard_id`, refreshing its expiry.
    pub fn write(
        &self,
        dashboard_id: &str,
        document: &PreferenceDocument,
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::Io {
            path: self.dir.clone(),
            source: e,
        })?;

        let lifetime = chrono::Duration::from_std(self.expiry)
            .unwrap_or_else(|_| chrono::Duration::days(DEFAULT_EXPIRY_DAYS));
        let entry = Entry {
            expires: Utc::now()
                .checked_add_signed(lifetime)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            value: document.to_json(),
        };
        let json =
            serde_json::to_string(&entry).map_err(|e| StoreError::Serialize(e.to_string()))?;

        let path = self.path_for(dashboard_id);
        let timestamp = Utc::now().format("%Y%m%d-%H%M%S%.f");
        let temp_path = path.with_extension(format!("json.tmp.{}", timestamp));

        let result = commit(&temp_path, &path, &json);
        if result.is_err() {
            // Leftovers would never be read or swept by `clear_all`.
            if let Err(e) = fs::remove_file(&temp_path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!("Could not remove temp file {:?}: {}", temp_path, e);
                }
            }
        }
        result
    }

    /// Deletes the entry for `dashboard_id`. Returns `true` if one existed.
    pub fn clear(&self, dashboard_id: &str) -> Result<bool, StoreError> {
        let path = self.path_for(dashboard_id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    /// Deletes every entry carrying this store's prefix. Returns the count.
    pub fn clear_all(&self) -> Result<usize, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.dir.clone(),
                    source: e,
                })
            }
        };
        let prefix = format!("{}.", self.prefix);
        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Io {
                path: self.dir.clone(),
                source: e,
            })?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(&prefix) && name.ends_with(".json") {
                let path = entry.path();
                fs::remove_file(&path).map_err(|e| StoreError::Io { path, source: e })?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

impl PreferenceSource for FileStore {
    fn load(&mut self, options: &DashboardOptions) -> Option<PreferenceDocument> {
        match self.read(&options.dashboard_id) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!("Discarding stored preferences: {}", e);
                None
            }
        }
    }
}

impl PreferenceSink for FileStore {
    fn save(
        &mut self,
        options: &DashboardOptions,
        document: &PreferenceDocument,
    ) -> Result<(), StoreError> {
        self.write(&options.dashboard_id, document)
    }
}

/// Writes `json` to `temp_path`, syncs it and renames it over `path`.
fn commit(temp_path: &Path, path: &Path, json: &str) -> Result<(), StoreError> {
    fs::write(temp_path, json).map_err(io_error(temp_path))?;
    let file = fs::File::open(temp_path).map_err(io_error(temp_path))?;
    file.sync_all().map_err(io_error(temp_path))?;
    fs::rename(temp_path, path).map_err(io_error(path))
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}
