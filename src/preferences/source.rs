//! Pluggable load and save hooks for the preference store.
//!
//! Callers usually pass closures: any `FnMut(&DashboardOptions) -> PreferenceDocument`
//! is a [`PreferenceSource`] and any `FnMut(&DashboardOptions, &PreferenceDocument)`
//! is a [`PreferenceSink`].

use crate::dashboard::DashboardOptions;
use crate::preferences::document::PreferenceDocument;
use crate::preferences::error::StoreError;

/// Supplies the stored document for a dashboard.
pub trait PreferenceSource {
    /// Loads the document, or `None` when nothing usable is stored.
    fn load(&mut self, options: &DashboardOptions) -> Option<PreferenceDocument>;
}

/// Receives the document whenever it changes and persistence is requested.
///
/// Implementations should hand the document off and return promptly; the
/// engine never waits on delivery and never retries.
pub trait PreferenceSink {
    /// Persists (or forwards) `document`.
    fn save(
        &mut self,
        options: &DashboardOptions,
        document: &PreferenceDocument,
    ) -> Result<(), StoreError>;
}

/// A store usable for both directions when no caller hook is configured.
pub trait FallbackStore: PreferenceSource + PreferenceSink {}

impl<T: PreferenceSource + PreferenceSink> FallbackStore for T {}

impl<F> PreferenceSource for F
where
    F: FnMut(&DashboardOptions) -> PreferenceDocument,
{
    fn load(&mut self, options: &DashboardOptions) -> Option<PreferenceDocument> {
        Some(self(options))
    }
}

impl<F> PreferenceSink for F
where
    F: FnMut(&DashboardOptions, &PreferenceDocument),
{
    fn save(
        &mut self,
        options: &DashboardOptions,
        document: &PreferenceDocument,
    ) -> Result<(), StoreError> {
        self(options, document);
        Ok(())
    }
}
