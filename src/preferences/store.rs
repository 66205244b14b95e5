//! The in-memory preference document and its persistence policy.

use serde_json::{Map, Value};

use crate::dashboard::DashboardOptions;
use crate::preferences::document::{Category, PreferenceDocument};
use crate::preferences::memory::MemoryStore;
use crate::preferences::source::{FallbackStore, PreferenceSink, PreferenceSource};

/// Owner of the single in-memory [`PreferenceDocument`] of a dashboard.
///
/// Loading is lazy: the first accessor call loads the document exactly once
/// (caller hook, else fallback store, else empty). All mutation goes through
/// [`set`](Self::set); persisted writes are skipped when the serialized
/// document equals the last one handed to the sink.
pub struct PreferenceStore {
    loader: Option<Box<dyn PreferenceSource>>,
    saver: Option<Box<dyn PreferenceSink>>,
    fallback: Box<dyn FallbackStore>,
    document: PreferenceDocument,
    loaded: bool,
    last_saved: Option<String>,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("has_loader", &self.loader.is_some())
            .field("has_saver", &self.saver.is_some())
            .field("document", &self.document)
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl PreferenceStore {
    /// Starts building a store.
    pub fn builder() -> PreferenceStoreBuilder {
        PreferenceStoreBuilder::default()
    }

    /// A store with no hooks over `fallback`.
    pub fn with_fallback(fallback: impl FallbackStore + 'static) -> Self {
        Self::builder().fallback(fallback).build()
    }

    /// Whether the document has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn ensure_loaded(&mut self, options: &DashboardOptions) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        let loaded = match self.loader.as_mut() {
            Some(loader) => loader.load(options),
            None => self.fallback.load(options),
        };
        self.document = loaded.unwrap_or_default();
        tracing::debug!(
            dashboard = %options.dashboard_id,
            empty = self.document.is_empty(),
            "Loaded dashboard preferences"
        );
    }

    /// The whole document.
    pub fn document(&mut self, options: &DashboardOptions) -> &PreferenceDocument {
        self.ensure_loaded(options);
        &self.document
    }

    /// The whole value of `category`, created as an empty object if absent.
    pub fn get(&mut self, options: &DashboardOptions, category: Category) -> &Value {
        self.ensure_loaded(options);
        self.document.category_mut(category)
    }

    /// The entry `id` of a map category, or `default` when the category is
    /// not a map or has no such entry.
    pub fn get_entry(
        &mut self,
        options: &DashboardOptions,
        category: Category,
        id: &str,
        default: Value,
    ) -> Value {
        self.get(options, category)
            .as_object()
            .and_then(|map| map.get(id))
            .cloned()
            .unwrap_or(default)
    }

    /// Stores `value` under `category` (or under `category[id]` when `id` is
    /// given) and, if `persist` is set, hands the document to the sink.
    ///
    /// A category that is not a map is replaced by one before an entry is
    /// written into it.
    pub fn set(
        &mut self,
        options: &DashboardOptions,
        category: Category,
        id: Option<&str>,
        value: Value,
        persist: bool,
    ) {
        self.ensure_loaded(options);
        match id {
            Some(id) => {
                let slot = self.document.category_mut(category);
                if !slot.is_object() {
                    tracing::debug!("Replacing malformed '{}' preferences", category);
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(map) = slot {
                    map.insert(id.to_string(), value);
                }
            }
            None => self.document.replace(category, value),
        }
        if persist {
            self.persist(options);
        }
    }

    fn persist(&mut self, options: &DashboardOptions) {
        let serialized = self.document.to_json();
        if self.last_saved.as_deref() == Some(serialized.as_str()) {
            tracing::trace!("Preferences unchanged since last save, skipping write");
            return;
        }
        let result = match self.saver.as_mut() {
            Some(saver) => saver.save(options, &self.document),
            None => self.fallback.save(options, &self.document),
        };
        match result {
            Ok(()) => tracing::info!(dashboard = %options.dashboard_id, "Saved dashboard preferences"),
            Err(e) => tracing::warn!(
                dashboard = %options.dashboard_id,
                "Dashboard preferences not saved: {}",
                e
            ),
        }
        self.last_saved = Some(serialized);
    }
}

/// Builder for [`PreferenceStore`].
#[derive(Default)]
pub struct PreferenceStoreBuilder {
    loader: Option<Box<dyn PreferenceSource>>,
    saver: Option<Box<dyn PreferenceSink>>,
    fallback: Option<Box<dyn FallbackStore>>,
}

impl PreferenceStoreBuilder {
    /// Loads the document with `f` instead of the fallback store.
    pub fn loader<F>(mut self, f: F) -> Self
    where
        F: FnMut(&DashboardOptions) -> PreferenceDocument + 'static,
    {
        self.loader = Some(Box::new(f));
        self
    }

    /// Saves the document with `f` instead of the fallback store.
    pub fn saver<F>(mut self, f: F) -> Self
    where
        F: FnMut(&DashboardOptions, &PreferenceDocument) + 'static,
    {
        self.saver = Some(Box::new(f));
        self
    }

    /// Uses an arbitrary source for loading.
    pub fn source(mut self, source: impl PreferenceSource + 'static) -> Self {
        self.loader = Some(Box::new(source));
        self
    }

    /// Uses an arbitrary sink for saving.
    pub fn sink(mut self, sink: impl PreferenceSink + 'static) -> Self {
        self.saver = Some(Box::new(sink));
        self
    }

    /// Store used for whichever direction has no hook. Defaults to a
    /// session-only [`MemoryStore`].
    pub fn fallback(mut self, fallback: impl FallbackStore + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Finishes the store. Nothing is loaded until first access.
    pub fn build(self) -> PreferenceStore {
        PreferenceStore {
            loader: self.loader,
            saver: self.saver,
            fallback: self
                .fallback
                .unwrap_or_else(|| Box::new(MemoryStore::new())),
            document: PreferenceDocument::new(),
            loaded: false,
            last_saved: None,
        }
    }
}
