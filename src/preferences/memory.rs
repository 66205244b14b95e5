//! Session-only fallback store.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::dashboard::DashboardOptions;
use crate::preferences::document::PreferenceDocument;
use crate::preferences::error::StoreError;
use crate::preferences::source::{PreferenceSink, PreferenceSource};

/// Keeps the last saved document in memory.
///
/// Clones share the same slot, so a caller can keep a handle and inspect what
/// the store received.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a serialized document.
    pub fn with_contents(json: impl Into<String>) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(json.into());
        store
    }

    /// The last serialized document saved (or seeded).
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of saves received.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceSource for MemoryStore {
    fn load(&mut self, _options: &DashboardOptions) -> Option<PreferenceDocument> {
        self.slot
            .borrow()
            .as_deref()
            .and_then(PreferenceDocument::from_json)
    }
}

impl PreferenceSink for MemoryStore {
    fn save(
        &mut self,
        _options: &DashboardOptions,
        document: &PreferenceDocument,
    ) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(document.to_json());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
