//! The tray of widgets the user removed from the layout.

/// One restorable widget in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    /// Id of the disabled widget.
    pub widget_id: String,
    /// Label shown to the user, taken from the widget heading.
    pub label: String,
}

/// Panel state. Holds exactly one entry per disabled widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    id: String,
    entries: Vec<PanelEntry>,
    visible: bool,
}

impl Panel {
    /// Creates an empty, hidden panel for the container `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
            visible: false,
        }
    }

    /// Container identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the panel holds no entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the panel container is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether `widget_id` has an entry.
    pub fn contains(&self, widget_id: &str) -> bool {
        self.entries.iter().any(|e| e.widget_id == widget_id)
    }

    /// Adds an entry for `widget_id` unless one exists.
    ///
    /// Returns `true` if a new entry was created.
    pub fn insert(&mut self, widget_id: &str, label: &str) -> bool {
        if self.contains(widget_id) {
            return false;
        }
        self.entries.push(PanelEntry {
            widget_id: widget_id.to_string(),
            label: label.to_string(),
        });
        true
    }

    /// Removes the entry for `widget_id`, returning it if present.
    pub fn remove(&mut self, widget_id: &str) -> Option<PanelEntry> {
        let pos = self.entries.iter().position(|e| e.widget_id == widget_id)?;
        Some(self.entries.remove(pos))
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
