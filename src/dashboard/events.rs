//! Host-facing event and effect types.
//!
//! The host toolkit reports discrete gestures as [`DashboardEvent`]s (or calls
//! the [`EventSubscriber`] methods directly) and applies the resulting
//! [`ViewCommand`]s to whatever it renders with.

use crate::panel::PanelEntry;

/// A completed user gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// A drag finished; the new column membership, left to right.
    Reorder {
        /// Widget ids per column, top to bottom.
        columns: Vec<Vec<String>>,
    },
    /// The collapse toggle of a widget was clicked.
    ToggleCollapse {
        /// Widget id.
        id: String,
    },
    /// The remove button of a widget was clicked.
    Delete {
        /// Widget id.
        id: String,
    },
    /// A panel entry was clicked.
    Add {
        /// Widget id.
        id: String,
    },
}

/// Callback interface a rendering layer drives.
pub trait EventSubscriber {
    /// Widgets were dragged into a new arrangement.
    fn on_reorder(&mut self, columns: &[Vec<String>]);

    /// The user toggled the collapsed state of `id`.
    fn on_toggle_collapse(&mut self, id: &str);

    /// The user removed `id` from the layout.
    fn on_delete(&mut self, id: &str);

    /// The user restored `id` from the panel.
    fn on_add(&mut self, id: &str);

    /// Dispatches an event to the matching callback.
    fn handle(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Reorder { columns } => self.on_reorder(&columns),
            DashboardEvent::ToggleCollapse { id } => self.on_toggle_collapse(&id),
            DashboardEvent::Delete { id } => self.on_delete(&id),
            DashboardEvent::Add { id } => self.on_add(&id),
        }
    }
}

/// A visual change the host should apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Fade the widget out.
    Hide(String),
    /// Fade the widget in.
    Show(String),
    /// Collapse or expand the widget body.
    SetCollapsed {
        /// Widget id.
        id: String,
        /// New state.
        collapsed: bool,
    },
    /// Append a restore entry to the panel.
    AddPanelEntry(PanelEntry),
    /// Drop the restore entry of a widget.
    RemovePanelEntry(String),
    /// Show the panel container.
    ShowPanel,
    /// Hide the panel container.
    HidePanel,
}
