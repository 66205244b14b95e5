//! The dashboard controller.
//!
//! [`Dashboard`] owns the widget columns, the [`Panel`] and the
//! [`PreferenceStore`] for one dashboard instance. Initialization runs:
//!
//! 1. assign `module_<index>` ids to widgets without one,
//! 2. restore the saved widget order ([`reconcile`]),
//! 3. split into columns ([`resolve`] + [`partition`]),
//! 4. replay disabled widgets from the markup, then the saved
//!    `disabled` and `collapsed` maps.
//!
//! Afterwards every user gesture arrives through [`EventSubscriber`], updates
//! the in-memory state, queues [`ViewCommand`]s for the host, and writes the
//! affected preference back through the store.

mod events;
mod options;
mod widget;


pub use events::{DashboardEvent, EventSubscriber, ViewCommand};
pub use options::DashboardOptions;
pub use widget::{Widget, WidgetSpec};

use serde_json::json;
use std::collections::{HashMap, HashSet};

use crate::error::DashboardError;
use crate::layout::{partition, reconcile, resolve, sizes_of, Column};
use crate::panel::{Panel, PanelEntry};
use crate::preferences::{Category, PreferenceDocument, PreferenceStore};

/// A live dashboard.
#[derive(Debug)]
pub struct Dashboard {
    options: DashboardOptions,
    store: PreferenceStore,
    columns: Vec<Column<Widget>>,
    panel: Panel,
    commands: Vec<ViewCommand>,
}

impl Dashboard {
    /// Initializes a dashboard over the widgets the host discovered, in
    /// document order.
    ///
    /// Fails only on invalid options or duplicate widget ids; missing or
    /// stale preferences fall back to defaults.
    pub fn new(
        options: DashboardOptions,
        mut store: PreferenceStore,
        widgets: Vec<WidgetSpec>,
    ) -> Result<Self, DashboardError> {
        options.validate()?;

        let widgets = assign_ids(widgets)?;
        let saved = store.document(&options).clone();

        let ordered = reconcile(widgets, &saved.positions(), |w: &Widget| w.id.as_str());
        let stored_sizes = saved.column_sizes();
        let sizes = resolve(stored_sizes.as_deref(), ordered.len(), options.columns);
        let columns = partition(ordered, &sizes);

        let mut dashboard = Self {
            panel: Panel::new(options.panel_id.clone()),
            options,
            store,
            columns,
            commands: Vec::new(),
        };
        dashboard.restore_preferences(&saved);

        tracing::debug!(
            dashboard = %dashboard.options.dashboard_id,
            columns = ?sizes,
            disabled = dashboard.panel.len(),
            "Dashboard initialized"
        );
        Ok(dashboard)
    }

    fn restore_preferences(&mut self, saved: &PreferenceDocument) {
        // The host renders the panel container visible.
        self.panel.set_visible(true);

        let markup_disabled: Vec<String> = self
            .widgets()
            .filter(|w| w.disabled)
            .map(|w| w.id.clone())
            .collect();
        for id in markup_disabled {
            self.delete_widget(&id, false);
        }

        for (id, disabled) in saved.flags(Category::Disabled) {
            if disabled {
                self.delete_widget(&id, false);
            } else {
                self.add_widget(&id, false);
            }
        }

        for (id, collapsed) in saved.flags(Category::Collapsed) {
            if collapsed {
                self.set_collapsed(&id, true, false);
            }
        }

        self.refresh_panel();
    }

    /// The options this dashboard was built with.
    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    /// Current columns, left to right. Empty columns are placeholders.
    pub fn layout(&self) -> &[Column<Widget>] {
        &self.columns
    }

    /// All widgets, column by column.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.columns.iter().flat_map(|c| c.items.iter())
    }

    /// The widget with `id`, if any.
    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets().find(|w| w.id == id)
    }

    fn widget_mut(&mut self, id: &str) -> Option<&mut Widget> {
        self.columns
            .iter_mut()
            .flat_map(|c| c.items.iter_mut())
            .find(|w| w.id == id)
    }

    /// Flattened widget order across all columns.
    pub fn positions(&self) -> Vec<String> {
        self.widgets().map(|w| w.id.clone()).collect()
    }

    /// Widget count per column.
    pub fn column_sizes(&self) -> Vec<usize> {
        sizes_of(&self.columns)
    }

    /// The removed-widgets panel.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// The in-memory preference document.
    pub fn preferences(&mut self) -> &PreferenceDocument {
        self.store.document(&self.options)
    }

    /// Takes the view commands queued since the last call.
    pub fn drain_commands(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.commands)
    }

    fn refresh_panel(&mut self) {
        let visible = !self.panel.is_empty();
        if visible != self.panel.is_visible() {
            self.panel.set_visible(visible);
            self.commands.push(if visible {
                ViewCommand::ShowPanel
            } else {
                ViewCommand::HidePanel
            });
        }
    }

    fn delete_widget(&mut self, id: &str, persist: bool) {
        let Some(widget) = self.widget_mut(id) else {
            tracing::debug!("Ignoring removal of unknown widget '{}'", id);
            return;
        };
        widget.disabled = true;
        let label = widget.title.clone();

        if self.panel.insert(id, &label) {
            self.commands.push(ViewCommand::AddPanelEntry(PanelEntry {
                widget_id: id.to_string(),
                label,
            }));
        }
        self.commands.push(ViewCommand::Hide(id.to_string()));
        self.refresh_panel();

        if persist {
            self.store
                .set(&self.options, Category::Disabled, Some(id), json!(true), true);
        }
    }

    fn add_widget(&mut self, id: &str, persist: bool) {
        let Some(widget) = self.widget_mut(id) else {
            tracing::debug!("Ignoring restore of unknown widget '{}'", id);
            return;
        };
        widget.disabled = false;

        if self.panel.remove(id).is_some() {
            self.commands
                .push(ViewCommand::RemovePanelEntry(id.to_string()));
        }
        self.commands.push(ViewCommand::Show(id.to_string()));

        if persist {
            self.store
                .set(&self.options, Category::Disabled, Some(id), json!(false), true);
        }
        self.refresh_panel();
    }

    fn set_collapsed(&mut self, id: &str, collapsed: bool, persist: bool) {
        let Some(widget) = self.widget_mut(id) else {
            tracing::debug!("Ignoring collapse of unknown widget '{}'", id);
            return;
        };
        widget.collapsed = collapsed;
        self.commands.push(ViewCommand::SetCollapsed {
            id: id.to_string(),
            collapsed,
        });
        if persist {
            self.store.set(
                &self.options,
                Category::Collapsed,
                Some(id),
                json!(collapsed),
                true,
            );
        }
    }

    fn apply_reorder(&mut self, reported: &[Vec<String>]) {
        let previous: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| c.items.iter().map(|w| w.id.clone()).collect())
            .collect();
        let mut pool: HashMap<String, Widget> = self
            .columns
            .iter_mut()
            .flat_map(|c| c.items.drain(..))
            .map(|w| (w.id.clone(), w))
            .collect();

        // Non-draggable widgets keep their (column, slot).
        let mut pinned: Vec<(usize, usize, Widget)> = Vec::new();
        for (col, ids) in previous.iter().enumerate() {
            for (slot, id) in ids.iter().enumerate() {
                if pool.get(id).is_some_and(|w| !w.draggable) {
                    if let Some(widget) = pool.remove(id) {
                        pinned.push((col, slot, widget));
                    }
                }
            }
        }

        for (column, ids) in self.columns.iter_mut().zip(reported) {
            for id in ids {
                match pool.remove(id) {
                    Some(widget) => column.items.push(widget),
                    None if pinned.iter().any(|(_, _, w)| &w.id == id) => {
                        tracing::debug!("Widget '{}' is not draggable", id)
                    }
                    None => tracing::debug!("Reorder named unknown widget '{}'", id),
                }
            }
        }
        if reported.len() > self.columns.len() {
            tracing::debug!(
                "Reorder reported {} columns, dashboard has {}",
                reported.len(),
                self.columns.len()
            );
        }

        // Anything the host did not report stays in its previous column.
        for (column, ids) in self.columns.iter_mut().zip(&previous) {
            for id in ids {
                if let Some(widget) = pool.remove(id) {
                    column.items.push(widget);
                }
            }
        }
        for (col, slot, widget) in pinned {
            let items = &mut self.columns[col].items;
            items.insert(slot.min(items.len()), widget);
        }

        let positions = self.positions();
        let sizes = self.column_sizes();
        self.store
            .set(&self.options, Category::Positions, None, json!(positions), false);
        self.store
            .set(&self.options, Category::Columns, None, json!(sizes), true);
    }
}

impl EventSubscriber for Dashboard {
    fn on_reorder(&mut self, columns: &[Vec<String>]) {
        self.apply_reorder(columns);
    }

    fn on_toggle_collapse(&mut self, id: &str) {
        match self.widget(id) {
            Some(w) if w.collapsible => {
                let collapsed = !w.collapsed;
                self.set_collapsed(id, collapsed, true);
            }
            Some(_) => tracing::debug!("Widget '{}' is not collapsible", id),
            None => tracing::debug!("Ignoring toggle of unknown widget '{}'", id),
        }
    }

    fn on_delete(&mut self, id: &str) {
        match self.widget(id) {
            Some(w) if w.deletable => self.delete_widget(id, true),
            Some(_) => tracing::debug!("Widget '{}' is not deletable", id),
            None => tracing::debug!("Ignoring removal of unknown widget '{}'", id),
        }
    }

    fn on_add(&mut self, id: &str) {
        self.add_widget(id, true);
    }
}

fn assign_ids(specs: Vec<WidgetSpec>) -> Result<Vec<Widget>, DashboardError> {
    let mut seen = HashSet::new();
    specs
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            let widget = Widget::from_spec(spec, index);
            if seen.insert(widget.id.clone()) {
                Ok(widget)
            } else {
                Err(DashboardError::DuplicateWidgetId(widget.id))
            }
        })
        .collect()
}
