//! Widgets as seen by the layout engine.

/// A widget discovered by the host before initialization.
///
/// Widgets are materialized by the host; the engine only assigns missing
/// ids and tracks collapsed/disabled state and column membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSpec {
    /// Explicit id, or `None` to receive `module_<index>`.
    pub id: Option<String>,
    /// Heading text, used as the panel label when the widget is removed.
    pub title: String,
    /// Rendered collapsed by the host.
    pub collapsed: bool,
    /// Rendered as already removed by the host.
    pub disabled: bool,
    /// The user may drag it between columns.
    pub draggable: bool,
    /// The user may collapse and expand it.
    pub collapsible: bool,
    /// The user may remove it to the panel.
    pub deletable: bool,
}

impl WidgetSpec {
    /// A draggable, collapsible, deletable widget titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            collapsed: false,
            disabled: false,
            draggable: true,
            collapsible: true,
            deletable: true,
        }
    }

    /// Sets an explicit id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Marks the widget as already removed.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Marks the widget as rendered collapsed.
    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    /// Prevents the user from collapsing the widget.
    pub fn fixed_open(mut self) -> Self {
        self.collapsible = false;
        self
    }

    /// Prevents the user from removing the widget.
    pub fn permanent(mut self) -> Self {
        self.deletable = false;
        self
    }

    /// Prevents the user from dragging the widget. Reorders leave it in its
    /// column slot.
    pub fn pinned(mut self) -> Self {
        self.draggable = false;
        self
    }
}

/// A live widget with a resolved id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    /// Unique id within the dashboard.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Body hidden, heading shown.
    pub collapsed: bool,
    /// Hidden and listed in the panel.
    pub disabled: bool,
    /// See [`WidgetSpec::draggable`].
    pub draggable: bool,
    /// See [`WidgetSpec::collapsible`].
    pub collapsible: bool,
    /// See [`WidgetSpec::deletable`].
    pub deletable: bool,
}

impl Widget {
    pub(crate) fn from_spec(spec: WidgetSpec, index: usize) -> Self {
        Self {
            id: spec.id.unwrap_or_else(|| format!("module_{}", index)),
            title: spec.title,
            collapsed: spec.collapsed,
            disabled: spec.disabled,
            draggable: spec.draggable,
            collapsible: spec.collapsible,
            deletable: spec.deletable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_is_assigned_from_index() {
        let w = Widget::from_spec(WidgetSpec::new("Links"), 3);
        assert_eq!(w.id, "module_3");
        assert_eq!(w.title, "Links");
    }

    #[test]
    fn explicit_id_is_kept() {
        let w = Widget::from_spec(WidgetSpec::new("Links").with_id("links"), 0);
        assert_eq!(w.id, "links");
    }

    #[test]
    fn builder_flags() {
        let spec = WidgetSpec::new("x").disabled().collapsed().fixed_open().permanent().pinned();
        assert!(spec.disabled && spec.collapsed);
        assert!(!spec.collapsible && !spec.deletable && !spec.draggable);
    }
}
