//! Dashboard layout engine.
//!
//! Keeps the arrangement of widgets on a multi-column dashboard: which
//! column each widget lives in, their order, which are collapsed and which
//! the user removed into the [`Panel`]. The arrangement survives across
//! sessions through a [`PreferenceStore`] backed by caller hooks or a local
//! fallback ([`FileStore`], [`MemoryStore`]).
//!
//! Rendering is left to the host: it reports gestures through
//! [`EventSubscriber`] and applies the [`ViewCommand`]s it drains from the
//! [`Dashboard`].
//!
//! ```
//! use dashboard_layout::{Dashboard, DashboardOptions, MemoryStore, PreferenceStore, WidgetSpec};
//!
//! let options = DashboardOptions::new("admin-index");
//! let store = PreferenceStore::with_fallback(MemoryStore::new());
//! let widgets = ["a", "b", "c", "d", "e"]
//!     .map(|id| WidgetSpec::new(id.to_uppercase()).with_id(id))
//!     .to_vec();
//!
//! let dashboard = Dashboard::new(options, store, widgets).unwrap();
//! assert_eq!(dashboard.column_sizes(), vec![3, 2]);
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod layout;
pub mod logging;
pub mod panel;
pub mod preferences;

pub use dashboard::{
    Dashboard, DashboardEvent, DashboardOptions, EventSubscriber, ViewCommand, Widget, WidgetSpec,
};
pub use error::DashboardError;
pub use layout::Column;
pub use panel::{Panel, PanelEntry};
pub use preferences::{
    Category, ChannelSink, FileStore, MemoryStore, PreferenceDocument, PreferenceSink,
    PreferenceSource, PreferenceStore, StoreError,
};
