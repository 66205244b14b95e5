//! Preference persistence for a dashboard.
//!
//! [`PreferenceStore`] owns the in-memory [`PreferenceDocument`]. Loading and
//! saving are pluggable through [`PreferenceSource`] / [`PreferenceSink`]
//! (closures work); whichever direction has no hook falls back to a local
//! store, either [`FileStore`] (long-lived, on disk) or [`MemoryStore`]
//! (session only).

mod channel;
mod document;
mod error;
mod file;
mod memory;
mod source;
mod store;

pub use channel::{save_channel, ChannelSink, SaveReceiver, SaveRequest};
pub use document::{Category, PreferenceDocument};
pub use error::StoreError;
pub use file::{FileStore, DEFAULT_EXPIRY, DEFAULT_EXPIRY_DAYS, DEFAULT_PREFIX};
pub use memory::MemoryStore;
pub use source::{FallbackStore, PreferenceSink, PreferenceSource};
pub use store::{PreferenceStore, PreferenceStoreBuilder};
