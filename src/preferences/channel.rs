//! Fire-and-forget hand-off to an asynchronous transport.
//!
//! The layout engine runs on a single UI thread and must never block on a
//! network round trip. [`ChannelSink`] queues each serialized document on an
//! unbounded channel; a transport task drains [`SaveReceiver`] and performs
//! the actual submission. Delivery order and failures are the transport's
//! concern.

use tokio::sync::mpsc;

use crate::dashboard::DashboardOptions;
use crate::preferences::document::PreferenceDocument;
use crate::preferences::error::StoreError;
use crate::preferences::source::PreferenceSink;

/// One queued save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Dashboard the document belongs to.
    pub dashboard_id: String,
    /// Serialized preference document.
    pub data: String,
}

/// Sending half, installed as the store's sink.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<SaveRequest>,
}

/// Receiving half, owned by the transport task.
pub type SaveReceiver = mpsc::UnboundedReceiver<SaveRequest>;

/// Creates a connected sink/receiver pair.
pub fn save_channel() -> (ChannelSink, SaveReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelSink { tx }, rx)
}

impl PreferenceSink for ChannelSink {
    fn save(
        &mut self,
        options: &DashboardOptions,
        document: &PreferenceDocument,
    ) -> Result<(), StoreError> {
        self.tx
            .send(SaveRequest {
                dashboard_id: options.dashboard_id.clone(),
                data: document.to_json(),
            })
            .map_err(|_| StoreError::ChannelClosed)
    }
}
