//! Application-facing stream events and the per-view delivery queue.
//!
//! The native engine reports state changes asynchronously; this layer models
//! that reporting as an explicit ordered queue per view instead of an implicit
//! runtime callback. Delivery order matches the order the registry received
//! the engine's reports.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Connection state report attached to publisher/subscriber status events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub code: i32,
    pub name: String,
    pub message: String,
    pub stream_name: String,
}

/// Event emitted to the application for a single view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// The view's configuration was forwarded to the engine.
    Configured { key: String },
    /// Connection status while the view is publishing.
    PublisherStatus { status: ConnectionStatus },
    /// Connection status while the view is subscribing.
    SubscriberStatus { status: ConnectionStatus },
    /// Raw stream metadata, passed through unmodified.
    Metadata { metadata: String },
    /// A publish session ended.
    UnpublishNotification,
    /// A subscription ended.
    UnsubscribeNotification,
}

impl StreamEvent {
    /// Registration name the application listens under.
    pub fn name(&self) -> &'static str {
        match self {
            StreamEvent::Configured { .. } => "onConfigured",
            StreamEvent::PublisherStatus { .. } => "onPublisherStreamStatus",
            StreamEvent::SubscriberStatus { .. } => "onSubscriberStreamStatus",
            StreamEvent::Metadata { .. } => "onMetaDataEvent",
            StreamEvent::UnpublishNotification => "onUnpublishNotification",
            StreamEvent::UnsubscribeNotification => "onUnsubscribeNotification",
        }
    }
}

/// FIFO event queue for one view.
///
/// Single producer (the view's routing logic), single consumer (the polling
/// application). Unbounded: the wrapper never drops or reorders engine
/// reports.
pub struct EventQueue {
    sender: mpsc::UnboundedSender<StreamEvent>,
    receiver: mpsc::UnboundedReceiver<StreamEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    pub fn push(&self, event: StreamEvent) {
        // The receiver lives as long as the queue, so this only fails if the
        // queue itself is being dropped.
        if let Err(e) = self.sender.send(event) {
            log::warn!("Dropped stream event during queue shutdown: {}", e);
        }
    }

    /// Take the next event, if any (non-blocking).
    pub fn poll(&mut self) -> Option<StreamEvent> {
        self.receiver.try_recv().ok()
    }

    /// Take every queued event in delivery order.
    pub fn drain(&mut self) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
