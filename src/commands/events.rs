use crate::events::StreamEvent;
use crate::registry::ViewRegistry;
use crate::types::ViewHandle;
use tauri::{command, State};

/// Take the next queued event for a view, if any (non-blocking)
#[command]
pub async fn poll_stream_event(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
) -> Result<Option<StreamEvent>, String> {
    registry
        .poll_event(handle)
        .await
        .map_err(|e| format!("Failed to poll stream event: {}", e))
}

/// Take every queued event for a view in delivery order
#[command]
pub async fn drain_stream_events(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
) -> Result<Vec<StreamEvent>, String> {
    registry
        .drain_events(handle)
        .await
        .map_err(|e| format!("Failed to drain stream events: {}", e))
}
