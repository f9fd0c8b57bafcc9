use crate::registry::ViewRegistry;
use crate::types::{StreamConfiguration, ViewHandle, ViewStats};
use tauri::{command, State};

/// Mount a streaming view with the given configuration and return its handle
#[command]
pub async fn create_stream_view(
    registry: State<'_, ViewRegistry>,
    configuration: StreamConfiguration,
) -> Result<ViewHandle, String> {
    log::info!(
        "Creating stream view for {}:{}/{}",
        configuration.host,
        configuration.port,
        configuration.context_name
    );

    registry
        .create_view(configuration)
        .await
        .map_err(|e| format!("Failed to create stream view: {}", e))
}

/// Unmount a streaming view, releasing its native resource
#[command]
pub async fn dispose_stream_view(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
) -> Result<String, String> {
    registry
        .dispose_view(handle)
        .await
        .map_err(|e| format!("Failed to dispose stream view: {}", e))?;

    Ok(format!("Stream view {} disposed", handle))
}

/// Apply an updated configuration bag; only changed fields are forwarded
#[command]
pub async fn update_configuration(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
    configuration: StreamConfiguration,
) -> Result<String, String> {
    registry
        .update_configuration(handle, configuration)
        .await
        .map_err(|e| format!("Failed to update configuration: {}", e))?;

    Ok(format!("Configuration updated for view {}", handle))
}

/// Get a snapshot of a mounted view's state
#[command]
pub async fn get_view_stats(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
) -> Result<ViewStats, String> {
    registry
        .view_stats(handle)
        .await
        .map_err(|e| format!("Failed to get view stats: {}", e))
}

/// List the handles of all mounted views
#[command]
pub async fn get_active_views(
    registry: State<'_, ViewRegistry>,
) -> Result<Vec<ViewHandle>, String> {
    Ok(registry.active_views().await)
}
