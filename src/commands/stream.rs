use crate::registry::ViewRegistry;
use crate::types::{LogLevel, PublishType, ScaleMode, SubscribeOptions, ViewHandle};
use tauri::{command, State};

/// Request playback of a remote stream on the given view
#[command]
pub async fn subscribe(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
    stream_name: String,
    options: Option<SubscribeOptions>,
) -> Result<String, String> {
    log::info!("Subscribing view {} to stream {}", handle, stream_name);

    registry
        .subscribe(handle, stream_name.clone(), options.unwrap_or_default())
        .await
        .map_err(|e| format!("Failed to subscribe: {}", e))?;

    Ok(format!("Subscribe forwarded for stream {}", stream_name))
}

/// Request teardown of the view's subscription; safe to call when none is active
#[command]
pub async fn unsubscribe(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
) -> Result<String, String> {
    log::info!("Unsubscribing view {}", handle);

    registry
        .unsubscribe(handle)
        .await
        .map_err(|e| format!("Failed to unsubscribe: {}", e))?;

    Ok(format!("Unsubscribe forwarded for view {}", handle))
}

/// Request broadcast of local capture under the given publish type
#[command]
pub async fn publish(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
    stream_name: String,
    publish_type: PublishType,
) -> Result<String, String> {
    log::info!(
        "Publishing stream {} from view {} ({})",
        stream_name,
        handle,
        publish_type.as_str()
    );

    registry
        .publish(handle, stream_name.clone(), publish_type)
        .await
        .map_err(|e| format!("Failed to publish: {}", e))?;

    Ok(format!("Publish forwarded for stream {}", stream_name))
}

/// Request teardown of the view's publish session; safe to call when none is active
#[command]
pub async fn unpublish(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
) -> Result<String, String> {
    log::info!("Unpublishing view {}", handle);

    registry
        .unpublish(handle)
        .await
        .map_err(|e| format!("Failed to unpublish: {}", e))?;

    Ok(format!("Unpublish forwarded for view {}", handle))
}

/// Request a switch between available capture devices
#[command]
pub async fn swap_camera(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
) -> Result<String, String> {
    log::info!("Swapping camera on view {}", handle);

    registry
        .swap_camera(handle)
        .await
        .map_err(|e| format!("Failed to swap camera: {}", e))?;

    Ok(format!("Camera swap forwarded for view {}", handle))
}

/// Live change of how the view scales its video content
#[command]
pub async fn update_scale_mode(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
    scale_mode: ScaleMode,
) -> Result<String, String> {
    log::info!(
        "Updating scale mode on view {} to {}",
        handle,
        scale_mode.as_str()
    );

    registry
        .update_scale_mode(handle, scale_mode)
        .await
        .map_err(|e| format!("Failed to update scale mode: {}", e))?;

    Ok(format!("Scale mode {} forwarded", scale_mode.as_str()))
}

/// Live change of the engine's log verbosity for the view
#[command]
pub async fn update_log_level(
    registry: State<'_, ViewRegistry>,
    handle: ViewHandle,
    log_level: LogLevel,
) -> Result<String, String> {
    registry
        .update_log_level(handle, log_level)
        .await
        .map_err(|e| format!("Failed to update log level: {}", e))?;

    Ok(format!("Log level {} forwarded", log_level.as_str()))
}
