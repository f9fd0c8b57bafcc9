//! Explicit mapping from opaque view handles to mounted streaming views.
//!
//! The registry is managed Tauri state, created once per application with the
//! native bridge it forwards through. Command functions resolve a handle here
//! before anything reaches the engine; an unknown handle fails immediately
//! with no native call.

use crate::bridge::{EngineEvent, NativeBridge};
use crate::errors::StreamError;
use crate::events::StreamEvent;
use crate::types::{
    LogLevel, PublishType, ScaleMode, StreamConfiguration, SubscribeOptions, ViewHandle, ViewStats,
};
use crate::view::StreamView;
use std::collections::HashMap;
use std::sync::{Arc, Mutex as SyncMutex};
use tokio::sync::RwLock;

// Async-friendly locking for the map, sync locking for the individual view.
type ViewMap = HashMap<ViewHandle, Arc<SyncMutex<StreamView>>>;

pub struct ViewRegistry {
    bridge: Arc<dyn NativeBridge>,
    views: RwLock<ViewMap>,
}

impl ViewRegistry {
    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self {
            bridge,
            views: RwLock::new(HashMap::new()),
        }
    }

    /// Mount a new view: allocate a handle, forward the configuration, and
    /// register the view for later commands.
    pub async fn create_view(
        &self,
        configuration: StreamConfiguration,
    ) -> Result<ViewHandle, StreamError> {
        let handle = ViewHandle::new();
        let view = StreamView::new(handle, self.bridge.clone(), configuration)?;

        let mut views = self.views.write().await;
        views.insert(handle, Arc::new(SyncMutex::new(view)));
        log::info!("Created stream view {} ({} active)", handle, views.len());
        Ok(handle)
    }

    /// Unmount a view, forwarding its teardown. The handle is invalid
    /// afterwards; the teardown itself fires exactly once even if the bridge
    /// rejects it (the drop safety net will not re-fire).
    pub async fn dispose_view(&self, handle: ViewHandle) -> Result<(), StreamError> {
        let removed = {
            let mut views = self.views.write().await;
            views.remove(&handle)
        };

        match removed {
            Some(view) => {
                let result = lock_view(&view, handle)?.teardown();
                log::info!("Disposed stream view {}", handle);
                result
            }
            None => Err(StreamError::InvalidHandle(handle.to_string())),
        }
    }

    pub async fn subscribe(
        &self,
        handle: ViewHandle,
        stream_name: String,
        options: SubscribeOptions,
    ) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.subscribe(stream_name, options)
    }

    pub async fn unsubscribe(&self, handle: ViewHandle) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.unsubscribe()
    }

    pub async fn publish(
        &self,
        handle: ViewHandle,
        stream_name: String,
        publish_type: PublishType,
    ) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.publish(stream_name, publish_type)
    }

    pub async fn unpublish(&self, handle: ViewHandle) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.unpublish()
    }

    pub async fn swap_camera(&self, handle: ViewHandle) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.swap_camera()
    }

    pub async fn update_scale_mode(
        &self,
        handle: ViewHandle,
        scale_mode: ScaleMode,
    ) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.update_scale_mode(scale_mode)
    }

    pub async fn update_log_level(
        &self,
        handle: ViewHandle,
        log_level: LogLevel,
    ) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.update_log_level(log_level)
    }

    pub async fn update_configuration(
        &self,
        handle: ViewHandle,
        configuration: StreamConfiguration,
    ) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.apply_configuration(configuration)
    }

    pub async fn poll_event(&self, handle: ViewHandle) -> Result<Option<StreamEvent>, StreamError> {
        let view = self.resolve(handle).await?;
        let event = lock_view(&view, handle)?.poll_event();
        Ok(event)
    }

    pub async fn drain_events(&self, handle: ViewHandle) -> Result<Vec<StreamEvent>, StreamError> {
        let view = self.resolve(handle).await?;
        let events = lock_view(&view, handle)?.drain_events();
        Ok(events)
    }

    pub async fn view_stats(&self, handle: ViewHandle) -> Result<ViewStats, StreamError> {
        let view = self.resolve(handle).await?;
        let stats = lock_view(&view, handle)?.stats();
        Ok(stats)
    }

    pub async fn active_views(&self) -> Vec<ViewHandle> {
        self.views.read().await.keys().copied().collect()
    }

    /// Entry point for the engine's asynchronous connection reports.
    pub async fn deliver_engine_event(
        &self,
        handle: ViewHandle,
        event: EngineEvent,
    ) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.handle_engine_event(event);
        Ok(())
    }

    /// Entry point for the engine's stream metadata reports.
    pub async fn deliver_metadata(
        &self,
        handle: ViewHandle,
        metadata: String,
    ) -> Result<(), StreamError> {
        let view = self.resolve(handle).await?;
        lock_view(&view, handle)?.handle_metadata(&metadata);
        Ok(())
    }

    async fn resolve(
        &self,
        handle: ViewHandle,
    ) -> Result<Arc<SyncMutex<StreamView>>, StreamError> {
        let views = self.views.read().await;
        views
            .get(&handle)
            .cloned()
            .ok_or_else(|| StreamError::InvalidHandle(handle.to_string()))
    }
}

fn lock_view<'a>(
    view: &'a Arc<SyncMutex<StreamView>>,
    handle: ViewHandle,
) -> Result<std::sync::MutexGuard<'a, StreamView>, StreamError> {
    view.lock()
        .map_err(|_| StreamError::BridgeError(format!("View {} mutex poisoned", handle)))
}
