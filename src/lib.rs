//! CrabStream: Native streaming view integration for Tauri applications
//!
//! This crate bridges a native media-server streaming view (publish/subscribe)
//! into the webview layer: mounted views are addressed by opaque handles, a
//! small set of commands forwards imperative instructions to the native
//! engine, and the engine's asynchronous reports come back through an ordered
//! per-view event queue.
//!
//! # Features
//! - Explicit handle registry for mounted streaming views
//! - Fire-and-forget command forwarding (subscribe, publish, camera swap,
//!   live scale-mode changes)
//! - Ordered event delivery for connection status and stream metadata
//! - Enumeration tables matching the wrapped engine's values
//!
//! The engine itself (capture, codecs, transport, signaling) is not part of
//! this crate; the host application supplies a [`NativeBridge`] binding.
//!
//! # Usage
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! crabstream = "0.3"
//! tauri = { version = "2.0", features = ["protocol-asset"] }
//! ```
//!
//! Then in your Tauri app:
//! ```rust,ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(crabstream::init(MyEngineBridge::new()))
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
pub mod bridge;
pub mod commands;
pub mod config;
pub mod errors;
pub mod events;
pub mod registry;
pub mod types;
pub mod view;

// Testing utilities - recording bridge for engine-free tests
pub mod testing;

// Re-exports for convenience
pub use bridge::{EngineEvent, NativeBridge, NativeCommand};
pub use config::CrabStreamConfig;
pub use errors::StreamError;
pub use events::{ConnectionStatus, StreamEvent};
pub use registry::ViewRegistry;
pub use types::{
    AudioMode, LogLevel, PublishType, PublisherSettings, ScaleMode, StreamConfiguration,
    SubscribeOptions, ViewHandle, ViewStats,
};
pub use view::StreamView;

use std::sync::Arc;
use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

/// Initialize the CrabStream plugin with the given native engine bridge
pub fn init<R: Runtime, B: NativeBridge + 'static>(bridge: B) -> TauriPlugin<R> {
    let registry = ViewRegistry::new(Arc::new(bridge));

    Builder::new("crabstream")
        .invoke_handler(tauri::generate_handler![
            // Lifecycle commands
            commands::lifecycle::create_stream_view,
            commands::lifecycle::dispose_stream_view,
            commands::lifecycle::update_configuration,
            commands::lifecycle::get_view_stats,
            commands::lifecycle::get_active_views,
            // Stream commands
            commands::stream::subscribe,
            commands::stream::unsubscribe,
            commands::stream::publish,
            commands::stream::unpublish,
            commands::stream::swap_camera,
            commands::stream::update_scale_mode,
            commands::stream::update_log_level,
            // Event channel commands
            commands::events::poll_stream_event,
            commands::events::drain_stream_events,
        ])
        .setup(move |app, _api| {
            app.manage(registry);
            Ok(())
        })
        .build()
}

/// Initialize logging for the streaming layer
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "crabstream=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
