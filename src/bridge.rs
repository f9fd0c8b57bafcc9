//! The seam between this wrapper and the native streaming engine.
//!
//! Everything the wrapper ever asks of the engine is one of the
//! [`NativeCommand`] variants below, dispatched by view handle. The engine's
//! asynchronous reports come back as [`EngineEvent`]s through the registry;
//! this layer routes them to the owning view's queue unmodified.

use crate::errors::StreamError;
use crate::types::{
    AudioMode, LogLevel, PublishType, ScaleMode, StreamConfiguration, SubscribeOptions, ViewHandle,
};

/// A single instruction forwarded to the native layer.
///
/// Fire-and-forget: dispatching only means the instruction was handed over,
/// never that the underlying action succeeded. Enumeration arguments are
/// converted to engine primitives by the bridge implementation via their
/// `value()` tables.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeCommand {
    Configure { configuration: StreamConfiguration },
    Subscribe { stream_name: String, options: SubscribeOptions },
    Publish { stream_name: String, publish_type: PublishType },
    Unsubscribe,
    Unpublish,
    SwapCamera,
    UpdateScaleMode { scale_mode: ScaleMode },
    UpdateLogLevel { log_level: LogLevel },
    UpdateAudioMode { audio_mode: AudioMode },
    ShowDebugView { show: bool },
    /// Rotation hint for the rendered stream, derived from stream metadata.
    SetStreamRotation { degrees: i32 },
    Teardown,
}

impl NativeCommand {
    pub fn name(&self) -> &'static str {
        match self {
            NativeCommand::Configure { .. } => "configure",
            NativeCommand::Subscribe { .. } => "subscribe",
            NativeCommand::Publish { .. } => "publish",
            NativeCommand::Unsubscribe => "unsubscribe",
            NativeCommand::Unpublish => "unpublish",
            NativeCommand::SwapCamera => "swapCamera",
            NativeCommand::UpdateScaleMode { .. } => "updateScaleMode",
            NativeCommand::UpdateLogLevel { .. } => "updateLogLevel",
            NativeCommand::UpdateAudioMode { .. } => "updateAudioMode",
            NativeCommand::ShowDebugView { .. } => "showDebugView",
            NativeCommand::SetStreamRotation { .. } => "setStreamRotation",
            NativeCommand::Teardown => "teardown",
        }
    }
}

/// Dispatch surface of the native streaming engine.
///
/// Implementations bind a concrete SDK (or a test double) and are expected to
/// return quickly: the real work happens asynchronously inside the engine and
/// is reported back through the event channel. An `Err` here means the
/// instruction could not be handed over at all.
pub trait NativeBridge: Send + Sync {
    fn dispatch(&self, handle: ViewHandle, command: NativeCommand) -> Result<(), StreamError>;
}

/// Asynchronous connection report from the native engine.
///
/// Codes and names mirror the wrapped engine's connection event table so the
/// application sees them unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Connected,
    Disconnected,
    Error { message: String },
    Timeout,
    Close,
    StartStreaming,
    StopStreaming,
    NetStatus { message: String },
    LicenseError,
    LicenseValid,
}

impl EngineEvent {
    pub fn code(&self) -> i32 {
        match self {
            EngineEvent::Connected => 0,
            EngineEvent::Disconnected => 1,
            EngineEvent::Error { .. } => 2,
            EngineEvent::Timeout => 3,
            EngineEvent::Close => 4,
            EngineEvent::StartStreaming => 5,
            EngineEvent::StopStreaming => 6,
            EngineEvent::NetStatus { .. } => 7,
            EngineEvent::LicenseError => 12,
            EngineEvent::LicenseValid => 13,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::Connected => "CONNECTED",
            EngineEvent::Disconnected => "DISCONNECTED",
            EngineEvent::Error { .. } => "ERROR",
            EngineEvent::Timeout => "TIMEOUT",
            EngineEvent::Close => "CLOSE",
            EngineEvent::StartStreaming => "START_STREAMING",
            EngineEvent::StopStreaming => "STOP_STREAMING",
            EngineEvent::NetStatus { .. } => "NET_STATUS",
            EngineEvent::LicenseError => "LICENSE_ERROR",
            EngineEvent::LicenseValid => "LICENSE_VALID",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            EngineEvent::Error { message } | EngineEvent::NetStatus { message } => message,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(NativeCommand::Unsubscribe.name(), "unsubscribe");
        assert_eq!(NativeCommand::SwapCamera.name(), "swapCamera");
        assert_eq!(
            NativeCommand::UpdateScaleMode {
                scale_mode: ScaleMode::Fit
            }
            .name(),
            "updateScaleMode"
        );
    }

    #[test]
    fn test_engine_event_codes_unique() {
        let events = vec![
            EngineEvent::Connected,
            EngineEvent::Disconnected,
            EngineEvent::Error {
                message: String::new(),
            },
            EngineEvent::Timeout,
            EngineEvent::Close,
            EngineEvent::StartStreaming,
            EngineEvent::StopStreaming,
            EngineEvent::NetStatus {
                message: String::new(),
            },
            EngineEvent::LicenseError,
            EngineEvent::LicenseValid,
        ];
        let mut codes: Vec<i32> = events.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), events.len());
    }

    #[test]
    fn test_engine_event_message() {
        let event = EngineEvent::Error {
            message: "no route to host".to_string(),
        };
        assert_eq!(event.message(), "no route to host");
        assert_eq!(EngineEvent::Connected.message(), "");
    }
}
