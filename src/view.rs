//! The streaming view: configuration ownership, command forwarding, and
//! routing of engine reports into the per-view event queue.

use crate::bridge::{EngineEvent, NativeBridge, NativeCommand};
use crate::errors::StreamError;
use crate::events::{ConnectionStatus, EventQueue, StreamEvent};
use crate::types::{
    LogLevel, PublishType, ScaleMode, StreamConfiguration, SubscribeOptions, ViewHandle, ViewStats,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A mounted native streaming view.
///
/// Created by the registry at mount time; the native resource is acquired with
/// the initial configure instruction and released by a single teardown on
/// every unmount path, including error-triggered ones.
pub struct StreamView {
    handle: ViewHandle,
    bridge: Arc<dyn NativeBridge>,
    configuration: StreamConfiguration,
    events: EventQueue,
    current_stream: Option<String>,
    is_publisher: bool,
    is_streaming: bool,
    torn_down: bool,
    created_at: DateTime<Utc>,
}

impl StreamView {
    /// Mount a view: validate and forward the configuration, then report the
    /// configured event to the application.
    pub(crate) fn new(
        handle: ViewHandle,
        bridge: Arc<dyn NativeBridge>,
        configuration: StreamConfiguration,
    ) -> Result<Self, StreamError> {
        configuration.validate()?;

        bridge.dispatch(
            handle,
            NativeCommand::Configure {
                configuration: configuration.clone(),
            },
        )?;

        let events = EventQueue::new();
        events.push(StreamEvent::Configured {
            key: configuration.key.clone(),
        });

        Ok(Self {
            handle,
            bridge,
            configuration,
            events,
            current_stream: None,
            is_publisher: false,
            is_streaming: false,
            torn_down: false,
            created_at: Utc::now(),
        })
    }

    pub fn handle(&self) -> ViewHandle {
        self.handle
    }

    pub fn configuration(&self) -> &StreamConfiguration {
        &self.configuration
    }

    /// Request playback of a remote stream.
    pub fn subscribe(
        &mut self,
        stream_name: String,
        options: SubscribeOptions,
    ) -> Result<(), StreamError> {
        self.current_stream = Some(stream_name.clone());
        self.is_publisher = false;
        self.bridge.dispatch(
            self.handle,
            NativeCommand::Subscribe {
                stream_name,
                options,
            },
        )
    }

    /// Request teardown of a subscription. Forwarded even when no
    /// subscription is active; the engine decides whether it is a no-op.
    pub fn unsubscribe(&mut self) -> Result<(), StreamError> {
        self.bridge.dispatch(self.handle, NativeCommand::Unsubscribe)
    }

    /// Request broadcast of local capture under the given publish type.
    pub fn publish(
        &mut self,
        stream_name: String,
        publish_type: PublishType,
    ) -> Result<(), StreamError> {
        self.current_stream = Some(stream_name.clone());
        self.is_publisher = true;
        self.bridge.dispatch(
            self.handle,
            NativeCommand::Publish {
                stream_name,
                publish_type,
            },
        )
    }

    /// Request teardown of a publish session. Forwarded regardless of state.
    pub fn unpublish(&mut self) -> Result<(), StreamError> {
        self.bridge.dispatch(self.handle, NativeCommand::Unpublish)
    }

    /// Request a switch between capture devices. Whether a swap is possible
    /// is the engine's call; the back-facing flag only flips once the
    /// instruction was handed over.
    pub fn swap_camera(&mut self) -> Result<(), StreamError> {
        self.bridge.dispatch(self.handle, NativeCommand::SwapCamera)?;
        self.configuration.publisher.use_backfacing_camera =
            !self.configuration.publisher.use_backfacing_camera;
        Ok(())
    }

    /// Live change of how the surface scales its video content.
    pub fn update_scale_mode(&mut self, scale_mode: ScaleMode) -> Result<(), StreamError> {
        self.configuration.scale_mode = scale_mode;
        self.bridge
            .dispatch(self.handle, NativeCommand::UpdateScaleMode { scale_mode })
    }

    /// Live change of the engine's log verbosity.
    pub fn update_log_level(&mut self, log_level: LogLevel) -> Result<(), StreamError> {
        self.configuration.log_level = log_level;
        self.bridge
            .dispatch(self.handle, NativeCommand::UpdateLogLevel { log_level })
    }

    /// Diff an incoming configuration against the current one and forward only
    /// what changed.
    ///
    /// A connection-identity change reconfigures the native stream outright.
    /// Otherwise scale mode, log level, audio mode and the debug overlay are
    /// forwarded individually as live updates; publisher capture settings are
    /// stored and take effect on the next publish.
    pub fn apply_configuration(
        &mut self,
        configuration: StreamConfiguration,
    ) -> Result<(), StreamError> {
        configuration.validate()?;

        if !self.configuration.same_connection(&configuration) {
            self.bridge.dispatch(
                self.handle,
                NativeCommand::Configure {
                    configuration: configuration.clone(),
                },
            )?;
            self.events.push(StreamEvent::Configured {
                key: configuration.key.clone(),
            });
            self.configuration = configuration;
            return Ok(());
        }

        if self.configuration.scale_mode != configuration.scale_mode {
            self.bridge.dispatch(
                self.handle,
                NativeCommand::UpdateScaleMode {
                    scale_mode: configuration.scale_mode,
                },
            )?;
        }
        if self.configuration.log_level != configuration.log_level {
            self.bridge.dispatch(
                self.handle,
                NativeCommand::UpdateLogLevel {
                    log_level: configuration.log_level,
                },
            )?;
        }
        if self.configuration.audio_mode != configuration.audio_mode {
            self.bridge.dispatch(
                self.handle,
                NativeCommand::UpdateAudioMode {
                    audio_mode: configuration.audio_mode,
                },
            )?;
        }
        if self.configuration.show_debug != configuration.show_debug {
            self.bridge.dispatch(
                self.handle,
                NativeCommand::ShowDebugView {
                    show: configuration.show_debug,
                },
            )?;
        }

        self.configuration = configuration;
        Ok(())
    }

    /// Route an engine connection report into the event queue.
    ///
    /// Status events go to the publisher or subscriber channel depending on
    /// which role the view last took. A disconnect while streaming
    /// additionally emits the matching end-of-stream notification and resets
    /// streaming state.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        log::debug!("View {}: engine event {}", self.handle, event.name());

        let status = ConnectionStatus {
            code: event.code(),
            name: event.name().to_string(),
            message: event.message().to_string(),
            stream_name: self.current_stream.clone().unwrap_or_default(),
        };
        if self.is_publisher {
            self.events.push(StreamEvent::PublisherStatus { status });
        } else {
            self.events.push(StreamEvent::SubscriberStatus { status });
        }

        match event {
            EngineEvent::StartStreaming => {
                self.is_streaming = true;
            }
            EngineEvent::Disconnected if self.is_streaming => {
                if self.is_publisher {
                    self.events.push(StreamEvent::UnpublishNotification);
                } else {
                    self.events.push(StreamEvent::UnsubscribeNotification);
                }
                self.cleanup();
            }
            _ => {}
        }
    }

    /// Route a metadata report into the event queue.
    ///
    /// Metadata arrives as `key=value` pairs separated by semicolons. An
    /// `orientation` key forwards a rotation hint to the rendered surface;
    /// the raw string is then delivered to the application unmodified.
    pub fn handle_metadata(&mut self, metadata: &str) {
        for prop in metadata.split(';') {
            let mut kv = prop.splitn(2, '=');
            if let (Some(key), Some(value)) = (kv.next(), kv.next()) {
                if key.eq_ignore_ascii_case("orientation") {
                    match value.trim().parse::<i32>() {
                        Ok(orientation) => {
                            // Subscriber surfaces render 90 degrees off the
                            // reported capture orientation.
                            let degrees = orientation + 90;
                            if let Err(e) = self
                                .bridge
                                .dispatch(self.handle, NativeCommand::SetStreamRotation { degrees })
                            {
                                log::warn!(
                                    "View {}: failed to forward stream rotation: {}",
                                    self.handle,
                                    e
                                );
                            }
                        }
                        Err(_) => {
                            log::warn!(
                                "View {}: ignoring malformed orientation metadata: {}",
                                self.handle,
                                value
                            );
                        }
                    }
                }
            }
        }

        self.events.push(StreamEvent::Metadata {
            metadata: metadata.to_string(),
        });
    }

    pub fn poll_event(&mut self) -> Option<StreamEvent> {
        self.events.poll()
    }

    pub fn drain_events(&mut self) -> Vec<StreamEvent> {
        self.events.drain()
    }

    pub fn stats(&self) -> ViewStats {
        ViewStats {
            handle: self.handle,
            stream_name: self.current_stream.clone(),
            is_publisher: self.is_publisher,
            is_streaming: self.is_streaming,
            created_at: self.created_at,
        }
    }

    /// Release the native resource. Exactly one teardown is forwarded no
    /// matter how often this is called or whether the view is dropped
    /// without an explicit dispose.
    pub fn teardown(&mut self) -> Result<(), StreamError> {
        if self.torn_down {
            return Ok(());
        }
        self.torn_down = true;
        self.bridge.dispatch(self.handle, NativeCommand::Teardown)
    }

    fn cleanup(&mut self) {
        self.is_streaming = false;
        self.current_stream = None;
    }
}

impl Drop for StreamView {
    fn drop(&mut self) {
        if !self.torn_down {
            if let Err(e) = self.teardown() {
                log::warn!("View {}: teardown on drop failed: {}", self.handle, e);
            }
        }
    }
}
