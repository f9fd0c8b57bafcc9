//! Core types shared across the streaming view layer.
//!
//! The enumerations here are static tables translating symbolic names to the
//! primitive values the native engine expects. They carry no state; their only
//! operation is lookup.

use crate::errors::StreamError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a mounted streaming view.
///
/// Handles are allocated by the registry at mount time and are the only way
/// application code addresses a native view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewHandle(Uuid);

impl ViewHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the rendered surface scales its video content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Fill the surface, cropping overflow.
    Fill,
    /// Fit inside the surface, letterboxing as needed.
    Fit,
    /// Stretch to the surface bounds, ignoring aspect ratio.
    Stretch,
}

impl ScaleMode {
    /// Numeric value the native engine expects.
    pub fn value(&self) -> i32 {
        match self {
            ScaleMode::Fill => 0,
            ScaleMode::Fit => 1,
            ScaleMode::Stretch => 2,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(ScaleMode::Fill),
            1 => Some(ScaleMode::Fit),
            2 => Some(ScaleMode::Stretch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleMode::Fill => "fill",
            ScaleMode::Fit => "fit",
            ScaleMode::Stretch => "stretch",
        }
    }
}

impl Default for ScaleMode {
    fn default() -> Self {
        ScaleMode::Fill
    }
}

/// How a published stream is handled server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishType {
    /// Live broadcast only.
    Live,
    /// Broadcast and record server-side.
    Record,
    /// Broadcast and append to an existing recording.
    Append,
}

impl PublishType {
    pub fn value(&self) -> i32 {
        match self {
            PublishType::Live => 0,
            PublishType::Record => 1,
            PublishType::Append => 2,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(PublishType::Live),
            1 => Some(PublishType::Record),
            2 => Some(PublishType::Append),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PublishType::Live => "live",
            PublishType::Record => "record",
            PublishType::Append => "append",
        }
    }
}

impl Default for PublishType {
    fn default() -> Self {
        PublishType::Live
    }
}

/// Native engine log verbosity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn value(&self) -> i32 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Warn),
            3 => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Error
    }
}

/// Audio playback mode for subscribed streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioMode {
    /// Echo-cancelled playback, suitable for two-way audio.
    EchoCancellation,
    /// Standard playback.
    Standard,
}

impl AudioMode {
    pub fn value(&self) -> i32 {
        match self {
            AudioMode::EchoCancellation => 0,
            AudioMode::Standard => 1,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(AudioMode::EchoCancellation),
            1 => Some(AudioMode::Standard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioMode::EchoCancellation => "echo_cancellation",
            AudioMode::Standard => "standard",
        }
    }
}

impl Default for AudioMode {
    fn default() -> Self {
        AudioMode::EchoCancellation
    }
}

/// Capture settings applied when the view publishes.
///
/// Stored on the view and forwarded as part of the publish instruction; changing
/// them while a publish session is live has no effect until the next publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherSettings {
    pub use_video: bool,
    pub use_audio: bool,
    pub camera_width: u32,
    pub camera_height: u32,
    /// Video bitrate in kbps.
    pub bitrate: u32,
    pub framerate: u32,
    /// Audio bitrate in kbps.
    pub audio_bitrate: u32,
    pub audio_sample_rate: u32,
    pub use_adaptive_bitrate: bool,
    pub use_backfacing_camera: bool,
}

impl Default for PublisherSettings {
    fn default() -> Self {
        Self {
            use_video: true,
            use_audio: true,
            camera_width: 640,
            camera_height: 360,
            bitrate: 750,
            framerate: 15,
            audio_bitrate: 32,
            audio_sample_rate: 44100,
            use_adaptive_bitrate: false,
            use_backfacing_camera: false,
        }
    }
}

/// Complete configuration bag for a streaming view.
///
/// Owned by the hosting application; set at mount time and updated through
/// commands. Connection fields identify the media server endpoint; the
/// remaining fields parametrize rendering and capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamConfiguration {
    pub host: String,
    pub port: u16,
    pub context_name: String,
    pub stream_name: String,
    /// Application-chosen key echoed back on the configured event.
    pub key: String,
    pub buffer_time: f32,
    pub stream_buffer_time: f32,
    pub bundle_id: String,
    pub license_key: String,
    /// Free-form connection parameters passed through to the engine.
    pub parameters: String,
    pub scale_mode: ScaleMode,
    pub log_level: LogLevel,
    pub audio_mode: AudioMode,
    pub show_debug: bool,
    pub publisher: PublisherSettings,
}

impl StreamConfiguration {
    pub fn new(host: impl Into<String>, context_name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            context_name: context_name.into(),
            ..Self::default()
        }
    }

    pub fn with_stream_name(mut self, stream_name: impl Into<String>) -> Self {
        self.stream_name = stream_name.into();
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_audio_mode(mut self, audio_mode: AudioMode) -> Self {
        self.audio_mode = audio_mode;
        self
    }

    pub fn with_publisher(mut self, publisher: PublisherSettings) -> Self {
        self.publisher = publisher;
        self
    }

    /// Check the configuration before it is forwarded to the engine.
    pub fn validate(&self) -> Result<(), StreamError> {
        if self.host.is_empty() {
            return Err(StreamError::ConfigurationError(
                "Host must not be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(StreamError::ConfigurationError(
                "Port must be non-zero".to_string(),
            ));
        }
        if self.context_name.is_empty() {
            return Err(StreamError::ConfigurationError(
                "Context name must not be empty".to_string(),
            ));
        }
        if self.buffer_time <= 0.0 || self.stream_buffer_time <= 0.0 {
            return Err(StreamError::ConfigurationError(
                "Buffer times must be positive".to_string(),
            ));
        }
        if self.publisher.camera_width == 0 || self.publisher.camera_height == 0 {
            return Err(StreamError::ConfigurationError(
                "Invalid camera resolution".to_string(),
            ));
        }
        if self.publisher.framerate == 0 || self.publisher.framerate > 120 {
            return Err(StreamError::ConfigurationError(
                "Invalid framerate (must be 1-120)".to_string(),
            ));
        }
        if self.publisher.bitrate == 0 || self.publisher.audio_bitrate == 0 {
            return Err(StreamError::ConfigurationError(
                "Bitrates must be non-zero".to_string(),
            ));
        }
        if self.publisher.audio_sample_rate == 0 {
            return Err(StreamError::ConfigurationError(
                "Audio sample rate must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether two configurations address the same connection.
    ///
    /// A change in any of these fields requires a full reconfigure of the
    /// native stream rather than a live parameter update.
    pub fn same_connection(&self, other: &Self) -> bool {
        self.host == other.host
            && self.port == other.port
            && self.context_name == other.context_name
            && self.stream_name == other.stream_name
            && self.key == other.key
            && self.buffer_time == other.buffer_time
            && self.stream_buffer_time == other.stream_buffer_time
            && self.bundle_id == other.bundle_id
            && self.license_key == other.license_key
            && self.parameters == other.parameters
    }
}

impl Default for StreamConfiguration {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 8554,
            context_name: "live".to_string(),
            stream_name: "mystream".to_string(),
            key: String::new(),
            buffer_time: 1.0,
            stream_buffer_time: 2.0,
            bundle_id: "com.crabstream.desktop".to_string(),
            license_key: String::new(),
            parameters: String::new(),
            scale_mode: ScaleMode::default(),
            log_level: LogLevel::default(),
            audio_mode: AudioMode::default(),
            show_debug: false,
            publisher: PublisherSettings::default(),
        }
    }
}

/// Per-subscription overrides supplied alongside a subscribe command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscribeOptions {
    pub audio_mode: Option<AudioMode>,
    pub stream_buffer_time: Option<f32>,
}

/// Snapshot of a mounted view's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewStats {
    pub handle: ViewHandle,
    pub stream_name: Option<String>,
    pub is_publisher: bool,
    pub is_streaming: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
