//! Configuration management for CrabStream
//!
//! Provides loading, saving, and validation of the defaults applied to new
//! stream views: connection parameters, publisher capture settings, and view
//! rendering options.

use crate::errors::StreamError;
use crate::types::{
    AudioMode, LogLevel, PublisherSettings, ScaleMode, StreamConfiguration,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrabStreamConfig {
    pub connection: ConnectionConfig,
    pub publisher: PublisherConfig,
    pub view: ViewConfig,
}

/// Media server connection defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Default server port
    pub default_port: u16,
    /// Connection buffer time in seconds
    pub buffer_time: f32,
    /// Server-side stream buffer time in seconds
    pub stream_buffer_time: f32,
    /// Application bundle identifier sent to the server
    pub bundle_id: String,
}

/// Publisher capture defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Capture resolution [width, height]
    pub camera_resolution: [u32; 2],
    /// Video bitrate in kbps
    pub bitrate: u32,
    /// Capture frames per second
    pub framerate: u32,
    /// Audio bitrate in kbps
    pub audio_bitrate: u32,
    /// Audio sample rate in Hz
    pub audio_sample_rate: u32,
}

/// View rendering defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Default surface scale mode
    pub scale_mode: ScaleMode,
    /// Default engine log verbosity
    pub log_level: LogLevel,
    /// Default subscriber audio mode
    pub audio_mode: AudioMode,
    /// Show the engine's debug overlay
    pub show_debug: bool,
}

impl Default for CrabStreamConfig {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig {
                default_port: 8554,
                buffer_time: 1.0,
                stream_buffer_time: 2.0,
                bundle_id: "com.crabstream.desktop".to_string(),
            },
            publisher: PublisherConfig {
                camera_resolution: [640, 360],
                bitrate: 750,
                framerate: 15,
                audio_bitrate: 32,
                audio_sample_rate: 44100,
            },
            view: ViewConfig {
                scale_mode: ScaleMode::Fill,
                log_level: LogLevel::Error,
                audio_mode: AudioMode::EchoCancellation,
                show_debug: false,
            },
        }
    }
}

impl CrabStreamConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StreamError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            StreamError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: CrabStreamConfig = toml::from_str(&contents).map_err(|e| {
            StreamError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StreamError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StreamError::ConfigurationError(format!(
                    "Failed to create config directory: {}",
                    e
                ))
            })?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| {
            StreamError::ConfigurationError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, toml_string).map_err(|e| {
            StreamError::ConfigurationError(format!("Failed to write config file: {}", e))
        })?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("crabstream.toml")
    }

    /// Load from default location or create with defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.connection.default_port == 0 {
            return Err("Invalid default port".to_string());
        }
        if self.connection.buffer_time <= 0.0 || self.connection.stream_buffer_time <= 0.0 {
            return Err("Buffer times must be positive".to_string());
        }

        if self.publisher.camera_resolution[0] == 0 || self.publisher.camera_resolution[1] == 0 {
            return Err("Invalid camera resolution".to_string());
        }
        if self.publisher.framerate == 0 || self.publisher.framerate > 120 {
            return Err("Invalid framerate (must be 1-120)".to_string());
        }
        if self.publisher.bitrate == 0 {
            return Err("Bitrate must be non-zero".to_string());
        }
        if self.publisher.audio_bitrate == 0 || self.publisher.audio_sample_rate == 0 {
            return Err("Invalid audio settings".to_string());
        }

        Ok(())
    }

    /// Build a view configuration for the given endpoint from these defaults.
    pub fn stream_configuration(
        &self,
        host: impl Into<String>,
        context_name: impl Into<String>,
        stream_name: impl Into<String>,
    ) -> StreamConfiguration {
        StreamConfiguration {
            host: host.into(),
            port: self.connection.default_port,
            context_name: context_name.into(),
            stream_name: stream_name.into(),
            buffer_time: self.connection.buffer_time,
            stream_buffer_time: self.connection.stream_buffer_time,
            bundle_id: self.connection.bundle_id.clone(),
            scale_mode: self.view.scale_mode,
            log_level: self.view.log_level,
            audio_mode: self.view.audio_mode,
            show_debug: self.view.show_debug,
            publisher: PublisherSettings {
                camera_width: self.publisher.camera_resolution[0],
                camera_height: self.publisher.camera_resolution[1],
                bitrate: self.publisher.bitrate,
                framerate: self.publisher.framerate,
                audio_bitrate: self.publisher.audio_bitrate,
                audio_sample_rate: self.publisher.audio_sample_rate,
                ..PublisherSettings::default()
            },
            ..StreamConfiguration::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CrabStreamConfig::default();
        assert_eq!(config.connection.default_port, 8554);
        assert_eq!(config.publisher.camera_resolution, [640, 360]);
        assert_eq!(config.view.log_level, LogLevel::Error);
    }

    #[test]
    fn test_config_validation() {
        let config = CrabStreamConfig::default();
        assert!(config.validate().is_ok());

        let mut bad_config = config.clone();
        bad_config.connection.default_port = 0;
        assert!(bad_config.validate().is_err());

        let mut bad_publisher = CrabStreamConfig::default();
        bad_publisher.publisher.framerate = 500;
        assert!(bad_publisher.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("test_crabstream.toml");

        let config = CrabStreamConfig::default();
        assert!(config.save_to_file(&config_path).is_ok());

        let loaded = CrabStreamConfig::load_from_file(&config_path).unwrap();
        assert_eq!(
            loaded.connection.default_port,
            config.connection.default_port
        );
        assert_eq!(loaded.publisher.bitrate, config.publisher.bitrate);
    }

    #[test]
    fn test_config_toml_format() {
        let config = CrabStreamConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        assert!(toml_string.contains("[connection]"));
        assert!(toml_string.contains("[publisher]"));
        assert!(toml_string.contains("[view]"));
        assert!(toml_string.contains("default_port"));
        assert!(toml_string.contains("camera_resolution"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = CrabStreamConfig::load_from_file("nonexistent_file.toml");
        assert!(result.is_ok()); // Should return default
        assert_eq!(result.unwrap().connection.default_port, 8554);
    }

    #[test]
    fn test_stream_configuration_from_defaults() {
        let config = CrabStreamConfig::default();
        let view_config = config.stream_configuration("localhost", "live", "cam1");

        assert_eq!(view_config.host, "localhost");
        assert_eq!(view_config.port, 8554);
        assert_eq!(view_config.stream_name, "cam1");
        assert_eq!(view_config.publisher.camera_width, 640);
        assert!(view_config.validate().is_ok());
    }
}
