use thiserror::Error;

/// Errors surfaced by the streaming view layer.
///
/// Domain failures (unreachable stream, codec errors, device problems) are the
/// native engine's to report through the event channel; the variants here only
/// cover what the wrapper itself can get wrong.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Invalid view handle: {0}")]
    InvalidHandle(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Bridge error: {0}")]
    BridgeError(String),
}
