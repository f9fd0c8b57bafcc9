#[cfg(test)]
mod error_tests {
    use crabstream::errors::StreamError;
    use std::error::Error;

    #[test]
    fn test_invalid_handle_display() {
        let error = StreamError::InvalidHandle("abc-123".to_string());
        assert!(error.to_string().contains("Invalid view handle"));
        assert!(error.to_string().contains("abc-123"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = StreamError::ConfigurationError("Host must not be empty".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("Host must not be empty"));
    }

    #[test]
    fn test_bridge_error_display() {
        let error = StreamError::BridgeError("dispatch refused".to_string());
        assert_eq!(error.to_string(), "Bridge error: dispatch refused");
    }

    #[test]
    fn test_debug_format() {
        let error = StreamError::InvalidHandle("debug".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidHandle"));
        assert!(debug_str.contains("debug"));
    }

    #[test]
    fn test_implements_error_trait() {
        let error = StreamError::BridgeError("trait test".to_string());
        let _error_trait: &dyn Error = &error;
        assert!(error.source().is_none());
    }
}
