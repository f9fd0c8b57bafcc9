#[cfg(test)]
mod types_tests {
    use crabstream::types::{AudioMode, LogLevel, PublishType, ScaleMode};

    #[test]
    fn test_scale_mode_values_unique() {
        let modes = [ScaleMode::Fill, ScaleMode::Fit, ScaleMode::Stretch];
        let mut values: Vec<i32> = modes.iter().map(|m| m.value()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), modes.len(), "Scale mode values must be unique");
    }

    #[test]
    fn test_publish_type_values_unique() {
        let types = [PublishType::Live, PublishType::Record, PublishType::Append];
        let mut values: Vec<i32> = types.iter().map(|t| t.value()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), types.len(), "Publish type values must be unique");
    }

    #[test]
    fn test_log_level_values_unique_and_ordered() {
        let levels = [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ];
        let values: Vec<i32> = levels.iter().map(|l| l.value()).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), levels.len(), "Log level values must be unique");
        assert_eq!(values, sorted, "Log levels must be ordered by verbosity");
    }

    #[test]
    fn test_audio_mode_values_unique() {
        assert_ne!(
            AudioMode::EchoCancellation.value(),
            AudioMode::Standard.value()
        );
    }

    #[test]
    fn test_lookup_is_referentially_stable() {
        // Looking up the same name twice yields the same value
        assert_eq!(ScaleMode::Fit.value(), ScaleMode::Fit.value());
        assert_eq!(PublishType::Record.value(), PublishType::Record.value());
        assert_eq!(LogLevel::Warn.value(), LogLevel::Warn.value());
        assert_eq!(
            AudioMode::EchoCancellation.value(),
            AudioMode::EchoCancellation.value()
        );
    }

    #[test]
    fn test_from_value_round_trip() {
        for mode in [ScaleMode::Fill, ScaleMode::Fit, ScaleMode::Stretch] {
            assert_eq!(ScaleMode::from_value(mode.value()), Some(mode));
        }
        for publish_type in [PublishType::Live, PublishType::Record, PublishType::Append] {
            assert_eq!(PublishType::from_value(publish_type.value()), Some(publish_type));
        }
        assert_eq!(ScaleMode::from_value(-1), None);
        assert_eq!(PublishType::from_value(3), None);
        assert_eq!(LogLevel::from_value(4), None);
        assert_eq!(AudioMode::from_value(2), None);
    }

    #[test]
    fn test_defaults_match_engine_defaults() {
        assert_eq!(ScaleMode::default(), ScaleMode::Fill);
        assert_eq!(LogLevel::default(), LogLevel::Error);
        assert_eq!(AudioMode::default(), AudioMode::EchoCancellation);
        assert_eq!(PublishType::default(), PublishType::Live);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&ScaleMode::Stretch).unwrap(),
            "\"stretch\""
        );
        assert_eq!(
            serde_json::from_str::<PublishType>("\"append\"").unwrap(),
            PublishType::Append
        );
    }
}
