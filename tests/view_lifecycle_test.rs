#[cfg(test)]
mod view_lifecycle_tests {
    use crabstream::bridge::NativeCommand;
    use crabstream::events::StreamEvent;
    use crabstream::registry::ViewRegistry;
    use crabstream::testing::RecordingBridge;
    use crabstream::types::{
        PublishType, ScaleMode, StreamConfiguration, SubscribeOptions,
    };
    use std::sync::Arc;

    fn test_configuration() -> StreamConfiguration {
        StreamConfiguration::new("localhost", "live")
            .with_stream_name("cam1")
            .with_key("view1")
            .with_scale_mode(ScaleMode::Fit)
    }

    fn teardown_count(bridge: &RecordingBridge) -> usize {
        bridge
            .forwarded()
            .iter()
            .filter(|(_, c)| matches!(c, NativeCommand::Teardown))
            .count()
    }

    #[tokio::test]
    async fn test_mount_forwards_configure_and_reports_configured() {
        let bridge = Arc::new(RecordingBridge::new());
        let registry = ViewRegistry::new(bridge.clone());

        let configuration = test_configuration();
        let handle = registry.create_view(configuration.clone()).await.unwrap();

        assert_eq!(
            bridge.commands_for(handle),
            vec![NativeCommand::Configure { configuration }]
        );
        assert_eq!(
            registry.poll_event(handle).await.unwrap(),
            Some(StreamEvent::Configured {
                key: "view1".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_mount_rejects_invalid_configuration_without_native_call() {
        let bridge = Arc::new(RecordingBridge::new());
        let registry = ViewRegistry::new(bridge.clone());

        let mut configuration = test_configuration();
        configuration.host = String::new();

        let result = registry.create_view(configuration).await;
        assert!(result.is_err());
        assert_eq!(bridge.count(), 0);
        assert!(registry.active_views().await.is_empty());
    }

    #[tokio::test]
    async fn test_unmount_forwards_exactly_one_teardown() {
        let bridge = Arc::new(RecordingBridge::new());
        let registry = ViewRegistry::new(bridge.clone());

        let handle = registry.create_view(test_configuration()).await.unwrap();
        registry.dispose_view(handle).await.unwrap();

        assert_eq!(teardown_count(&bridge), 1);
        assert!(registry.active_views().await.is_empty());

        // The handle is invalid after disposal; a second dispose must not
        // forward another teardown.
        assert!(registry.dispose_view(handle).await.is_err());
        assert_eq!(teardown_count(&bridge), 1);
    }

    #[tokio::test]
    async fn test_error_triggered_unmount_still_forwards_one_teardown() {
        let bridge = Arc::new(RecordingBridge::new());
        let registry = ViewRegistry::new(bridge.clone());

        let handle = registry.create_view(test_configuration()).await.unwrap();

        // Engine starts rejecting dispatches mid-session.
        bridge.set_failing(true);
        assert!(registry
            .subscribe(handle, "cam1".to_string(), SubscribeOptions::default())
            .await
            .is_err());

        // The application tears the view down in response; the teardown
        // forward happens exactly once even though the bridge rejects it.
        assert!(registry.dispose_view(handle).await.is_err());
        assert_eq!(teardown_count(&bridge), 1);
    }

    #[tokio::test]
    async fn test_dropping_registry_releases_mounted_views() {
        let bridge = Arc::new(RecordingBridge::new());
        {
            let registry = ViewRegistry::new(bridge.clone());
            registry.create_view(test_configuration()).await.unwrap();
        }
        assert_eq!(teardown_count(&bridge), 1);
    }

    #[tokio::test]
    async fn test_scale_mode_change_forwards_exactly_one_update() {
        let bridge = Arc::new(RecordingBridge::new());
        let registry = ViewRegistry::new(bridge.clone());

        let handle = registry.create_view(test_configuration()).await.unwrap();
        bridge.clear();

        let mut updated = test_configuration();
        updated.scale_mode = ScaleMode::Fill;
        registry.update_configuration(handle, updated).await.unwrap();

        assert_eq!(
            bridge.commands_for(handle),
            vec![NativeCommand::UpdateScaleMode {
                scale_mode: ScaleMode::Fill
            }]
        );
    }

    #[tokio::test]
    async fn test_unchanged_configuration_forwards_nothing() {
        let bridge = Arc::new(RecordingBridge::new());
        let registry = ViewRegistry::new(bridge.clone());

        let handle = registry.create_view(test_configuration()).await.unwrap();
        bridge.clear();

        registry
            .update_configuration(handle, test_configuration())
            .await
            .unwrap();

        assert_eq!(bridge.count(), 0);
    }

    #[tokio::test]
    async fn test_connection_change_reconfigures_the_stream() {
        let bridge = Arc::new(RecordingBridge::new());
        let registry = ViewRegistry::new(bridge.clone());

        let handle = registry.create_view(test_configuration()).await.unwrap();
        registry.drain_events(handle).await.unwrap();
        bridge.clear();

        let mut updated = test_configuration();
        updated.host = "stream.example.com".to_string();
        updated.key = "view2".to_string();
        registry
            .update_configuration(handle, updated.clone())
            .await
            .unwrap();

        assert_eq!(
            bridge.commands_for(handle),
            vec![NativeCommand::Configure {
                configuration: updated
            }]
        );
        assert_eq!(
            registry.poll_event(handle).await.unwrap(),
            Some(StreamEvent::Configured {
                key: "view2".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_view_stats_reflect_role_and_stream() {
        let bridge = Arc::new(RecordingBridge::new());
        let registry = ViewRegistry::new(bridge.clone());

        let handle = registry.create_view(test_configuration()).await.unwrap();

        let stats = registry.view_stats(handle).await.unwrap();
        assert_eq!(stats.handle, handle);
        assert_eq!(stats.stream_name, None);
        assert!(!stats.is_publisher);
        assert!(!stats.is_streaming);

        registry
            .publish(handle, "cam1".to_string(), PublishType::Live)
            .await
            .unwrap();
        let stats = registry.view_stats(handle).await.unwrap();
        assert_eq!(stats.stream_name, Some("cam1".to_string()));
        assert!(stats.is_publisher);
    }

    #[tokio::test]
    async fn test_active_views_tracks_mounts() {
        let bridge = Arc::new(RecordingBridge::new());
        let registry = ViewRegistry::new(bridge.clone());

        let first = registry.create_view(test_configuration()).await.unwrap();
        let second = registry.create_view(test_configuration()).await.unwrap();
        assert_eq!(registry.active_views().await.len(), 2);

        registry.dispose_view(first).await.unwrap();
        let remaining = registry.active_views().await;
        assert_eq!(remaining, vec![second]);
    }
}
