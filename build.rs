const COMMANDS: &[&str] = &[
    "create_stream_view",
    "dispose_stream_view",
    "update_configuration",
    "get_view_stats",
    "get_active_views",
    "subscribe",
    "unsubscribe",
    "publish",
    "unpublish",
    "swap_camera",
    "update_scale_mode",
    "update_log_level",
    "poll_stream_event",
    "drain_stream_events",
];

fn main() {
    tauri_plugin::Builder::new(COMMANDS).build();
}
