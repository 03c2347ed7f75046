//! Route tables loaded from disk

use std::fs;

use tempfile::TempDir;
use testdesk_core::config::{ConfigManager, RoutingSettings};
use testdesk_core::routing::{HashRouter, configure_routes, run_routes};
use testdesk_core::tab::{TabRecorder, TabRequest};

#[test]
fn routes_from_file_drive_the_router() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());
    fs::write(
        manager.routes_path(),
        r##"
mount_point = "#desk"

[[routes]]
pattern = "#/runs/:RUN/logs"
log = "logs"

[routes.tab]
title = "Logs of {RUN}"
url = "/runs/{RUN}/logs"
"##,
    )
    .unwrap();

    let settings = manager.load_routing_settings().unwrap();
    let mut router = HashRouter::new(TabRecorder::new());
    let table = configure_routes(&mut router, settings).unwrap();
    run_routes(&table, &mut router, "#/runs/17/logs").unwrap();

    assert_eq!(router.mount_point(), Some("#desk"));
    assert_eq!(
        router.tabs().requests(),
        [TabRequest::new("Logs of 17", "/runs/17/logs")]
    );
}

#[test]
fn saved_defaults_reload_identically() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());
    manager
        .save_routing_settings(&RoutingSettings::default())
        .unwrap();

    let text = fs::read_to_string(manager.routes_path()).unwrap();
    assert!(text.contains("#/test_details/:ID"));
    assert!(text.contains("exclusive = true"));

    assert_eq!(
        manager.load_routing_settings().unwrap(),
        RoutingSettings::default()
    );
}

#[test]
fn file_with_unknown_placeholder_is_rejected() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());
    fs::write(
        manager.routes_path(),
        r##"
[[routes]]
pattern = "#/help"
log = "help"

[routes.tab]
title = "Help {topic}"
url = "/help"
"##,
    )
    .unwrap();

    let err = manager.load_routing_settings().unwrap_err();
    assert!(err.to_string().contains("{topic}"), "{err}");
}
