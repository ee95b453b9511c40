//! Integration tests for the webviewd host runtime

use serde_json::json;
use sim_clock::{Duration, SimClock};
use std::io::Write;
use webviewd::{ConfigFile, HostMode, HostRuntime, HostRuntimeConfig};

fn scripted(script: &str) -> HostRuntime {
    let config = HostRuntimeConfig {
        script: Some(script.to_string()),
        ..HostRuntimeConfig::default()
    };
    HostRuntime::with_clock(config, SimClock::at_unix_epoch()).unwrap()
}

#[test]
fn test_scripted_dev_session() {
    let script = r#"
        # push sample data, then round-trip a script
        send currentUser
        call GetUsers
        wait 500ms
        quit
    "#;

    let mut runtime = scripted(script);
    runtime.run().unwrap();

    let display = runtime.display().unwrap();
    assert_eq!(display.received(), 2);

    let last = display.last().unwrap();
    assert_eq!(last["scriptName"], "GetUsers");
    assert_eq!(last["data"][0]["name"], "John Doe");
    assert_eq!(last["timestamp"], "1970-01-01T00:00:00.500Z");
    assert!(runtime.is_shutdown());
}

#[test]
fn test_unknown_script_delivers_failure() {
    let mut runtime = scripted("call Nope\nwait 1s");
    runtime.run().unwrap();

    let last = runtime.display().unwrap().last().unwrap();
    assert_eq!(
        last["data"],
        json!({"success": false, "message": "Unknown script: Nope"})
    );
}

#[test]
fn test_response_waits_for_delay() {
    let mut runtime = scripted("call GetRecords {\"limit\":10}\nwait 499ms");
    runtime.run().unwrap();

    assert_eq!(runtime.display().unwrap().received(), 0);
    assert_eq!(runtime.bridge().pending_deliveries(), 1);

    let mock = runtime.bridge().mock_host().unwrap();
    assert_eq!(mock.script_log().len(), 1);
    assert_eq!(mock.script_log()[0].parameter, json!({"limit": 10}));
}

#[test]
fn test_calls_delivered_in_order() {
    let mut runtime = scripted("app get-users\napp get-records\nwait 500ms");
    runtime.run().unwrap();

    let display = runtime.display().unwrap();
    assert_eq!(display.received(), 2);
    assert_eq!(display.last().unwrap()["scriptName"], "GetRecords");

    let mock = runtime.bridge().mock_host().unwrap();
    let names: Vec<&str> = mock
        .script_log()
        .iter()
        .map(|r| r.script_name.as_str())
        .collect();
    assert_eq!(names, vec!["GetUsers", "GetRecords"]);
}

#[test]
fn test_custom_response_is_delivered() {
    let script = r#"
        respond GetUsers [{"id": 9, "name": "Custom"}]
        call GetUsers
        wait 500ms
    "#;

    let mut runtime = scripted(script);
    runtime.run().unwrap();

    let last = runtime.display().unwrap().last().unwrap();
    assert_eq!(last["data"], json!([{"id": 9, "name": "Custom"}]));
}

#[test]
fn test_panel_log_is_bounded() {
    let script = "send users\n".repeat(12);

    let mut runtime = scripted(&script);
    runtime.run().unwrap();

    let controls = runtime.controls().unwrap();
    assert_eq!(controls.log().len(), 10);
    assert_eq!(runtime.display().unwrap().received(), 12);
}

#[test]
fn test_clear_resets_log() {
    let mut runtime = scripted("call GetUsers\nclear");
    runtime.run().unwrap();

    assert!(runtime.bridge().mock_host().unwrap().script_log().is_empty());
    let lines = runtime.controls().unwrap().log().render_lines();
    assert_eq!(lines, vec!["Log cleared...".to_string()]);
    assert!(runtime.last_frame().contains("Log cleared..."));
}

#[test]
fn test_malformed_json_mutates_nothing() {
    let mut runtime = scripted("send custom {\"broken\": \nrespond GetUsers nope");
    runtime.run().unwrap();

    assert_eq!(runtime.alerts().len(), 2);
    assert_eq!(runtime.display().unwrap().received(), 0);
    assert!(runtime.controls().unwrap().log().is_empty());

    let mock = runtime.bridge().mock_host().unwrap();
    assert!(mock.script_log().is_empty());
    assert!(mock.resolve(&"GetUsers".parse().unwrap()).is_array());
}

#[test]
fn test_minimized_panel_hides_log() {
    let mut runtime = scripted("send users\ntoggle");
    runtime.run().unwrap();

    assert!(runtime.controls().unwrap().panel().is_minimized());
    assert!(!runtime.last_frame().contains("Script log"));
    assert!(runtime.last_frame().contains("[Expand]"));
}

#[test]
fn test_pending_dropped_at_shutdown() {
    let mut runtime = scripted("call GetUsers\nquit\nwait 1s");
    runtime.run().unwrap();

    assert!(runtime.is_shutdown());
    assert_eq!(runtime.step_count(), 2);
    assert_eq!(runtime.bridge().pending_deliveries(), 1);
    assert_eq!(runtime.display().unwrap().received(), 0);
}

#[test]
fn test_production_mode_only_logs() {
    let config = HostRuntimeConfig {
        mode: HostMode::Production,
        script: Some("app save\nwait 1s\ncall GetUsers".to_string()),
        ..HostRuntimeConfig::default()
    };

    let mut runtime = HostRuntime::with_clock(config, SimClock::at_unix_epoch()).unwrap();
    runtime.run().unwrap();

    assert!(runtime.controls().is_none());
    assert!(runtime.bridge().mock_host().is_none());
    assert_eq!(runtime.display().unwrap().received(), 0);
    assert_eq!(runtime.alerts().len(), 1);
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let data_path = dir.path().join("data.json");
    let mut data = std::fs::File::create(&data_path).unwrap();
    write!(
        data,
        r#"{{"users": [{{"id": 7, "name": "Ada"}}], "currentUser": {{"id": 7}}, "records": []}}"#
    )
    .unwrap();

    let config_path = dir.path().join("webviewd.json");
    let mut file = std::fs::File::create(&config_path).unwrap();
    write!(
        file,
        r#"{{"version": 1, "responseDelayMs": 50, "logCapacity": 3, "dataFile": "data.json"}}"#
    )
    .unwrap();

    let mut config = HostRuntimeConfig {
        script: Some("call GetUsers\nwait 50ms\nsend users\nsend users\nsend users".to_string()),
        ..HostRuntimeConfig::default()
    };
    ConfigFile::load(&config_path)
        .unwrap()
        .apply(&mut config)
        .unwrap();
    assert_eq!(config.response_delay, Duration::from_millis(50));

    let mut runtime = HostRuntime::with_clock(config, SimClock::at_unix_epoch()).unwrap();
    runtime.run().unwrap();

    let display = runtime.display().unwrap();
    assert_eq!(display.received(), 4);
    assert_eq!(display.last().unwrap(), &json!([{"id": 7, "name": "Ada"}]));
    assert_eq!(runtime.controls().unwrap().log().len(), 3);
}
