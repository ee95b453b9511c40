//! Script dispatch contract tests
//!
//! These tests define how the mock host resolves and schedules responses.

use crate::test_helpers::*;
use core_types::ScriptName;
use serde_json::{json, Value};

/// Scripts every development bridge answers out of the box
pub const SEEDED_SCRIPTS: [&str; 5] = [
    "DeleteRecord",
    "GetRecords",
    "GetUserData",
    "GetUsers",
    "SaveRecord",
];

fn name(s: &str) -> ScriptName {
    ScriptName::new(s).expect("contract script names are non-empty")
}

/// Dispatches one call and returns the delivered `data`
pub fn dispatch_once(script: &str, parameter: Value) -> Value {
    let mut bridge = dev_bridge();
    bridge.perform_script(name(script), parameter);
    bridge.run_until_idle();
    received(&bridge)
        .pop()
        .map(|envelope| envelope["data"].clone())
        .unwrap_or(Value::Null)
}
