//! Envelope and call record types

use core_types::ScriptName;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Response envelope delivered to the receive entry point
///
/// Serialized field names follow the host's JavaScript contract
/// (`scriptName`, `data`, `timestamp`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeEnvelope {
    /// Script whose response this is
    pub script_name: ScriptName,
    /// Resolved response value
    pub data: Value,
    /// ISO-8601 delivery time
    pub timestamp: String,
}

impl BridgeEnvelope {
    /// Creates a new response envelope
    pub fn new(script_name: ScriptName, data: Value, timestamp: impl Into<String>) -> Self {
        Self {
            script_name,
            data,
            timestamp: timestamp.into(),
        }
    }

    /// Converts the envelope into the JSON value handed to the receiver
    pub fn to_value(&self) -> Value {
        json!({
            "scriptName": self.script_name.as_str(),
            "data": self.data,
            "timestamp": self.timestamp,
        })
    }
}

/// Audit record of a single `performScript` invocation
///
/// Records are append-only and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptCallRecord {
    /// ISO-8601 invocation time
    pub timestamp: String,
    /// Invoked script
    pub script_name: ScriptName,
    /// Parameter as passed (structured value or raw string)
    pub parameter: Value,
}

impl ScriptCallRecord {
    /// Creates a new call record
    pub fn new(timestamp: impl Into<String>, script_name: ScriptName, parameter: Value) -> Self {
        Self {
            timestamp: timestamp.into(),
            script_name,
            parameter,
        }
    }
}

/// Failure payload synthesized for a script with no registered response
pub fn unknown_script_response(script_name: &ScriptName) -> Value {
    json!({
        "success": false,
        "message": format!("Unknown script: {}", script_name),
    })
}
