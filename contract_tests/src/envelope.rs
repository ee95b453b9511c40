//! Wire-shape contract tests
//!
//! These tests define the stable field names the embedded content relies on.

use crate::test_helpers::*;
use core_types::ScriptName;
use ipc::{unknown_script_response, BridgeEnvelope, ScriptCallRecord};

// ===== Field Names =====
const ENVELOPE_FIELDS: [&str; 3] = ["scriptName", "data", "timestamp"];
const CALL_RECORD_FIELDS: [&str; 3] = ["timestamp", "scriptName", "parameter"];
const FAILURE_FIELDS: [&str; 2] = ["success", "message"];

/// Prefix of the failure message for unregistered scripts
pub const UNKNOWN_SCRIPT_PREFIX: &str = "Unknown script: ";
