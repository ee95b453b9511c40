//! # Embedded Application
//!
//! The application side of the bridge: a data display bound to the receive
//! entry point, and the test actions that call host scripts.

use core_types::{ScriptName, ScriptNameError};
use serde_json::{json, Value};
use services_bridge::DataReceiver;
use std::str::FromStr;

/// Receive entry point of the application
///
/// Shows the most recent value pushed by the host.
#[derive(Debug, Clone, Default)]
pub struct DataDisplay {
    last: Option<Value>,
    received: usize,
}

impl DataDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent value received
    pub fn last(&self) -> Option<&Value> {
        self.last.as_ref()
    }

    /// Number of values received
    pub fn received(&self) -> usize {
        self.received
    }

    /// Renders the display as text
    pub fn render(&self) -> String {
        match &self.last {
            Some(value) => {
                let pretty =
                    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
                format!("📥 Data Received:\n{}\n", pretty)
            }
            None => "No data received yet. Use the mock controls to send data.\n".to_string(),
        }
    }
}

impl DataReceiver for DataDisplay {
    fn receive(&mut self, data: &Value) {
        tracing::info!("received data from host");
        self.last = Some(data.clone());
        self.received += 1;
    }
}

/// Test actions offered by the application page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    GetUsers,
    GetRecords,
    SaveRecord,
}

impl AppAction {
    /// Script invoked by this action
    pub fn script_name(&self) -> Result<ScriptName, ScriptNameError> {
        ScriptName::new(match self {
            AppAction::GetUsers => "GetUsers",
            AppAction::GetRecords => "GetRecords",
            AppAction::SaveRecord => "SaveRecord",
        })
    }

    /// Parameter passed with the script
    pub fn parameter(&self) -> Value {
        match self {
            AppAction::GetUsers => json!({ "filter": "active" }),
            AppAction::GetRecords => json!({ "limit": 10 }),
            AppAction::SaveRecord => json!({
                "recordId": 101,
                "title": "Updated Project",
                "status": "Active"
            }),
        }
    }
}

impl FromStr for AppAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "get-users" | "users" => Ok(AppAction::GetUsers),
            "get-records" | "records" => Ok(AppAction::GetRecords),
            "save" | "save-record" => Ok(AppAction::SaveRecord),
            other => Err(other.to_string()),
        }
    }
}
