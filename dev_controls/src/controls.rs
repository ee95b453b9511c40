//! Control panel actions and rendering.

use crate::panel::PanelState;
use core_types::{ScriptName, ScriptNameError};
use ipc::{parse_lenient, parse_structured, PayloadError};
use services_bridge::{BridgeRegistry, DataReceiver, DatasetKey};
use services_logger::{ActivityLog, LogEntry};
use thiserror::Error;

/// Control panel errors
///
/// Each of these is shown to the developer; none leaves any state changed.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("{0}")]
    InvalidJson(#[from] PayloadError),

    #[error("{0}")]
    InvalidScriptName(#[from] ScriptNameError),

    #[error("Mock host is not active")]
    MockUnavailable,
}

/// The developer control panel
#[derive(Debug, Clone, Default)]
pub struct DevControls {
    panel: PanelState,
    log: ActivityLog,
}

impl DevControls {
    /// Creates an expanded panel with the default log capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an expanded panel keeping at most `capacity` log entries
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            panel: PanelState::Expanded,
            log: ActivityLog::with_capacity(capacity),
        }
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Flips panel visibility
    pub fn toggle(&mut self) -> PanelState {
        self.panel = self.panel.toggled();
        self.panel
    }

    /// Pushes one of the sample datasets into the app
    pub fn send_dataset<R: DataReceiver>(
        &mut self,
        bridge: &mut BridgeRegistry<R>,
        key: DatasetKey,
    ) -> Result<(), ControlError> {
        let data = bridge
            .mock_host()
            .ok_or(ControlError::MockUnavailable)?
            .data()
            .get(key)
            .clone();

        bridge.receive_data(&data);
        self.record(bridge, format!("Sent {}: {}", key, data));
        Ok(())
    }

    /// Parses `text` as JSON and pushes it into the app
    ///
    /// Empty text sends an empty object.
    pub fn send_custom<R: DataReceiver>(
        &mut self,
        bridge: &mut BridgeRegistry<R>,
        text: &str,
    ) -> Result<(), ControlError> {
        let text = if text.is_empty() { "{}" } else { text };
        let data = parse_structured(text)?;

        bridge.receive_data(&data);
        self.record(bridge, format!("Sent custom data: {}", data));
        Ok(())
    }

    /// Calls a script through the dispatcher
    ///
    /// The parameter text is parsed as JSON; anything else is passed as a
    /// raw string, and empty text passes `null`.
    pub fn call_script<R: DataReceiver>(
        &mut self,
        bridge: &mut BridgeRegistry<R>,
        script_name: &str,
        parameter_text: &str,
    ) -> Result<(), ControlError> {
        let script_name = ScriptName::new(script_name)?;
        let parameter = parse_lenient(parameter_text);
        let message = format!("Called script: {} with {}", script_name, parameter);

        bridge.perform_script(script_name, parameter);
        self.record(bridge, message);
        Ok(())
    }

    /// Replaces the canned response for a script
    pub fn set_response<R: DataReceiver>(
        &mut self,
        bridge: &mut BridgeRegistry<R>,
        script_name: &str,
        response_text: &str,
    ) -> Result<(), ControlError> {
        let script_name = ScriptName::new(script_name)?;
        let response = parse_structured(response_text)?;
        bridge
            .mock_host_mut()
            .ok_or(ControlError::MockUnavailable)?
            .set_mock_response(script_name, response);
        Ok(())
    }

    /// Forgets all call records and resets the visible log
    pub fn clear_log<R: DataReceiver>(&mut self, bridge: &mut BridgeRegistry<R>) {
        if let Some(mock) = bridge.mock_host_mut() {
            mock.clear_log();
        }
        self.log.clear();
    }

    /// Renders the panel as text
    ///
    /// A minimized panel shows only its title bar.
    pub fn render<R: DataReceiver>(&self, bridge: &BridgeRegistry<R>) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "┌─ Mock Host Controls ─────────────── [{}]\n",
            self.panel.toggle_label()
        ));

        if self.panel.is_minimized() {
            out.push_str("└────────────────────────────────────────\n");
            return out;
        }

        let datasets: Vec<&str> = DatasetKey::ALL.iter().map(DatasetKey::as_str).collect();
        out.push_str(&format!("│ Send data: {} | custom <json>\n", datasets.join(" | ")));

        if let Some(mock) = bridge.mock_host() {
            let scripts: Vec<&str> = mock
                .available_scripts()
                .into_iter()
                .map(ScriptName::as_str)
                .collect();
            out.push_str(&format!("│ Scripts: {}\n", scripts.join(", ")));
        }

        if bridge.pending_deliveries() > 0 {
            out.push_str(&format!("│ Pending responses: {}\n", bridge.pending_deliveries()));
        }

        out.push_str("│ Script log:\n");
        for line in self.log.render_lines() {
            out.push_str(&format!("│   {}\n", line));
        }
        out.push_str("└────────────────────────────────────────\n");
        out
    }

    fn record<R: DataReceiver>(&mut self, bridge: &BridgeRegistry<R>, message: String) {
        tracing::debug!(%message, "panel log");
        self.log
            .push(LogEntry::new(bridge.clock().local_time_string(), message));
    }
}
