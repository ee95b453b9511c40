//! The receive entry point.

use serde_json::Value;

/// Inbound entry point of the embedded application
///
/// The host calls this whenever it pushes data into the embedded content,
/// both for script responses and for unsolicited data pushes.
pub trait DataReceiver {
    /// Handles one pushed value
    fn receive(&mut self, data: &Value);
}

impl<F> DataReceiver for F
where
    F: FnMut(&Value),
{
    fn receive(&mut self, data: &Value) {
        self(data)
    }
}

/// Receiver that keeps every value it is handed, in arrival order
#[derive(Debug, Clone, Default)]
pub struct RecordingReceiver {
    received: Vec<Value>,
}

impl RecordingReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values received so far, oldest first
    pub fn received(&self) -> &[Value] {
        &self.received
    }

    /// Script names of received envelopes, skipping raw pushes
    pub fn script_names(&self) -> Vec<&str> {
        self.received
            .iter()
            .filter_map(|value| value.get("scriptName").and_then(Value::as_str))
            .collect()
    }
}

impl DataReceiver for RecordingReceiver {
    fn receive(&mut self, data: &Value) {
        self.received.push(data.clone());
    }
}
