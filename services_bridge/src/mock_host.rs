//! Mock script dispatcher.
//!
//! Records every call, then answers with a canned response after a fixed
//! delay. Responses are looked up when they are delivered, so an upsert made
//! while a call is in flight is what that call receives.

use crate::host::ScriptHost;
use crate::seed::MockDataset;
use core_types::ScriptName;
use ipc::{unknown_script_response, BridgeEnvelope, ScriptCallRecord};
use serde_json::{json, Value};
use sim_clock::{Duration, Instant, SimClock, TimerQueue};
use std::collections::BTreeMap;

/// Delay between a call and its response
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(500);

/// Canned responses keyed by exact script name
///
/// Entries can be added or replaced but never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockResponseTable {
    responses: BTreeMap<ScriptName, Value>,
}

impl MockResponseTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the table with the five well-known scripts
    pub fn seeded(data: &MockDataset) -> Self {
        let mut table = Self::new();
        let seeds = [
            ("GetUserData", data.current_user.clone()),
            ("GetRecords", data.records.clone()),
            ("GetUsers", data.users.clone()),
            (
                "SaveRecord",
                json!({ "success": true, "message": "Record saved successfully" }),
            ),
            (
                "DeleteRecord",
                json!({ "success": true, "message": "Record deleted successfully" }),
            ),
        ];
        for (name, response) in seeds {
            if let Ok(name) = ScriptName::new(name) {
                table.upsert(name, response);
            }
        }
        table
    }

    /// Adds or replaces a response; returns the replaced value
    pub fn upsert(&mut self, script_name: ScriptName, response: Value) -> Option<Value> {
        self.responses.insert(script_name, response)
    }

    /// Looks up a response by exact name
    pub fn get(&self, script_name: &ScriptName) -> Option<&Value> {
        self.responses.get(script_name)
    }

    /// Registered script names, sorted
    pub fn script_names(&self) -> impl Iterator<Item = &ScriptName> {
        self.responses.keys()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// Development host with canned responses and simulated latency
#[derive(Debug, Clone)]
pub struct MockHost {
    responses: MockResponseTable,
    script_log: Vec<ScriptCallRecord>,
    pending: TimerQueue<ScriptName>,
    delay: Duration,
    data: MockDataset,
}

impl MockHost {
    /// Creates a mock host with the default seed data and delay
    pub fn new() -> Self {
        Self::with_dataset(MockDataset::default())
    }

    /// Creates a mock host seeded from the given datasets
    pub fn with_dataset(data: MockDataset) -> Self {
        Self {
            responses: MockResponseTable::seeded(&data),
            script_log: Vec::new(),
            pending: TimerQueue::new(),
            delay: DEFAULT_RESPONSE_DELAY,
            data,
        }
    }

    /// Sets the response delay
    ///
    /// A zero delay still defers delivery until time is advanced.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Every call made so far, in call order
    pub fn script_log(&self) -> &[ScriptCallRecord] {
        &self.script_log
    }

    /// Forgets all call records
    ///
    /// Responses already in flight are still delivered.
    pub fn clear_log(&mut self) {
        self.script_log.clear();
    }

    /// Adds or replaces the canned response for a script
    pub fn set_mock_response(&mut self, script_name: ScriptName, response: Value) {
        tracing::debug!(script = %script_name, "mock response registered");
        self.responses.upsert(script_name, response);
    }

    pub fn responses(&self) -> &MockResponseTable {
        &self.responses
    }

    /// Resolves the response a call to `script_name` would receive now
    pub fn resolve(&self, script_name: &ScriptName) -> Value {
        self.responses
            .get(script_name)
            .cloned()
            .unwrap_or_else(|| unknown_script_response(script_name))
    }

    /// Scripts with a registered response, sorted
    pub fn available_scripts(&self) -> Vec<&ScriptName> {
        self.responses.script_names().collect()
    }

    /// The seed datasets
    pub fn data(&self) -> &MockDataset {
        &self.data
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptHost for MockHost {
    fn kind(&self) -> &'static str {
        "mock-host"
    }

    fn perform_script(&mut self, script_name: ScriptName, parameter: Value, clock: &SimClock) {
        tracing::info!(script = %script_name, "script called");
        tracing::debug!(script = %script_name, %parameter, "script parameter");

        self.script_log.push(ScriptCallRecord::new(
            clock.iso_timestamp(),
            script_name.clone(),
            parameter,
        ));

        let deadline = clock.now() + self.delay;
        let id = self.pending.schedule(deadline, script_name);
        tracing::trace!(delivery = %id, "response scheduled");
    }

    fn next_due(&mut self, clock: &SimClock) -> Option<BridgeEnvelope> {
        let entry = self.pending.pop_due(clock.now())?;
        let response = self.resolve(&entry.item);
        tracing::debug!(script = %entry.item, delivery = %entry.id, %response, "response ready");
        Some(BridgeEnvelope::new(entry.item, response, clock.iso_timestamp()))
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.pending.next_deadline()
    }

    fn last_deadline(&self) -> Option<Instant> {
        self.pending.last_deadline()
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }

    fn as_mock(&self) -> Option<&MockHost> {
        Some(self)
    }

    fn as_mock_mut(&mut self) -> Option<&mut MockHost> {
        Some(self)
    }
}
