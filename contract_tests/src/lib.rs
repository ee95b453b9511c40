//! # Bridge Contract Tests
//!
//! This crate provides "golden" tests for the host bridge contract to ensure
//! it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Wire shapes are written as code
//! - **Testability first**: Contract tests fail when field names or texts change
//! - **Mechanism not policy**: Define what must be stable, not how to use it
//!
//! ## Structure
//!
//! - `envelope`: field names of the delivery envelope and call record
//! - `dispatch`: script resolution, ordering and timing
//! - `control_surface`: panel log, placeholders and input handling

pub mod control_surface;
pub mod dispatch;
pub mod envelope;

/// Common test helpers for contract validation
pub mod test_helpers {
    use serde::Serialize;
    use serde_json::Value;
    use services_bridge::{BridgeRegistry, MockHost, RecordingReceiver};
    use sim_clock::{Duration, SimClock};

    /// Response delay every contract assumes unless it says otherwise
    pub const CONTRACT_DELAY: Duration = Duration::from_millis(500);

    /// Creates a development bridge at the Unix epoch with a recording receiver
    pub fn dev_bridge() -> BridgeRegistry<RecordingReceiver> {
        let host = MockHost::new().with_delay(CONTRACT_DELAY);
        let mut bridge = BridgeRegistry::with_mock(host, SimClock::at_unix_epoch());
        bridge.bind_receiver(RecordingReceiver::new());
        bridge
    }

    /// Everything the receiver has seen so far
    pub fn received(bridge: &BridgeRegistry<RecordingReceiver>) -> Vec<Value> {
        bridge
            .receiver()
            .map(|r| r.received().to_vec())
            .unwrap_or_default()
    }

    /// Verifies a value serializes to an object with exactly these keys
    pub fn verify_field_names<T: Serialize>(value: &T, expected: &[&str]) {
        let json = serde_json::to_value(value).expect("Failed to serialize value");
        let object = json.as_object().expect("Expected a JSON object");

        let mut actual: Vec<&str> = object.keys().map(String::as_str).collect();
        let mut expected = expected.to_vec();
        actual.sort_unstable();
        expected.sort_unstable();

        assert_eq!(
            actual, expected,
            "Field names changed: expected {:?}, got {:?}",
            expected, actual
        );
    }
}
