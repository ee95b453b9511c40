//! Bridge registry: binds a script host to the single receive entry point.

use crate::host::ScriptHost;
use crate::mock_host::MockHost;
use crate::receiver::DataReceiver;
use core_types::ScriptName;
use serde_json::Value;
use sim_clock::{Duration, SimClock};

/// One binding per runtime lifetime
///
/// Owns the script host, the cooperative clock and the receiver. Time moves
/// only through [`BridgeRegistry::advance`] and
/// [`BridgeRegistry::run_until_idle`], which is also the only place
/// responses are delivered.
pub struct BridgeRegistry<R> {
    host: Box<dyn ScriptHost>,
    receiver: Option<R>,
    clock: SimClock,
    delivered: usize,
}

impl<R: DataReceiver> BridgeRegistry<R> {
    /// Creates a registry around an arbitrary host
    pub fn new(host: Box<dyn ScriptHost>, clock: SimClock) -> Self {
        Self {
            host,
            receiver: None,
            clock,
            delivered: 0,
        }
    }

    /// Creates a registry backed by the mock dispatcher
    pub fn with_mock(host: MockHost, clock: SimClock) -> Self {
        let scripts: Vec<&str> = host.available_scripts().iter().map(|n| n.as_str()).collect();
        tracing::info!(
            delay_ms = host.delay().as_millis(),
            scripts = ?scripts,
            "mock host environment initialized"
        );
        Self::new(Box::new(host), clock)
    }

    /// Binds the receive entry point, returning the previous one
    pub fn bind_receiver(&mut self, receiver: R) -> Option<R> {
        self.receiver.replace(receiver)
    }

    pub fn receiver(&self) -> Option<&R> {
        self.receiver.as_ref()
    }

    pub fn receiver_mut(&mut self) -> Option<&mut R> {
        self.receiver.as_mut()
    }

    /// Invokes a host script
    ///
    /// Returns immediately. Any response arrives through the receiver on a
    /// later call to `advance` or `run_until_idle`, never from inside this
    /// call.
    pub fn perform_script(&mut self, script_name: ScriptName, parameter: Value) {
        self.host.perform_script(script_name, parameter, &self.clock);
    }

    /// Pushes data straight into the receive entry point
    ///
    /// Silently ignored when no receiver is bound.
    pub fn receive_data(&mut self, data: &Value) {
        match self.receiver.as_mut() {
            Some(receiver) => {
                tracing::debug!(%data, "delivering data to app");
                receiver.receive(data);
            }
            None => tracing::debug!("no receiver bound, data dropped"),
        }
    }

    /// Advances time and delivers every response that falls due
    ///
    /// Responses are delivered in deadline order; the clock sits at each
    /// deadline while that response is delivered. Returns the number of
    /// deliveries.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let target = self.clock.now() + delta;
        let mut count = 0;

        while let Some(deadline) = self.host.next_deadline() {
            if deadline > target {
                break;
            }
            self.clock.advance_to(deadline);
            while let Some(envelope) = self.host.next_due(&self.clock) {
                tracing::info!(script = %envelope.script_name, "response from {}", self.host.kind());
                let value = envelope.to_value();
                self.receive_data(&value);
                count += 1;
            }
        }

        self.clock.advance_to(target);
        self.delivered += count;
        count
    }

    /// Advances to the last pending deadline, delivering everything
    pub fn run_until_idle(&mut self) -> usize {
        match self.host.last_deadline() {
            Some(last) => self.advance(last.duration_since(self.clock.now())),
            None => 0,
        }
    }

    /// Responses scheduled but not yet delivered
    pub fn pending_deliveries(&self) -> usize {
        self.host.pending()
    }

    /// Responses delivered so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn host(&self) -> &dyn ScriptHost {
        self.host.as_ref()
    }

    /// The mock dispatcher, when running in development mode
    pub fn mock_host(&self) -> Option<&MockHost> {
        self.host.as_mock()
    }

    pub fn mock_host_mut(&mut self) -> Option<&mut MockHost> {
        self.host.as_mock_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::LoggingHost;
    use crate::receiver::RecordingReceiver;
    use crate::seed::MockDataset;
    use serde_json::json;

    fn name(s: &str) -> ScriptName {
        ScriptName::new(s).unwrap()
    }

    fn mock_bridge() -> BridgeRegistry<RecordingReceiver> {
        let mut bridge = BridgeRegistry::with_mock(MockHost::new(), SimClock::at_unix_epoch());
        bridge.bind_receiver(RecordingReceiver::new());
        bridge
    }

    fn received(bridge: &BridgeRegistry<RecordingReceiver>) -> &[Value] {
        bridge.receiver().unwrap().received()
    }

    #[test]
    fn test_delivery_waits_for_delay() {
        let mut bridge = mock_bridge();
        bridge.perform_script(name("GetUsers"), Value::Null);

        assert_eq!(bridge.advance(Duration::from_millis(499)), 0);
        assert!(received(&bridge).is_empty());

        assert_eq!(bridge.advance(Duration::from_millis(1)), 1);
        assert_eq!(received(&bridge)[0]["scriptName"], "GetUsers");
        assert_eq!(received(&bridge)[0]["data"], MockDataset::default().users);
        assert_eq!(received(&bridge)[0]["timestamp"], "1970-01-01T00:00:00.500Z");
    }

    #[test]
    fn test_zero_delay_is_still_deferred() {
        let mut bridge: BridgeRegistry<RecordingReceiver> = BridgeRegistry::with_mock(
            MockHost::new().with_delay(Duration::ZERO),
            SimClock::at_unix_epoch(),
        );
        bridge.bind_receiver(RecordingReceiver::new());

        bridge.perform_script(name("SaveRecord"), Value::Null);
        assert!(received(&bridge).is_empty());
        assert_eq!(bridge.pending_deliveries(), 1);

        assert_eq!(bridge.advance(Duration::ZERO), 1);
        assert_eq!(received(&bridge).len(), 1);
    }

    #[test]
    fn test_successive_calls_deliver_in_call_order() {
        let mut bridge = mock_bridge();
        bridge.perform_script(name("GetUsers"), Value::Null);
        bridge.perform_script(name("GetRecords"), Value::Null);

        assert_eq!(bridge.run_until_idle(), 2);
        assert_eq!(
            bridge.receiver().unwrap().script_names(),
            vec!["GetUsers", "GetRecords"]
        );
    }

    #[test]
    fn test_staggered_calls_deliver_by_deadline() {
        let mut bridge = mock_bridge();
        bridge.perform_script(name("GetUsers"), Value::Null);
        bridge.advance(Duration::from_millis(200));
        bridge.perform_script(name("GetRecords"), Value::Null);

        assert_eq!(bridge.advance(Duration::from_millis(300)), 1);
        assert_eq!(bridge.advance(Duration::from_millis(200)), 1);
        assert_eq!(received(&bridge)[1]["timestamp"], "1970-01-01T00:00:00.700Z");
    }

    #[test]
    fn test_missing_receiver_is_noop() {
        let mut bridge: BridgeRegistry<RecordingReceiver> =
            BridgeRegistry::with_mock(MockHost::new(), SimClock::at_unix_epoch());

        bridge.receive_data(&json!({"pushed": true}));
        bridge.perform_script(name("GetUsers"), Value::Null);
        assert_eq!(bridge.run_until_idle(), 1);
        assert_eq!(bridge.delivered(), 1);
        assert!(bridge.receiver().is_none());
    }

    #[test]
    fn test_direct_push_bypasses_dispatch() {
        let mut bridge = mock_bridge();
        bridge.receive_data(&json!({"pushed": true}));

        assert_eq!(received(&bridge), &[json!({"pushed": true})]);
        assert!(bridge.mock_host().unwrap().script_log().is_empty());
        assert_eq!(bridge.pending_deliveries(), 0);
    }

    #[test]
    fn test_rebinding_replaces_receiver() {
        let mut bridge = mock_bridge();
        bridge.receive_data(&json!(1));

        let previous = bridge.bind_receiver(RecordingReceiver::new()).unwrap();
        assert_eq!(previous.received().len(), 1);
        assert!(received(&bridge).is_empty());
    }

    #[test]
    fn test_logging_host_registry() {
        let mut bridge: BridgeRegistry<RecordingReceiver> =
            BridgeRegistry::new(Box::new(LoggingHost::new()), SimClock::at_unix_epoch());
        bridge.bind_receiver(RecordingReceiver::new());

        bridge.perform_script(name("GetUsers"), json!({"filter": "active"}));
        assert_eq!(bridge.run_until_idle(), 0);
        assert!(bridge.mock_host().is_none());
        assert_eq!(bridge.host().kind(), "host");
    }

    #[test]
    fn test_run_until_idle_moves_clock_to_last_deadline() {
        let mut bridge = mock_bridge();
        bridge.perform_script(name("GetUsers"), Value::Null);
        bridge.run_until_idle();
        assert_eq!(bridge.clock().now().duration_since(sim_clock::Instant::ZERO).as_millis(), 500);
    }
}
