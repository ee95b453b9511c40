//! The script host seam.

use crate::mock_host::MockHost;
use core_types::ScriptName;
use ipc::BridgeEnvelope;
use serde_json::Value;
use sim_clock::{Instant, SimClock};

/// Host-side script execution
///
/// `perform_script` is one-way: it never returns a result. Hosts that answer
/// do so by queueing envelopes that the registry collects with
/// [`ScriptHost::next_due`] once time has moved past their deadline.
pub trait ScriptHost {
    /// Short name used in logs
    fn kind(&self) -> &'static str;

    /// Invokes a host-side script
    fn perform_script(&mut self, script_name: ScriptName, parameter: Value, clock: &SimClock);

    /// Removes and returns the next response due at the clock's instant
    fn next_due(&mut self, clock: &SimClock) -> Option<BridgeEnvelope>;

    /// Deadline of the earliest pending response
    fn next_deadline(&self) -> Option<Instant>;

    /// Deadline of the latest pending response
    fn last_deadline(&self) -> Option<Instant>;

    /// Number of responses not yet delivered
    fn pending(&self) -> usize;

    fn as_mock(&self) -> Option<&MockHost> {
        None
    }

    fn as_mock_mut(&mut self) -> Option<&mut MockHost> {
        None
    }
}

/// Production stand-in
///
/// The real host receives the call out of process and answers through the
/// receive entry point on its own schedule, so this host only logs the
/// outgoing call and never queues a response.
#[derive(Debug, Default)]
pub struct LoggingHost {
    forwarded: usize,
}

impl LoggingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls handed to the host
    pub fn forwarded(&self) -> usize {
        self.forwarded
    }
}

impl ScriptHost for LoggingHost {
    fn kind(&self) -> &'static str {
        "host"
    }

    fn perform_script(&mut self, script_name: ScriptName, parameter: Value, _clock: &SimClock) {
        self.forwarded += 1;
        tracing::info!(script = %script_name, %parameter, "script to run on host");
    }

    fn next_due(&mut self, _clock: &SimClock) -> Option<BridgeEnvelope> {
        None
    }

    fn next_deadline(&self) -> Option<Instant> {
        None
    }

    fn last_deadline(&self) -> Option<Instant> {
        None
    }

    fn pending(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_logging_host_never_answers() {
        let clock = SimClock::at_unix_epoch();
        let mut host = LoggingHost::new();

        host.perform_script(ScriptName::new("GetUsers").unwrap(), json!(null), &clock);

        assert_eq!(host.forwarded(), 1);
        assert_eq!(host.pending(), 0);
        assert!(host.next_due(&clock).is_none());
        assert!(host.as_mock().is_none());
    }
}
