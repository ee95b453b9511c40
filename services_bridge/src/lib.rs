//! # Host Bridge Service
//!
//! Stands in for the host's script-execution object so embedded content can
//! be written once against a stable interface and run against both the mock
//! and the real host.
//!
//! ## Philosophy
//!
//! - **Never synchronous**: `perform_script` only records and schedules.
//!   Responses arrive when the owner advances time.
//! - **Never throws**: Unknown scripts resolve to failure-shaped data, and a
//!   missing receiver turns delivery into a no-op.
//! - **Explicit ownership**: The registry is constructed once and handed to
//!   whoever owns the embedded UI. There is no global binding.
//!
//! ## Example
//!
//! ```
//! use core_types::ScriptName;
//! use services_bridge::{BridgeRegistry, MockHost, RecordingReceiver};
//! use sim_clock::{Duration, SimClock};
//! use serde_json::json;
//!
//! let mut bridge = BridgeRegistry::with_mock(MockHost::new(), SimClock::at_unix_epoch());
//! bridge.bind_receiver(RecordingReceiver::new());
//!
//! bridge.perform_script(ScriptName::new("SaveRecord").unwrap(), json!({"id": 1}));
//! assert!(bridge.receiver().unwrap().received().is_empty());
//!
//! bridge.advance(Duration::from_millis(500));
//! let delivered = &bridge.receiver().unwrap().received()[0];
//! assert_eq!(delivered["data"]["success"], true);
//! ```

pub mod host;
pub mod mock_host;
pub mod receiver;
pub mod registry;
pub mod seed;

pub use host::{LoggingHost, ScriptHost};
pub use mock_host::{MockHost, MockResponseTable, DEFAULT_RESPONSE_DELAY};
pub use receiver::{DataReceiver, RecordingReceiver};
pub use registry::BridgeRegistry;
pub use seed::{DatasetKey, MockDataset, SeedError};
