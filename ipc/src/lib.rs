//! # Bridge Wire Contract
//!
//! Message shapes exchanged between embedded content and its host.
//!
//! ## Philosophy
//!
//! - **Untyped at the boundary**: Script parameters and responses are JSON
//!   values. The real host contract is untyped, so script-specific payload
//!   shapes are not modelled here.
//! - **Failures are data**: An unknown script resolves to a failure-shaped
//!   payload, never to an error.
//! - **Name correlation**: Responses carry the script name, not a call id.
//!
//! ## Architecture
//!
//! - Outbound: `performScript(name, parameter)` produces a [`ScriptCallRecord`]
//! - Inbound: the host pushes a [`BridgeEnvelope`] (or any raw value) into the
//!   single receive entry point

pub mod message;
pub mod payload;

pub use message::{unknown_script_response, BridgeEnvelope, ScriptCallRecord};
pub use payload::{parse_lenient, parse_structured, PayloadError};
pub use serde_json::Value;
