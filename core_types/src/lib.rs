//! # Core Types
//!
//! Fundamental types shared by every crate of the web viewer bridge.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: A script name is a validated type, not a bare string.
//! - **Type safety first**: An empty script name cannot reach the dispatcher.
//!
//! ## Key Types
//!
//! - [`ScriptName`]: Name of a host-side script, never empty
//! - [`DeliveryId`]: Unique identifier for a scheduled response delivery

pub mod ids;
pub mod script;

pub use ids::DeliveryId;
pub use script::{ScriptName, ScriptNameError};
