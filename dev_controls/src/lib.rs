//! # Developer Control Panel
//!
//! Lets a developer exercise the host bridge without the host present.
//!
//! ## Actions
//!
//! - **Send data**: push a named sample dataset, or freeform JSON, straight
//!   into the receive entry point (no dispatch, no delay)
//! - **Call script**: invoke a script through the dispatcher; the parameter
//!   is parsed as JSON and falls back to the raw string
//! - **Set response**: replace the canned response for a script
//! - **Clear log**: forget all call records and reset the visible log
//! - **Toggle**: minimize or expand the panel without losing state
//!
//! Malformed input never reaches the bridge. It comes back as a
//! [`ControlError`] for the host to show as an alert, and the panel stays
//! usable.

pub mod controls;
pub mod panel;

pub use controls::{ControlError, DevControls};
pub use panel::PanelState;
