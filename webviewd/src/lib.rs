//! # Web Viewer Host Runtime
//!
//! Runs embedded-content logic against a simulated host.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The bridge and the panel never print
//! - **Input is explicit commands**: One command per line, from a script or a terminal
//! - **Deterministic mode is first-class**: Scripted sessions advance time instantly
//! - **Failures are notices**: Bad developer input raises an alert and the loop goes on
//!
//! ## Responsibilities
//!
//! The host runtime:
//! - Binds the bridge registry to the application's data display
//! - Shows the developer control panel in development mode
//! - Runs the event loop (input → execute → deliver → render)
//! - Drops responses still in flight when it shuts down
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Talk to a real host process
//! - Scaffold projects or bundle assets

pub mod app;
pub mod commands;
pub mod config;
pub mod input_script;
pub mod runtime;

pub use app::{AppAction, DataDisplay};
pub use commands::{HostCommand, HostCommandError, HostCommandParser};
pub use config::{ConfigError, ConfigFile, HostMode, HostRuntimeConfig, TimeMode};
pub use input_script::{InputScript, InputScriptError, ScriptedInput};
pub use runtime::{HostRuntime, HostRuntimeError};
