//! # Host Commands
//!
//! The command surface of the host runtime.
//!
//! ## Command Set
//!
//! - `send <currentUser|users|records>` - Push a sample dataset to the app
//! - `send custom <json>` - Push freeform JSON to the app
//! - `call <Script> [parameter]` - Call a script through the mock host
//! - `respond <Script> <json>` - Replace a script's canned response
//! - `clear` - Clear the script log
//! - `toggle` - Minimize or expand the control panel
//! - `log` - Print the recorded script calls
//! - `scripts` - List scripts with canned responses
//! - `app <get-users|get-records|save>` - Run an application test action
//! - `show` - Render the app and the panel
//! - `quit` - Exit the host
//!
//! Command words are case-insensitive. Script names and payloads are not.

use crate::app::AppAction;
use services_bridge::DatasetKey;
use thiserror::Error;

/// Host command error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostCommandError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Unknown app action: {0}")]
    UnknownAppAction(String),
}

/// Host commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Push a sample dataset
    SendData { dataset: DatasetKey },

    /// Push freeform JSON (parsed when executed)
    SendCustom { json: String },

    /// Call a script; the parameter text is parsed leniently when executed
    CallScript { script: String, parameter: String },

    /// Replace a canned response (parsed when executed)
    SetResponse { script: String, response: String },

    /// Clear the script log
    ClearLog,

    /// Toggle the control panel
    Toggle,

    /// Print the recorded script calls
    ShowLog,

    /// List scripts with canned responses
    ListScripts,

    /// Run an application test action
    App(AppAction),

    /// Render the app and the panel
    Show,

    /// Quit the host
    Quit,
}

/// Host command parser
pub struct HostCommandParser;

impl HostCommandParser {
    /// Parses a command string
    pub fn parse(input: &str) -> Result<HostCommand, HostCommandError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(HostCommandError::InvalidCommand(
                "Empty command".to_string(),
            ));
        }

        let (cmd, rest) = split_word(input);
        let cmd = cmd.to_lowercase();

        match cmd.as_str() {
            "send" => Self::parse_send(rest),
            "call" => Self::parse_call(rest),
            "respond" => Self::parse_respond(rest),
            "clear" => Ok(HostCommand::ClearLog),
            "toggle" => Ok(HostCommand::Toggle),
            "log" => Ok(HostCommand::ShowLog),
            "scripts" => Ok(HostCommand::ListScripts),
            "app" => Self::parse_app(rest),
            "show" => Ok(HostCommand::Show),
            "quit" | "exit" => Ok(HostCommand::Quit),
            _ => Err(HostCommandError::UnknownCommand(cmd)),
        }
    }

    /// Parses the "send" command
    fn parse_send(args: &str) -> Result<HostCommand, HostCommandError> {
        let (target, rest) = split_word(args);
        if target.is_empty() {
            return Err(HostCommandError::MissingArgument(
                "dataset (currentUser, users, records, custom)".to_string(),
            ));
        }

        if target.eq_ignore_ascii_case("custom") {
            return Ok(HostCommand::SendCustom {
                json: rest.to_string(),
            });
        }

        target
            .parse::<DatasetKey>()
            .map(|dataset| HostCommand::SendData { dataset })
            .map_err(|_| HostCommandError::UnknownDataset(target.to_string()))
    }

    /// Parses the "call" command
    fn parse_call(args: &str) -> Result<HostCommand, HostCommandError> {
        let (script, parameter) = split_word(args);
        if script.is_empty() {
            return Err(HostCommandError::MissingArgument("script name".to_string()));
        }

        Ok(HostCommand::CallScript {
            script: script.to_string(),
            parameter: parameter.to_string(),
        })
    }

    /// Parses the "respond" command
    fn parse_respond(args: &str) -> Result<HostCommand, HostCommandError> {
        let (script, response) = split_word(args);
        if script.is_empty() {
            return Err(HostCommandError::MissingArgument("script name".to_string()));
        }
        if response.is_empty() {
            return Err(HostCommandError::MissingArgument(
                "response JSON".to_string(),
            ));
        }

        Ok(HostCommand::SetResponse {
            script: script.to_string(),
            response: response.to_string(),
        })
    }

    /// Parses the "app" command
    fn parse_app(args: &str) -> Result<HostCommand, HostCommandError> {
        let (action, _) = split_word(args);
        if action.is_empty() {
            return Err(HostCommandError::MissingArgument(
                "app action (get-users, get-records, save)".to_string(),
            ));
        }

        action
            .parse::<AppAction>()
            .map(HostCommand::App)
            .map_err(HostCommandError::UnknownAppAction)
    }
}

/// Splits off the first whitespace-delimited word, keeping the remainder verbatim
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}
