//! # Input Script Parser
//!
//! Line-based command scripts for deterministic sessions and demos.
//!
//! ## Format
//!
//! - One host command per line (see [`crate::commands`])
//! - Delays: `wait 500ms`, `wait 2s` or `wait 250` (milliseconds)
//! - Comments: lines starting with `#`
//!
//! ## Example
//!
//! ```text
//! # Ask for users, then look at what arrived
//! call GetUsers {"filter": "active"}
//! wait 500ms
//! show
//! ```

use crate::commands::{HostCommand, HostCommandError, HostCommandParser};
use sim_clock::Duration;
use std::collections::VecDeque;
use thiserror::Error;

/// Input script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputScriptError {
    #[error("Parse error at line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: HostCommandError,
    },

    #[error("Parse error at line {line}: {message}")]
    Delay { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// A single scripted input action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    /// A host command
    Command(HostCommand),
    /// Let time pass
    Wait(Duration),
}

/// Input script
#[derive(Debug, Clone)]
pub struct InputScript {
    inputs: VecDeque<ScriptedInput>,
}

impl InputScript {
    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, InputScriptError> {
        let mut inputs = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            if let Some(input) = Self::parse_line(line, line_num + 1)? {
                inputs.push_back(input);
            }
        }

        if inputs.is_empty() {
            return Err(InputScriptError::EmptyScript);
        }

        Ok(Self { inputs })
    }

    /// Parses a single line; blank lines and comments yield `None`
    pub fn parse_line(line: &str, line_num: usize) -> Result<Option<ScriptedInput>, InputScriptError> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        if word.eq_ignore_ascii_case("wait") {
            let delay = Self::parse_duration(rest.trim()).map_err(|message| {
                InputScriptError::Delay {
                    line: line_num,
                    message,
                }
            })?;
            return Ok(Some(ScriptedInput::Wait(delay)));
        }

        HostCommandParser::parse(line)
            .map(|command| Some(ScriptedInput::Command(command)))
            .map_err(|source| InputScriptError::Command {
                line: line_num,
                source,
            })
    }

    /// Parses `500ms`, `2s` or a bare millisecond count
    fn parse_duration(text: &str) -> Result<Duration, String> {
        let invalid = || format!("Invalid delay format: {}", text);

        if let Some(millis) = text.strip_suffix("ms") {
            return millis
                .trim()
                .parse()
                .map(Duration::from_millis)
                .map_err(|_| invalid());
        }
        if let Some(secs) = text.strip_suffix('s') {
            return secs
                .trim()
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| invalid());
        }
        text.parse().map(Duration::from_millis).map_err(|_| invalid())
    }

    /// Takes the next input
    pub fn next_input(&mut self) -> Option<ScriptedInput> {
        self.inputs.pop_front()
    }

    /// Whether any input remains
    pub fn has_more(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Number of remaining inputs
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
