//! # Activity Log Service
//!
//! The bounded, newest-first log shown in the developer control panel.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! Entries carry their timestamp separately from their message, and the
//! log knows whether it is showing entries or a placeholder.
//!
//! This is the log a developer sees. Diagnostic logging goes through
//! `tracing`.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of entries kept by default
pub const DEFAULT_LOG_CAPACITY: usize = 10;

/// Placeholder shown when the log has no entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placeholder {
    /// Nothing has happened yet
    Empty,
    /// The developer cleared the log
    Cleared,
}

impl Placeholder {
    pub fn text(&self) -> &'static str {
        match self {
            Placeholder::Empty => "No scripts called yet...",
            Placeholder::Cleared => "Log cleared...",
        }
    }
}

/// A single visible log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Localized time of day
    pub timestamp: String,
    /// Log message
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }

    /// Renders the entry as `[time] message`
    pub fn render(&self) -> String {
        format!("[{}] {}", self.timestamp, self.message)
    }
}

/// Bounded newest-first activity log
///
/// Holds at most `capacity` entries. Pushing past the cap evicts the oldest
/// entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    capacity: usize,
    entries: VecDeque<LogEntry>,
    placeholder: Placeholder,
}

impl ActivityLog {
    /// Creates a log with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Creates a log with the given capacity (at least one entry)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
            placeholder: Placeholder::Empty,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Prepends an entry, evicting the oldest past capacity
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Drops every entry and shows the "cleared" placeholder
    pub fn clear(&mut self) {
        self.entries.clear();
        self.placeholder = Placeholder::Cleared;
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The placeholder currently shown, if the log is empty
    pub fn placeholder(&self) -> Option<Placeholder> {
        if self.entries.is_empty() {
            Some(self.placeholder)
        } else {
            None
        }
    }

    /// Visible lines, newest first
    pub fn render_lines(&self) -> Vec<String> {
        match self.placeholder() {
            Some(placeholder) => vec![placeholder.text().to_string()],
            None => self.entries.iter().map(LogEntry::render).collect(),
        }
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
