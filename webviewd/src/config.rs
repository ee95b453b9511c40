//! Runtime configuration.
//!
//! Defaults, overridden by an optional JSON config file, overridden by
//! command-line flags. The file format is versioned so it can evolve.

use serde::{Deserialize, Serialize};
use services_bridge::{MockDataset, SeedError, DEFAULT_RESPONSE_DELAY};
use services_logger::DEFAULT_LOG_CAPACITY;
use sim_clock::Duration;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    Dataset(#[from] SeedError),
}

/// Which host the embedded content talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    /// Mock host with the developer control panel
    #[default]
    Dev,
    /// Real host; calls are only logged
    Production,
}

/// How time advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeMode {
    /// Time moves only on `wait`, instantly
    #[default]
    Simulated,
    /// Time follows the wall clock and `wait` sleeps
    Realtime,
}

/// Host runtime configuration
#[derive(Debug, Clone)]
pub struct HostRuntimeConfig {
    /// Host mode
    pub mode: HostMode,
    /// Time mode
    pub time_mode: TimeMode,
    /// Optional input script
    pub script: Option<String>,
    /// Maximum steps to run (0 = unlimited)
    pub max_steps: usize,
    /// Delay before a mock response is delivered
    pub response_delay: Duration,
    /// Entries kept in the panel log
    pub log_capacity: usize,
    /// Replacement seed datasets
    pub dataset: Option<MockDataset>,
}

impl Default for HostRuntimeConfig {
    fn default() -> Self {
        Self {
            mode: HostMode::Dev,
            time_mode: TimeMode::Simulated,
            script: None,
            max_steps: 0,
            response_delay: DEFAULT_RESPONSE_DELAY,
            log_capacity: DEFAULT_LOG_CAPACITY,
            dataset: None,
        }
    }
}

/// On-disk configuration
///
/// Every field except `version` is optional; absent fields keep the current
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<HostMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_capacity: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,
    /// Dataset file, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl ConfigFile {
    /// Current version of the config format
    pub const CURRENT_VERSION: u32 = 1;

    /// Parses a config from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(text)?;
        if file.version != Self::CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion(file.version));
        }
        Ok(file)
    }

    /// Reads and parses a config file
    ///
    /// A relative `dataFile` is resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut file = Self::from_json(&read_to_string(path)?)?;
        if let (Some(data_file), Some(dir)) = (&file.data_file, path.parent()) {
            if data_file.is_relative() {
                file.data_file = Some(dir.join(data_file));
            }
        }
        Ok(file)
    }

    /// Applies the file's settings on top of `config`
    pub fn apply(&self, config: &mut HostRuntimeConfig) -> Result<(), ConfigError> {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(delay) = self.response_delay_ms {
            config.response_delay = Duration::from_millis(delay);
        }
        if let Some(capacity) = self.log_capacity {
            config.log_capacity = capacity;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if let Some(data_file) = &self.data_file {
            config.dataset = Some(load_dataset(data_file)?);
        }
        Ok(())
    }
}

/// Reads a seed dataset bundle from a JSON file
pub fn load_dataset(path: &Path) -> Result<MockDataset, ConfigError> {
    Ok(MockDataset::from_json(&read_to_string(path)?)?)
}

fn read_to_string(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
