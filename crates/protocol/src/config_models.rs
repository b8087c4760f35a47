//! Runtime configuration models.
//!
//! This module defines the structure of the configuration file read at
//! startup: logging settings, where learning agents keep their memory
//! snapshots, and the agents to create before serving requests.

use crate::agent_models::AgentSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use ts_rs::TS;

/// Severity levels understood by the logging sink.
///
/// Ordered from least to most severe.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, TS)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    /// The `tracing` filter directive matching this level.
    ///
    /// `tracing` has no level above `error`, so `Fatal` shares it.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Fatal => "error",
        }
    }
}

/// Logging sink settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct LoggingConfig {
    /// Optional log file. No file logging when absent.
    #[serde(default)]
    #[ts(optional)]
    pub file: Option<PathBuf>,

    /// Minimum level to record.
    #[serde(default)]
    pub level: LogLevel,

    /// Whether to also log to the console (stderr).
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: LogLevel::default(),
            console: default_console(),
        }
    }
}

/// Represents the whole runtime configuration file.
///
/// # Example
///
/// ```json
/// {
///   "logging": { "file": "agent_runtime.log", "level": "DEBUG", "console": true },
///   "memory_dir": "./memory",
///   "agents": [
///     { "id": "echo", "type": "learning", "config": { "learning_rate": 0.2 } }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Directory holding learning-agent memory snapshots.
    #[serde(default = "default_memory_dir")]
    pub memory_dir: PathBuf,

    /// Agents created when the runtime starts.
    #[serde(default)]
    pub agents: Vec<AgentSpec>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            memory_dir: default_memory_dir(),
            agents: Vec::new(),
        }
    }
}

fn default_console() -> bool {
    true
}

fn default_memory_dir() -> PathBuf {
    PathBuf::from(".")
}
