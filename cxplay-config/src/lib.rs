//! cxplay Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It is the shared configuration vocabulary across all cxplay crates:
//! the `playground.json` project file and the log-level names.

use std::path::PathBuf;

use serde::Deserialize;

/// Project file (`playground.json`) describing one playground setup.
///
/// The `module` field is the only required one: the path to the precompiled
/// compiler `.wasm`. Everything else has a default.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Path to the external compiler module (`.wasm`)
    pub module: PathBuf,
    /// Optional default source file loaded into the session at start
    pub entry: Option<PathBuf>,
    /// Start theme: "dark" (default) or "light"
    pub theme: Option<ThemeChoice>,
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub log_level: Option<LogLevel>,
}

impl ProjectConfig {
    /// Parse a project file from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Start theme named in the project file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    Light,
}

/// Log verbosity named in the project file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Get the string name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
