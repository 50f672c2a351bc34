//! CLI log configuration
//!
//! Per-target levels for the two library layers plus the CLI itself.

use tracing::Level;

/// CLI log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub module: Option<Level>,
    pub runner: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            module: None,
            runner: None,
        }
    }
}

impl LogConfig {
    /// Config with one global level for every target
    pub fn with_global(level: Level) -> Self {
        Self {
            global: level,
            ..Self::default()
        }
    }

    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "cxplay::module" => self.module.unwrap_or(self.global),
            "cxplay::runner" => self.runner.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

/// Parse a log level name ("silent" narrows to errors only)
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" => Some(Level::ERROR),
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Map the project-file level to a tracing level
pub fn to_level(level: cxplay_config::LogLevel) -> Level {
    match level {
        cxplay_config::LogLevel::Error => Level::ERROR,
        cxplay_config::LogLevel::Warn => Level::WARN,
        cxplay_config::LogLevel::Info => Level::INFO,
        cxplay_config::LogLevel::Debug => Level::DEBUG,
        cxplay_config::LogLevel::Trace => Level::TRACE,
    }
}
