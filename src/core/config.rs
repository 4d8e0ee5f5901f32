//! Logger configuration

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a [`Logger`](crate::core::Logger).
///
/// Immutable once the logger is constructed; only the filter level can be
/// changed afterwards, through [`Logger::set_level`](crate::core::Logger::set_level).
///
/// # Examples
///
/// ```
/// use tslog::core::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::new("logs/app.log")
///     .with_level(LogLevel::Debug)
///     .with_max_bytes(10 * 1024 * 1024)
///     .with_stdout(false);
///
/// assert_eq!(config.max_bytes, 10 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Target log file. Parent directories are created if absent.
    pub file_path: PathBuf,

    /// Initial filter threshold.
    #[serde(default)]
    pub level: LogLevel,

    /// Rotation threshold in bytes. `0` disables rotation.
    #[serde(default)]
    pub max_bytes: u64,

    /// Mirror every written line to standard output.
    #[serde(default = "default_stdout")]
    pub also_stdout: bool,
}

fn default_stdout() -> bool {
    true
}

impl LoggerConfig {
    /// Create a configuration with default settings for the given file path
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            level: LogLevel::default(),
            max_bytes: 0,
            also_stdout: true,
        }
    }

    /// Set the initial filter level
    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the rotation threshold in bytes (`0` disables rotation)
    #[must_use = "builder methods return a new value"]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Enable or disable stdout mirroring
    #[must_use = "builder methods return a new value"]
    pub fn with_stdout(mut self, also_stdout: bool) -> Self {
        self.also_stdout = also_stdout;
        self
    }
}
