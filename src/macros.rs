//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```no_run
//! use tslog::prelude::*;
//! use tslog::info;
//!
//! let logger = Logger::new(LoggerConfig::new("logs/app.log"));
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```no_run
/// # use tslog::prelude::*;
/// # let logger = Logger::new(LoggerConfig::new("logs/app.log"));
/// use tslog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger, LoggerConfig};
    use tempfile::tempdir;

    #[test]
    fn test_macros_format_and_log() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("macros.log");

        let mut logger = Logger::new(
            LoggerConfig::new(&log_path)
                .with_level(LogLevel::Debug)
                .with_stdout(false),
        );

        log!(logger, LogLevel::Info, "plain message");
        debug!(logger, "value: {}", 42);
        info!(logger, "items: {}", 100);
        warn!(logger, "retry {} of {}", 1, 3);
        error!(logger, "code: {}", 500);
        logger.shutdown();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("plain message"));
        assert!(content.contains("value: 42"));
        assert!(content.contains("items: 100"));
        assert!(content.contains("retry 1 of 3"));
        assert!(content.contains("code: 500"));
    }
}
