//! Error types for the logging subsystem
//!
//! Nothing here ever propagates to a `log()` caller: every failure is
//! reported on the error stream at the point of occurrence and absorbed.
//! The types exist so the fallible filesystem operations have explicit
//! results instead of unwinding through the queue/writer boundary.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Parent directory creation failed
    #[error("Failed to create log directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be opened in append mode
    #[error("Failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a batch line to the file failed
    #[error("Failed to write to log file '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Flushing a sink failed
    #[error("Failed to flush log file '{path}': {source}")]
    FileFlush {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Rotation rename or reopen failed
    #[error("File rotation failed for '{path}': {message}")]
    Rotation { path: String, message: String },
}

impl LoggerError {
    pub fn create_dir(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::CreateDir {
            path: path.into(),
            source,
        }
    }

    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn file_flush(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileFlush {
            path: path.into(),
            source,
        }
    }

    pub fn rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Rotation {
            path: path.into(),
            message: message.into(),
        }
    }
}
