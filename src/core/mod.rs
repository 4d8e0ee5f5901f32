//! Core logger types

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod queue;
pub mod record;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, WRITER_POLL_INTERVAL};
pub use queue::RecordQueue;
