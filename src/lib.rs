//! # tslog
//!
//! Thread-safe asynchronous logging: many producer threads enqueue
//! formatted records, one writer thread batches them to a rotating file
//! with optional stdout mirroring.
//!
//! ## Features
//!
//! - **Asynchronous**: producers never block on disk I/O
//! - **Batched writes**: one flush per drained batch, not per record
//! - **Size-based rotation**: single `.1` backup generation
//! - **Crash-proof for the host**: every internal failure is reported on
//!   stderr and absorbed, never raised to the caller
//!
//! Use [`core::Logger`] as an explicit handle, or the [`global`] module
//! for a process-wide `init`/`log`/`shutdown` facade.

pub mod core;
pub mod global;
pub mod macros;
pub mod sink;

pub mod prelude {
    pub use crate::core::{
        LogLevel, Logger, LoggerConfig, LoggerError, Result, WRITER_POLL_INTERVAL,
    };
    pub use crate::sink::{FileSink, StdoutMirror};
}

pub use crate::core::{
    LogLevel, Logger, LoggerConfig, LoggerError, Result, WRITER_POLL_INTERVAL,
};
pub use crate::sink::{FileSink, StdoutMirror};
