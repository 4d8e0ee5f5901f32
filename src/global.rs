//! Process-wide logging facade
//!
//! A four-call API over one shared [`Logger`] for applications that want a
//! single process-wide log without threading a handle through every layer.
//! The instance lives behind a mutex, so a `shutdown` racing a concurrent
//! `log` serializes instead of dereferencing a cleared pointer.
//!
//! Lifecycle misuse never raises: a second `init` warns on stderr and
//! keeps the first instance running; `log` before `init` or after
//! `shutdown` is a silent no-op.

use crate::core::{LogLevel, Logger, LoggerConfig};
use parking_lot::Mutex;

static GLOBAL: Mutex<Option<Logger>> = Mutex::new(None);

/// Initialize the process-wide logger.
///
/// No-op with a stderr warning if already initialized; the first instance
/// keeps running. Re-initialization after [`shutdown`] is allowed.
pub fn init(config: LoggerConfig) {
    let mut global = GLOBAL.lock();
    if global.is_some() {
        eprintln!("[LOGGER WARNING] Logger already initialized; ignoring repeated init");
        return;
    }
    *global = Some(Logger::new(config));
}

/// Shut down the process-wide logger, draining every record enqueued
/// before this call. No-op if never initialized or already shut down.
pub fn shutdown() {
    let mut global = GLOBAL.lock();
    if let Some(mut logger) = global.take() {
        logger.shutdown();
    }
}

/// Change the filter threshold of the process-wide logger, if any.
pub fn set_level(level: LogLevel) {
    if let Some(logger) = GLOBAL.lock().as_ref() {
        logger.set_level(level);
    }
}

/// Log through the process-wide logger; silent no-op when uninitialized.
pub fn log(level: LogLevel, message: impl AsRef<str>) {
    if let Some(logger) = GLOBAL.lock().as_ref() {
        logger.log(level, message);
    }
}

#[inline]
pub fn debug(message: impl AsRef<str>) {
    log(LogLevel::Debug, message);
}

#[inline]
pub fn info(message: impl AsRef<str>) {
    log(LogLevel::Info, message);
}

#[inline]
pub fn warn(message: impl AsRef<str>) {
    log(LogLevel::Warn, message);
}

#[inline]
pub fn error(message: impl AsRef<str>) {
    log(LogLevel::Error, message);
}
