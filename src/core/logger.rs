//! Logger handle and writer thread

use super::config::LoggerConfig;
use super::log_level::LogLevel;
use super::queue::RecordQueue;
use super::record;
use crate::sink::{FileSink, StdoutMirror};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Upper bound on the writer's condition wait.
///
/// A missed or coalesced wakeup can therefore delay delivery by at most
/// this much; it does not gate the normal signaled path.
pub const WRITER_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// State shared between producer threads and the writer thread.
struct Shared {
    queue: RecordQueue,
    min_level: AtomicU8,
    shutdown: AtomicBool,
}

/// Asynchronous logger: producers enqueue formatted lines, one dedicated
/// writer thread batches them to the file and the optional stdout mirror.
///
/// The handle is the owner of the subsystem's lifecycle. Share it across
/// threads behind an [`Arc`]; `log` and `set_level` take `&self`. Dropping
/// the last handle (or calling [`shutdown`](Logger::shutdown)) drains every
/// record enqueued before the shutdown signal and joins the writer.
///
/// No operation on this type returns an error to the caller: filesystem
/// failures are reported on stderr and the logger degrades (file writes
/// skipped, stdout mirroring unaffected) rather than aborting the host.
///
/// # Examples
///
/// ```no_run
/// use tslog::core::{Logger, LoggerConfig, LogLevel};
///
/// let mut logger = Logger::new(LoggerConfig::new("logs/app.log"));
/// logger.info("application started");
/// logger.set_level(LogLevel::Warn);
/// logger.debug("now filtered out");
/// logger.shutdown();
/// ```
pub struct Logger {
    shared: Arc<Shared>,
    writer_handle: Option<thread::JoinHandle<()>>,
}

impl Logger {
    /// Create the logger and spawn its writer thread.
    ///
    /// Infallible: a failed directory creation or file open is reported on
    /// stderr and the logger starts in degraded no-file mode.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let shared = Arc::new(Shared {
            queue: RecordQueue::new(),
            min_level: AtomicU8::new(config.level as u8),
            shutdown: AtomicBool::new(false),
        });

        let worker_shared = Arc::clone(&shared);
        let writer_handle = thread::Builder::new()
            .name("tslog-writer".to_string())
            .spawn(move || {
                // The sinks live on the writer thread; no other thread
                // ever touches the file handle.
                let mut file = FileSink::open(&config.file_path, config.max_bytes);
                let stdout = StdoutMirror::new(config.also_stdout);
                writer_loop(&worker_shared, &mut file, &stdout);
            });

        let writer_handle = match writer_handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!("[LOGGER ERROR] Failed to spawn writer thread: {}", e);
                None
            }
        };

        Self {
            shared,
            writer_handle,
        }
    }

    /// Enqueue one record, unless it is filtered out or the logger has
    /// been shut down (both cases are silent no-ops).
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if self.shared.shutdown.load(Ordering::Acquire) {
            return;
        }
        // Filter before formatting: a dropped record costs no allocation
        // and no lock. A concurrent set_level may apply the old or the new
        // threshold to this record; that race is accepted.
        if level < self.level() {
            return;
        }
        let line = record::format_record(level, message.as_ref());
        self.shared.queue.push(line);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Change the filter threshold. Applies to records enqueued after the
    /// change is observed by the calling thread; never retroactive.
    pub fn set_level(&self, level: LogLevel) {
        self.shared.min_level.store(level as u8, Ordering::Relaxed);
    }

    /// Current filter threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.shared.min_level.load(Ordering::Relaxed))
    }

    /// Signal shutdown, wake the writer, and join it.
    ///
    /// The writer performs a final full drain before exiting, so every
    /// record enqueued strictly before this call is written. Safe to call
    /// more than once; later calls are no-ops. Logging after shutdown is a
    /// silent no-op.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.queue.notify_all();

        if let Some(handle) = self.writer_handle.take() {
            if let Err(e) = handle.join() {
                eprintln!(
                    "[LOGGER ERROR] Writer thread panicked during shutdown: {:?}",
                    e
                );
            }
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Writer thread: wait, drain, rotate, write, flush; final drain on exit.
fn writer_loop(shared: &Shared, file: &mut FileSink, stdout: &StdoutMirror) {
    loop {
        let batch = shared.queue.wait_drain(WRITER_POLL_INTERVAL);
        if !batch.is_empty() {
            write_batch(file, stdout, &batch);
        } else if shared.shutdown.load(Ordering::Acquire) {
            break;
        }
    }

    // Catch anything enqueued between the last wake and thread exit
    let batch = shared.queue.drain();
    if !batch.is_empty() {
        write_batch(file, stdout, &batch);
    }
}

fn write_batch(file: &mut FileSink, stdout: &StdoutMirror, batch: &[String]) {
    // Rotation is checked against the size as it stood before this batch
    if let Err(e) = file.rotate_if_needed() {
        eprintln!("[LOGGER ERROR] {}", e);
    }

    for line in batch {
        if let Err(e) = file.write_line(line) {
            // Remaining lines of this batch are lost to the file but still
            // reach the stdout mirror below
            eprintln!("[LOGGER ERROR] {}", e);
            break;
        }
    }
    if let Err(e) = file.flush() {
        eprintln!("[LOGGER ERROR] {}", e);
    }

    if let Err(e) = stdout.write_batch(batch) {
        eprintln!("[LOGGER ERROR] Failed to mirror batch to stdout: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_log_and_shutdown_writes_everything() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("basic.log");

        let mut logger =
            Logger::new(LoggerConfig::new(&log_path).with_stdout(false));
        for i in 0..10 {
            logger.info(format!("message {}", i));
        }
        logger.shutdown();

        let content = fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 10);
        assert!(content.contains("message 0"));
        assert!(content.contains("message 9"));
    }

    #[test]
    fn test_level_filtering() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("filter.log");

        let mut logger = Logger::new(
            LoggerConfig::new(&log_path)
                .with_level(LogLevel::Warn)
                .with_stdout(false),
        );
        logger.debug("debug hidden");
        logger.info("info hidden");
        logger.warn("warn visible");
        logger.error("error visible");
        logger.shutdown();

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(!content.contains("debug hidden"));
        assert!(!content.contains("info hidden"));
        assert!(content.contains("warn visible"));
        assert!(content.contains("error visible"));
    }

    #[test]
    fn test_set_level_applies_to_later_records() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("setlevel.log");

        let mut logger =
            Logger::new(LoggerConfig::new(&log_path).with_stdout(false));
        logger.info("before change");
        logger.set_level(LogLevel::Error);
        assert_eq!(logger.level(), LogLevel::Error);
        logger.info("after change");
        logger.shutdown();

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("before change"));
        assert!(!content.contains("after change"));
    }

    #[test]
    fn test_log_after_shutdown_is_noop() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("postshutdown.log");

        let mut logger =
            Logger::new(LoggerConfig::new(&log_path).with_stdout(false));
        logger.info("kept");
        logger.shutdown();
        logger.info("dropped");
        // Second shutdown is a no-op as well
        logger.shutdown();

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("kept"));
        assert!(!content.contains("dropped"));
    }

    #[test]
    fn test_degraded_mode_does_not_panic() {
        let dir = tempdir().unwrap();
        // Directory at the file path forces the no-file degraded mode
        let log_path = dir.path().join("isdir.log");
        fs::create_dir(&log_path).unwrap();

        let mut logger =
            Logger::new(LoggerConfig::new(&log_path).with_stdout(false));
        for i in 0..100 {
            logger.info(format!("swallowed {}", i));
        }
        logger.shutdown();
    }
}
