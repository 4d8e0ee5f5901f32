//! Record formatting
//!
//! Renders a level and message into the single-line wire format written to
//! the log file and mirrored to stdout:
//!
//! ```text
//! [2025-01-08T10:30:45.123Z 4242 ThreadId(7) INFO] message text
//! ```
//!
//! Formatting happens on the producer side, before the record is enqueued;
//! the queue and the writer thread only ever see finished lines.

use super::log_level::LogLevel;
use chrono::Utc;
use std::cell::RefCell;

// Thread-local cache so the thread-id string is rendered once per thread
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(format!("{:?}", std::thread::current().id()));
        }
        cache
            .as_ref()
            .expect("thread_id cache initialized in previous line")
            .clone()
    })
}

/// Sanitize a log message to prevent log injection attacks.
///
/// Replaces newlines, carriage returns, and tabs with escape sequences so
/// one `log()` call always produces exactly one output line.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Render a fully formatted record line (without trailing newline).
///
/// The timestamp is UTC to millisecond precision with a literal `Z` suffix.
pub fn format_record(level: LogLevel, message: &str) -> String {
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
    format!(
        "[{} {} {} {}] {}",
        timestamp,
        std::process::id(),
        thread_id(),
        level.to_str(),
        sanitize_message(message)
    )
}
