//! Rotating file sink
//!
//! Owned exclusively by the writer thread; no other thread performs file
//! I/O, so no locking happens around file operations.

use crate::core::error::{LoggerError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-mode log file with single-generation size-based rotation.
///
/// A sink may run without an open file (degraded mode) when opening or
/// rotating failed; writes are then skipped until the next successful
/// rotation reopen, while stdout mirroring elsewhere is unaffected.
pub struct FileSink {
    path: PathBuf,
    max_bytes: u64,
    writer: Option<BufWriter<File>>,
    current_size: u64,
}

impl FileSink {
    /// Open the sink, creating parent directories as needed.
    ///
    /// Never fails: directory or open errors are reported on stderr and
    /// the sink starts in degraded no-file mode.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64) -> Self {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    let err = LoggerError::create_dir(parent.display().to_string(), e);
                    eprintln!("[LOGGER ERROR] {}", err);
                }
            }
        }

        let (writer, current_size) = match Self::open_writer(&path) {
            Ok((writer, size)) => (Some(writer), size),
            Err(err) => {
                eprintln!("[LOGGER ERROR] {}", err);
                (None, 0)
            }
        };

        Self {
            path,
            max_bytes,
            writer,
            current_size,
        }
    }

    fn open_writer(path: &Path) -> Result<(BufWriter<File>, u64)> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))?;

        // Seed the size counter from whatever is already on disk
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok((BufWriter::new(file), size))
    }

    fn backup_path(&self) -> PathBuf {
        let mut path = self.path.clone();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app.log");
        path.set_file_name(format!("{}.1", filename));
        path
    }

    /// Rotate if the size threshold was met before this batch.
    ///
    /// Checked once per batch, so a single large batch can push the fresh
    /// file past `max_bytes` before the next check (bounded overshoot).
    pub fn rotate_if_needed(&mut self) -> Result<()> {
        if self.max_bytes == 0 || self.writer.is_none() || self.current_size < self.max_bytes {
            return Ok(());
        }
        self.rotate()
    }

    fn rotate(&mut self) -> Result<()> {
        // Flush and drop the writer so the rename sees a closed handle
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::rotation(
                    self.path.display().to_string(),
                    format!("flush before rotation failed: {}", e),
                )
            })?;
        }

        let backup = self.backup_path();
        // rename atomically replaces the previous backup on Unix; on
        // platforms where it refuses, fall back to remove-then-rename
        if let Err(first) = fs::rename(&self.path, &backup) {
            if backup.exists() {
                let _ = fs::remove_file(&backup);
            }
            fs::rename(&self.path, &backup).map_err(|_| {
                LoggerError::rotation(
                    self.path.display().to_string(),
                    format!("rename to '{}' failed: {}", backup.display(), first),
                )
            })?;
        }

        let (writer, size) = Self::open_writer(&self.path).map_err(|e| {
            LoggerError::rotation(
                self.path.display().to_string(),
                format!("reopen after rotation failed: {}", e),
            )
        })?;
        self.writer = Some(writer);
        self.current_size = size;
        Ok(())
    }

    /// Append one line. Skipped silently in degraded no-file mode.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer
                .write_all(line.as_bytes())
                .and_then(|()| writer.write_all(b"\n"))
                .map_err(|e| LoggerError::file_write(self.path.display().to_string(), e))?;
            self.current_size += line.len() as u64 + 1;
        }
        Ok(())
    }

    /// Flush buffered writes. Once per batch, not per record.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer
                .flush()
                .map_err(|e| LoggerError::file_flush(self.path.display().to_string(), e))?;
        }
        Ok(())
    }

    /// Whether a file is currently open for writing.
    #[must_use]
    pub fn has_file(&self) -> bool {
        self.writer.is_some()
    }

    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
