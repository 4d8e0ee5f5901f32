//! Stdout mirror sink

use std::io::Write;

/// Mirrors batches of formatted lines to standard output.
///
/// The stdout handle is locked once per batch and flushed once after it,
/// mirroring the amortized flush discipline of the file sink.
pub struct StdoutMirror {
    enabled: bool,
}

impl StdoutMirror {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn write_batch(&self, batch: &[String]) -> std::io::Result<()> {
        if !self.enabled || batch.is_empty() {
            return Ok(());
        }
        let mut out = std::io::stdout().lock();
        for line in batch {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_mirror_is_noop() {
        let mirror = StdoutMirror::new(false);
        assert!(!mirror.is_enabled());
        mirror
            .write_batch(&["never printed".to_string()])
            .expect("disabled mirror must not fail");
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mirror = StdoutMirror::new(true);
        mirror.write_batch(&[]).expect("empty batch must not fail");
    }
}
