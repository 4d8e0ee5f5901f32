//! MPSC record queue
//!
//! A mutex-guarded ordered buffer shared by every producer thread and the
//! single writer thread. Producers append formatted lines in O(1); the
//! writer moves the entire buffer out in one operation, so the lock is
//! never held across I/O.

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::time::Duration;

pub struct RecordQueue {
    records: Mutex<VecDeque<String>>,
    available: Condvar,
}

impl RecordQueue {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
        }
    }

    /// Append one formatted line and wake the writer.
    ///
    /// Per-producer FIFO follows from both appends serializing on the same
    /// lock; cross-producer interleaving is lock-acquisition order.
    pub fn push(&self, line: String) {
        let mut records = self.records.lock();
        records.push_back(line);
        drop(records);
        self.available.notify_one();
    }

    /// Block until records are available or `timeout` elapses, then move
    /// every queued record out in FIFO order.
    ///
    /// Returns an empty batch on timeout with nothing queued. The timeout
    /// bounds added latency under a missed or coalesced wakeup; it is not
    /// a correctness requirement.
    pub fn wait_drain(&self, timeout: Duration) -> Vec<String> {
        let mut records = self.records.lock();
        if records.is_empty() {
            self.available.wait_for(&mut records, timeout);
        }
        records.drain(..).collect()
    }

    /// Move every queued record out without waiting.
    pub fn drain(&self) -> Vec<String> {
        self.records.lock().drain(..).collect()
    }

    /// Wake every waiter, queued records or not. Used by shutdown.
    pub fn notify_all(&self) {
        self.available.notify_all();
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for RecordQueue {
    fn default() -> Self {
        Self::new()
    }
}
