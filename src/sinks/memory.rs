//! In-memory sink that keeps every record

use crate::core::{decode_record, LogEntry, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Collects records in memory. Can be switched into a failing mode to
/// exercise error paths.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Vec<u8>>>,
    failing: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every write fails.
    pub fn failing() -> Self {
        let sink = Self::new();
        sink.set_failing(true);
        sink
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Raw records, in write order.
    pub fn records(&self) -> Vec<Vec<u8>> {
        self.records.lock().clone()
    }

    /// Records decoded back into entries. Records that do not decode are
    /// skipped.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.records
            .lock()
            .iter()
            .filter_map(|record| decode_record(record).ok())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, record: &[u8]) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(LoggerError::writer("memory sink is in failing mode"));
        }
        self.records.lock().push(record.to_vec());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
