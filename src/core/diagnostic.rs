//! Last-resort destination for entries that could not be written anywhere
//! else.

use super::error::LoggerError;
use super::log_entry::LogEntry;
use parking_lot::Mutex;
use std::io::Write;

pub trait DiagnosticStream: Send + Sync {
    /// Report a failed entry. Must not fail or panic.
    fn report(&self, error: &LoggerError, entry: &LogEntry);
}

/// Writes `Error: <error>, LogEntry: <entry>` lines to the process's
/// standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl DiagnosticStream for StderrDiagnostics {
    fn report(&self, error: &LoggerError, entry: &LogEntry) {
        let line = format_report(error, entry);
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "{} {}", prefix(), line);
    }
}

#[cfg(feature = "console")]
fn prefix() -> String {
    use colored::Colorize;
    "[LOGHARBOUR ERROR]".red().bold().to_string()
}

#[cfg(not(feature = "console"))]
fn prefix() -> String {
    "[LOGHARBOUR ERROR]".to_string()
}

/// Human-readable `error, record` pair.
pub fn format_report(error: &LoggerError, entry: &LogEntry) -> String {
    format!("Error: {}, LogEntry: {:?}", error, entry)
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct CapturedDiagnostics {
    reports: Mutex<Vec<String>>,
}

impl CapturedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl DiagnosticStream for CapturedDiagnostics {
    fn report(&self, error: &LoggerError, entry: &LogEntry) {
        self.reports.lock().push(format_report(error, entry));
    }
}
