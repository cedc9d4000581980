//! Line-delimited JSON encoding of log entries
//!
//! Each entry becomes one self-contained JSON object followed by `\n`
//! (JSONL), the shape log shippers such as Filebeat, Vector or Loki
//! expect.

use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;

/// Serialize an entry to one newline-terminated record.
pub fn encode_record(entry: &LogEntry) -> Result<Vec<u8>> {
    let mut record = serde_json::to_vec(entry)?;
    record.push(b'\n');
    Ok(record)
}

/// Parse one record produced by [`encode_record`]. Surrounding whitespace,
/// including the trailing newline, is ignored.
pub fn decode_record(record: &[u8]) -> Result<LogEntry> {
    serde_json::from_slice(record.trim_ascii()).map_err(|e| LoggerError::decode(e.to_string()))
}

/// Parse every non-blank line of a JSONL buffer.
pub fn decode_lines(buffer: &str) -> Result<Vec<LogEntry>> {
    buffer
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| decode_record(line.as_bytes()))
        .collect()
}
