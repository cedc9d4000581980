//! Sink trait for serialized log records

use super::error::Result;

/// Destination for finished records.
///
/// A sink is shared by every logger derived from a common ancestor, and
/// those loggers do not lock each other out. Implementations take `&self`
/// and must serialize concurrent writes themselves.
pub trait Sink: Send + Sync {
    /// Write one newline-terminated record.
    fn write(&self, record: &[u8]) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    /// Secondary destination for records that must bypass this sink.
    /// Only composite sinks have one.
    fn fallback(&self) -> Option<&dyn Sink> {
        None
    }
}
