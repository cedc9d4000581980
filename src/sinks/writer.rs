//! Sink over any `std::io::Write`

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Wraps a writer behind a mutex so loggers on different threads never
/// interleave bytes of two records.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            name: name.into(),
        }
    }

    /// Unwrap the inner writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, record: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock();
        writer
            .write_all(record)
            .and_then(|()| writer.flush())
            .map_err(|e| LoggerError::io_operation("writing record", self.name.clone(), e))
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_reach_inner_writer() {
        let sink = WriterSink::new(Vec::new());
        sink.write(b"{\"a\":1}\n").unwrap();
        sink.write(b"{\"a\":2}\n").unwrap();

        let bytes = sink.into_inner();
        assert_eq!(bytes, b"{\"a\":1}\n{\"a\":2}\n");
    }

    #[test]
    fn test_write_error_is_reported_with_sink_name() {
        let sink = WriterSink::named("audit", BrokenPipe);
        let err = sink.write(b"x\n").unwrap_err();

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("audit"));
    }

    #[test]
    fn test_std_stream_names() {
        assert_eq!(WriterSink::stdout().name(), "stdout");
        assert_eq!(WriterSink::stderr().name(), "stderr");
        assert!(WriterSink::stdout().fallback().is_none());
    }
}
