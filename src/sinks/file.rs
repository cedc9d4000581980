//! Append-only file sink

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    /// Each record is flushed before returning so a write error surfaces
    /// on the call that caused it.
    fn write(&self, record: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock();
        writer
            .write_all(record)
            .and_then(|()| writer.flush())
            .map_err(|e| {
                LoggerError::io_operation("writing log file", self.path.display().to_string(), e)
            })
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.get_mut().flush();
    }
}
