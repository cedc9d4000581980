//! Primary/secondary composite sink

use crate::core::{LoggerError, Result, Sink};
use std::sync::Arc;

/// Writes to `primary`, and to `fallback` when the primary write fails.
///
/// The logger also looks up [`Sink::fallback`] to send records that fail
/// validation straight to the secondary, without touching the primary.
#[derive(Clone)]
pub struct FallbackSink {
    primary: Arc<dyn Sink>,
    fallback: Arc<dyn Sink>,
}

impl FallbackSink {
    pub fn new(primary: Arc<dyn Sink>, fallback: Arc<dyn Sink>) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &Arc<dyn Sink> {
        &self.primary
    }

    pub fn secondary(&self) -> &Arc<dyn Sink> {
        &self.fallback
    }
}

impl Sink for FallbackSink {
    fn write(&self, record: &[u8]) -> Result<()> {
        let Err(primary_err) = self.primary.write(record) else {
            return Ok(());
        };
        self.fallback.write(record).map_err(|fallback_err| {
            LoggerError::writer(format!(
                "primary sink '{}' failed ({}); fallback sink '{}' failed ({})",
                self.primary.name(),
                primary_err,
                self.fallback.name(),
                fallback_err
            ))
        })
    }

    fn flush(&self) -> Result<()> {
        let primary = self.primary.flush();
        let fallback = self.fallback.flush();
        primary.and(fallback)
    }

    fn name(&self) -> &str {
        "fallback"
    }

    fn fallback(&self) -> Option<&dyn Sink> {
        Some(self.fallback.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_primary_success_skips_fallback() {
        let primary = Arc::new(MemorySink::new());
        let secondary = Arc::new(MemorySink::new());
        let sink = FallbackSink::new(primary.clone(), secondary.clone());

        sink.write(b"ok\n").unwrap();

        assert_eq!(primary.len(), 1);
        assert!(secondary.is_empty());
    }

    #[test]
    fn test_primary_failure_goes_to_fallback() {
        let primary = Arc::new(MemorySink::failing());
        let secondary = Arc::new(MemorySink::new());
        let sink = FallbackSink::new(primary.clone(), secondary.clone());

        sink.write(b"rescued\n").unwrap();

        assert!(primary.is_empty());
        assert_eq!(secondary.records(), vec![b"rescued\n".to_vec()]);
    }

    #[test]
    fn test_both_failing_reports_both() {
        let sink = FallbackSink::new(
            Arc::new(MemorySink::failing()),
            Arc::new(MemorySink::failing()),
        );

        let err = sink.write(b"lost\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("primary sink 'memory' failed"));
        assert!(msg.contains("fallback sink 'memory' failed"));
    }

    #[test]
    fn test_exposes_secondary() {
        let secondary = Arc::new(MemorySink::new());
        let sink = FallbackSink::new(Arc::new(MemorySink::new()), secondary.clone());

        sink.fallback().unwrap().write(b"direct\n").unwrap();
        assert_eq!(secondary.len(), 1);
    }
}
