//! Validation of log entries before they are written
//!
//! The logger only needs a pass/fail answer with a reason; which rules
//! apply is configuration. [`RuleValidator`] checks the field rules
//! declared on [`LogEntry`]; any `Fn(&LogEntry) -> Result<()>` closure can
//! be plugged in instead.

use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;
use validator::Validate;

pub trait EntryValidator: Send + Sync {
    /// `Ok(())` if the entry may be written to the primary sink.
    fn validate(&self, entry: &LogEntry) -> Result<()>;
}

impl<F> EntryValidator for F
where
    F: Fn(&LogEntry) -> Result<()> + Send + Sync,
{
    fn validate(&self, entry: &LogEntry) -> Result<()> {
        self(entry)
    }
}

/// Default validator.
///
/// Requires a 1-30 character app name, a non-empty system name and, when
/// set, a remote address that parses as an IPv4 or IPv6 address.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl RuleValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EntryValidator for RuleValidator {
    fn validate(&self, entry: &LogEntry) -> Result<()> {
        Validate::validate(entry).map_err(LoggerError::from)
    }
}

/// Accepts every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl EntryValidator for AcceptAll {
    fn validate(&self, _entry: &LogEntry) -> Result<()> {
        Ok(())
    }
}
