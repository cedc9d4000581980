//! Context-carrying logger and its emission pipeline

use super::{
    debug_info::{self, CallSite},
    diagnostic::{DiagnosticStream, StderrDiagnostics},
    encoding::encode_record,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    metrics::LoggerMetrics,
    payload::{ActivityInfo, ChangeInfo, DebugInfo, Payload},
    severity::Severity,
    sink::Sink,
    validation::{EntryValidator, RuleValidator},
};
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::Value;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Structured event logger for one execution context.
///
/// A `Logger` carries identity fields (who, op, subject, ...) that are
/// stamped on every entry it emits. The `with_*` methods return a copy
/// with one field replaced and leave the receiver untouched, so a request
/// handler can derive a specialized logger without affecting anyone else:
///
/// ```
/// use logharbour::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let base = Logger::new("billing", sink.clone());
///
/// let request = base.with_who("alice").with_remote_ip("10.0.0.7");
/// request.crit().log_activity("disk full", "volume /data at 100%");
///
/// let entries = sink.entries();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].who, "alice");
/// assert_eq!(entries[0].priority, Severity::Crit);
/// assert!(base.who().is_empty());
/// ```
///
/// Emission never returns an error. An entry that fails validation is sent
/// to the sink's fallback if it has one, otherwise to the diagnostic
/// stream; an entry the sink fails to write goes to the diagnostic stream.
///
/// Writes through one instance are serialized by its own lock. Derived
/// copies get their own lock, so a sink shared between them must
/// synchronize internally (all sinks in [`crate::sinks`] do).
pub struct Logger {
    app_name: String,
    system: String,
    module: String,
    /// Severity stamped on emitted entries
    priority: Severity,
    /// Threshold; also the lock serializing this instance's writes
    min_priority: Mutex<Severity>,
    who: String,
    op: String,
    what_class: String,
    what_instance_id: String,
    status: String,
    remote_ip: String,
    sink: Arc<dyn Sink>,
    validator: Arc<dyn EntryValidator>,
    diagnostics: Arc<dyn DiagnosticStream>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a logger writing to `sink`, with the default validator,
    /// standard-error diagnostics and `Info` priority and threshold.
    pub fn new(app_name: impl Into<String>, sink: Arc<dyn Sink>) -> Self {
        Self {
            app_name: app_name.into(),
            system: debug_info::system_name().to_string(),
            module: String::new(),
            priority: Severity::default(),
            min_priority: Mutex::new(Severity::default()),
            who: String::new(),
            op: String::new(),
            what_class: String::new(),
            what_instance_id: String::new(),
            status: String::new(),
            remote_ip: String::new(),
            sink,
            validator: Arc::new(RuleValidator::new()),
            diagnostics: Arc::new(StderrDiagnostics),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Create a logger over a [`crate::sinks::FallbackSink`]. Entries that
    /// fail validation land in its secondary sink.
    pub fn with_fallback(app_name: impl Into<String>, sink: crate::sinks::FallbackSink) -> Self {
        Self::new(app_name, Arc::new(sink))
    }

    #[must_use]
    pub fn builder(app_name: impl Into<String>, sink: Arc<dyn Sink>) -> LoggerBuilder {
        LoggerBuilder::new(app_name, sink)
    }

    /// Field-for-field copy with a fresh lock seeded from the current
    /// threshold.
    fn derive(&self) -> Self {
        Self {
            app_name: self.app_name.clone(),
            system: self.system.clone(),
            module: self.module.clone(),
            priority: self.priority,
            min_priority: Mutex::new(self.min_priority()),
            who: self.who.clone(),
            op: self.op.clone(),
            what_class: self.what_class.clone(),
            what_instance_id: self.what_instance_id.clone(),
            status: self.status.clone(),
            remote_ip: self.remote_ip.clone(),
            sink: Arc::clone(&self.sink),
            validator: Arc::clone(&self.validator),
            diagnostics: Arc::clone(&self.diagnostics),
            metrics: Arc::clone(&self.metrics),
        }
    }

    #[must_use]
    pub fn with_who(&self, who: impl Into<String>) -> Self {
        let mut logger = self.derive();
        logger.who = who.into();
        logger
    }

    #[must_use]
    pub fn with_module(&self, module: impl Into<String>) -> Self {
        let mut logger = self.derive();
        logger.module = module.into();
        logger
    }

    #[must_use]
    pub fn with_op(&self, op: impl Into<String>) -> Self {
        let mut logger = self.derive();
        logger.op = op.into();
        logger
    }

    #[must_use]
    pub fn with_what_class(&self, what_class: impl Into<String>) -> Self {
        let mut logger = self.derive();
        logger.what_class = what_class.into();
        logger
    }

    #[must_use]
    pub fn with_what_instance_id(&self, what_instance_id: impl Into<String>) -> Self {
        let mut logger = self.derive();
        logger.what_instance_id = what_instance_id.into();
        logger
    }

    #[must_use]
    pub fn with_status(&self, status: impl Into<String>) -> Self {
        let mut logger = self.derive();
        logger.status = status.into();
        logger
    }

    /// Copy whose entries carry `priority`.
    ///
    /// The shortcuts [`info`](Self::info), [`warn`](Self::warn) and
    /// friends do the same for a single call:
    /// `logger.warn().log_activity(...)`.
    #[must_use]
    pub fn with_priority(&self, priority: Severity) -> Self {
        let mut logger = self.derive();
        logger.priority = priority;
        logger
    }

    #[must_use]
    pub fn with_remote_ip(&self, remote_ip: impl Into<String>) -> Self {
        let mut logger = self.derive();
        logger.remote_ip = remote_ip.into();
        logger
    }

    #[must_use]
    #[inline]
    pub fn debug2(&self) -> Self {
        self.with_priority(Severity::Debug2)
    }

    #[must_use]
    #[inline]
    pub fn debug1(&self) -> Self {
        self.with_priority(Severity::Debug1)
    }

    #[must_use]
    #[inline]
    pub fn debug0(&self) -> Self {
        self.with_priority(Severity::Debug0)
    }

    #[must_use]
    #[inline]
    pub fn info(&self) -> Self {
        self.with_priority(Severity::Info)
    }

    #[must_use]
    #[inline]
    pub fn warn(&self) -> Self {
        self.with_priority(Severity::Warn)
    }

    #[must_use]
    #[inline]
    pub fn err(&self) -> Self {
        self.with_priority(Severity::Err)
    }

    #[must_use]
    #[inline]
    pub fn crit(&self) -> Self {
        self.with_priority(Severity::Crit)
    }

    #[must_use]
    #[inline]
    pub fn sec(&self) -> Self {
        self.with_priority(Severity::Sec)
    }

    /// Change this instance's threshold in place. Loggers derived earlier
    /// keep theirs; loggers derived afterwards inherit the new one.
    pub fn change_priority(&self, min_priority: Severity) {
        *self.min_priority.lock() = min_priority;
    }

    /// Log a data change event.
    pub fn log_data_change(&self, message: impl Into<String>, data: ChangeInfo) {
        self.log_entry(self.new_entry(message.into(), Payload::Change(data)));
    }

    /// Log an activity event.
    pub fn log_activity(&self, message: impl Into<String>, data: impl Into<ActivityInfo>) {
        self.log_entry(self.new_entry(message.into(), Payload::Activity(data.into())));
    }

    /// Log a debug event. Location, process id, runtime and stack trace in
    /// `data` are filled in for the caller of this method.
    #[track_caller]
    pub fn log_debug(&self, message: impl Into<String>, mut data: DebugInfo) {
        // Capturing a backtrace is costly; skip it for entries that would
        // be filtered anyway.
        if !self.priority.passes(self.min_priority()) {
            self.metrics.record_filtered();
            return;
        }

        let site = CallSite::capture(Location::caller());
        data.file_name = site.file_name;
        data.line_number = site.line_number;
        data.function_name = site.function_name;
        data.stack_trace = site.stack_trace;
        data.pid = debug_info::process_id();
        data.runtime = debug_info::runtime_version().to_string();

        self.log_entry(self.new_entry(message.into(), Payload::Debug(data)));
    }

    /// Log a bare message as an activity event whose data is `message`.
    pub fn log(&self, message: impl Into<String>) {
        self.log_activity("", Value::String(message.into()));
    }

    fn new_entry(&self, message: String, payload: Payload) -> LogEntry {
        LogEntry {
            app_name: self.app_name.clone(),
            system: self.system.clone(),
            module: self.module.clone(),
            priority: self.priority,
            who: self.who.clone(),
            op: self.op.clone(),
            when: Utc::now(),
            what_class: self.what_class.clone(),
            what_instance_id: self.what_instance_id.clone(),
            status: self.status.clone(),
            remote_ip: self.remote_ip.clone(),
            message,
            payload,
        }
    }

    /// Filter, validate, encode and write one entry.
    fn log_entry(&self, mut entry: LogEntry) {
        let threshold = self.min_priority.lock();

        entry.app_name.clone_from(&self.app_name);
        if !entry.priority.passes(*threshold) {
            self.metrics.record_filtered();
            return;
        }

        if let Err(err) = self.validator.validate(&entry) {
            self.metrics.record_invalid();
            self.divert_invalid(err, &entry);
            return;
        }

        match encode_record(&entry).and_then(|record| self.sink.write(&record)) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(err) => {
                self.metrics.record_write_failure();
                self.report(&err, &entry);
            }
        }
    }

    /// Route an entry that failed validation around the primary sink.
    fn divert_invalid(&self, err: LoggerError, entry: &LogEntry) {
        let Some(fallback) = self.sink.fallback() else {
            self.report(&err, entry);
            return;
        };

        match encode_record(entry).and_then(|record| fallback.write(&record)) {
            Ok(()) => {
                self.metrics.record_fallback_written();
            }
            Err(write_err) => {
                let combined = LoggerError::validation(format!(
                    "{}; fallback sink '{}' also failed: {}",
                    err,
                    fallback.name(),
                    write_err
                ));
                self.report(&combined, entry);
            }
        }
    }

    fn report(&self, err: &LoggerError, entry: &LogEntry) {
        self.metrics.record_diagnostic();
        self.diagnostics.report(err, entry);
    }

    /// Flush the underlying sink.
    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Severity stamped on emitted entries.
    pub fn priority(&self) -> Severity {
        self.priority
    }

    /// Current threshold.
    pub fn min_priority(&self) -> Severity {
        *self.min_priority.lock()
    }

    pub fn who(&self) -> &str {
        &self.who
    }

    pub fn op(&self) -> &str {
        &self.op
    }

    pub fn what_class(&self) -> &str {
        &self.what_class
    }

    pub fn what_instance_id(&self) -> &str {
        &self.what_instance_id
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn remote_ip(&self) -> &str {
        &self.remote_ip
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// Counters shared by this logger and every logger derived from it.
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        self.derive()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("app_name", &self.app_name)
            .field("system", &self.system)
            .field("module", &self.module)
            .field("priority", &self.priority)
            .field("min_priority", &self.min_priority())
            .field("who", &self.who)
            .field("op", &self.op)
            .field("what_class", &self.what_class)
            .field("what_instance_id", &self.what_instance_id)
            .field("status", &self.status)
            .field("remote_ip", &self.remote_ip)
            .field("sink", &self.sink.name())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use logharbour::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder("inventory", Arc::new(WriterSink::stdout()))
///     .module("stock")
///     .min_priority(Severity::Debug0)
///     .validator(AcceptAll)
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.min_priority(), Severity::Debug0);
/// ```
pub struct LoggerBuilder {
    app_name: String,
    sink: Arc<dyn Sink>,
    system: Option<String>,
    module: String,
    priority: Severity,
    min_priority: Severity,
    min_priority_env: Option<String>,
    validator: Arc<dyn EntryValidator>,
    diagnostics: Arc<dyn DiagnosticStream>,
}

impl LoggerBuilder {
    pub fn new(app_name: impl Into<String>, sink: Arc<dyn Sink>) -> Self {
        Self {
            app_name: app_name.into(),
            sink,
            system: None,
            module: String::new(),
            priority: Severity::default(),
            min_priority: Severity::default(),
            min_priority_env: None,
            validator: Arc::new(RuleValidator::new()),
            diagnostics: Arc::new(StderrDiagnostics),
        }
    }

    /// Override the discovered host name
    #[must_use = "builder methods return a new value"]
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Severity stamped on entries
    #[must_use = "builder methods return a new value"]
    pub fn priority(mut self, priority: Severity) -> Self {
        self.priority = priority;
        self
    }

    /// Initial threshold
    #[must_use = "builder methods return a new value"]
    pub fn min_priority(mut self, min_priority: Severity) -> Self {
        self.min_priority = min_priority;
        self
    }

    /// Read the threshold from environment variable `var` at build time,
    /// e.g. `LOG_PRIORITY=warn`. Takes precedence over
    /// [`min_priority`](Self::min_priority) when the variable is set.
    #[must_use = "builder methods return a new value"]
    pub fn min_priority_from_env(mut self, var: impl Into<String>) -> Self {
        self.min_priority_env = Some(var.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn validator<V: EntryValidator + 'static>(mut self, validator: V) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    /// Share one validator between several loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_validator(mut self, validator: Arc<dyn EntryValidator>) -> Self {
        self.validator = validator;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn diagnostics(mut self, diagnostics: Arc<dyn DiagnosticStream>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Build the Logger
    ///
    /// Fails when the app name is empty or the threshold variable holds an
    /// unknown severity.
    pub fn build(self) -> Result<Logger> {
        if self.app_name.trim().is_empty() {
            return Err(LoggerError::config("LoggerBuilder", "app name must not be empty"));
        }

        let mut min_priority = self.min_priority;
        if let Some(var) = &self.min_priority_env {
            if let Ok(raw) = std::env::var(var) {
                min_priority = raw
                    .parse()
                    .map_err(|e: String| LoggerError::config(var.as_str(), e))?;
            }
        }

        let mut logger = Logger::new(self.app_name, self.sink);
        if let Some(system) = self.system {
            logger.system = system;
        }
        logger.module = self.module;
        logger.priority = self.priority;
        logger.min_priority = Mutex::new(min_priority);
        logger.validator = self.validator;
        logger.diagnostics = self.diagnostics;
        Ok(logger)
    }
}
