//! # logharbour
//!
//! Structured event logging for per-request (or per-worker) contexts.
//!
//! ## Features
//!
//! - **Context loggers**: `with_*` methods derive copies carrying who, op,
//!   subject and remote address; the original is never modified
//! - **Typed events**: data changes, activities and debug events with
//!   call-site capture
//! - **Validated writes**: entries are checked before they reach the sink
//! - **Never fails the caller**: invalid entries go to a fallback sink,
//!   unwritable ones to standard error
//! - **JSON lines**: one self-contained record per line

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        AcceptAll, ActivityInfo, ChangeDetail, ChangeInfo, DebugInfo, DiagnosticStream,
        EntryValidator, LogContext, LogEntry, LogType, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, Payload, Result, RuleValidator, Severity, Sink,
        STATUS_FAILURE, STATUS_SUCCESS,
    };
    pub use crate::sinks::{FallbackSink, FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    decode_lines, decode_record, encode_record, AcceptAll, ActivityInfo, CapturedDiagnostics,
    ChangeDetail, ChangeInfo, DebugInfo, DiagnosticStream, EntryValidator, LogContext, LogEntry,
    LogType, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Payload, Result, RuleValidator,
    Severity, Sink, StderrDiagnostics, STATUS_FAILURE, STATUS_SUCCESS,
};
pub use sinks::{FallbackSink, FileSink, MemorySink, WriterSink};
