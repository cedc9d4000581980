//! Core logger types and traits

pub mod debug_info;
pub mod diagnostic;
pub mod encoding;
pub mod error;
pub mod log_context;
pub mod log_entry;
pub mod logger;
pub mod metrics;
pub mod payload;
pub mod severity;
pub mod sink;
pub mod validation;

pub use debug_info::CallSite;
pub use diagnostic::{CapturedDiagnostics, DiagnosticStream, StderrDiagnostics};
pub use encoding::{decode_lines, decode_record, encode_record};
pub use error::{LoggerError, Result};
pub use log_context::LogContext;
pub use log_entry::{LogEntry, STATUS_FAILURE, STATUS_SUCCESS};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use payload::{ActivityInfo, ChangeDetail, ChangeInfo, DebugInfo, LogType, Payload};
pub use severity::Severity;
pub use sink::Sink;
pub use validation::{AcceptAll, EntryValidator, RuleValidator};
