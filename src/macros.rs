//! Logging macros for ergonomic message formatting.
//!
//! These wrap the `Logger` emission methods with `format!`-style
//! arguments.
//!
//! # Examples
//!
//! ```
//! use logharbour::prelude::*;
//! use logharbour::{activity, log};
//! use std::sync::Arc;
//!
//! let logger = Logger::new("gateway", Arc::new(MemorySink::new()));
//!
//! let port = 8080;
//! log!(logger, "listening on port {}", port);
//! activity!(logger, serde_json::json!({"port": port}), "server {} started", "edge-1");
//! ```

/// Log a formatted message as a bare activity event.
///
/// # Examples
///
/// ```
/// # use logharbour::prelude::*;
/// # let logger = Logger::new("app", std::sync::Arc::new(MemorySink::new()));
/// use logharbour::log;
/// log!(logger, "Simple message");
/// log!(logger, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(format!($($arg)+))
    };
}

/// Log a formatted message at a given severity.
///
/// # Examples
///
/// ```
/// # use logharbour::prelude::*;
/// # let logger = Logger::new("app", std::sync::Arc::new(MemorySink::new()));
/// use logharbour::log_at;
/// log_at!(logger, Severity::Warn, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $priority:expr, $($arg:tt)+) => {
        $logger.with_priority($priority).log(format!($($arg)+))
    };
}

/// Log an activity event with a formatted message and structured data.
///
/// # Examples
///
/// ```
/// # use logharbour::prelude::*;
/// # let logger = Logger::new("app", std::sync::Arc::new(MemorySink::new()));
/// use logharbour::activity;
/// activity!(logger, "batch-7", "processed {} items", 100);
/// ```
#[macro_export]
macro_rules! activity {
    ($logger:expr, $data:expr, $($arg:tt)+) => {
        $logger.log_activity(format!($($arg)+), $data)
    };
}

/// Log a debug event with a formatted message. The call site recorded is
/// the macro invocation.
///
/// # Examples
///
/// ```
/// # use logharbour::prelude::*;
/// # let logger = Logger::new("app", std::sync::Arc::new(MemorySink::new()));
/// use logharbour::debug_event;
/// debug_event!(logger.debug0(), "cache size {}", 42);
/// ```
#[macro_export]
macro_rules! debug_event {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_debug(format!($($arg)+), $crate::DebugInfo::new())
    };
}
