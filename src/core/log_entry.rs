//! Log entry structure

use super::payload::{LogType, Payload};
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::IpAddr;
use validator::{Validate, ValidationError};

/// Conventional status for an operation that succeeded.
pub const STATUS_SUCCESS: &str = "success";
/// Conventional status for an operation that failed.
pub const STATUS_FAILURE: &str = "failure";

/// One log record: the logger's context snapshot plus the call's message
/// and payload.
///
/// Field-level rules checked by [`crate::core::validation::RuleValidator`]
/// live on the fields below.
#[derive(Debug, Clone, PartialEq, Validate, Serialize, Deserialize)]
#[serde(try_from = "WireEntry", into = "WireEntry")]
pub struct LogEntry {
    #[validate(length(min = 1, max = 30))]
    pub app_name: String,
    #[validate(length(min = 1))]
    pub system: String,
    pub module: String,
    pub priority: Severity,
    pub who: String,
    pub op: String,
    pub when: DateTime<Utc>,
    pub what_class: String,
    pub what_instance_id: String,
    pub status: String,
    #[validate(custom = "validate_remote_ip")]
    pub remote_ip: String,
    pub message: String,
    pub payload: Payload,
}

fn validate_remote_ip(remote_ip: &str) -> Result<(), ValidationError> {
    if remote_ip.is_empty() || remote_ip.parse::<IpAddr>().is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("ip"))
    }
}

impl LogEntry {
    /// Create an entry stamped with the current UTC time and empty context.
    pub fn new(
        app_name: impl Into<String>,
        priority: Severity,
        message: impl Into<String>,
        payload: impl Into<Payload>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            system: String::new(),
            module: String::new(),
            priority,
            who: String::new(),
            op: String::new(),
            when: Utc::now(),
            what_class: String::new(),
            what_instance_id: String::new(),
            status: String::new(),
            remote_ip: String::new(),
            message: message.into(),
            payload: payload.into(),
        }
    }

    pub fn log_type(&self) -> LogType {
        self.payload.log_type()
    }
}

/// Flat on-the-wire shape: the payload is split into a `type` tag and an
/// untyped `data` body.
#[derive(Clone, Serialize, Deserialize)]
struct WireEntry {
    app_name: String,
    system: String,
    module: String,
    priority: Severity,
    who: String,
    op: String,
    when: DateTime<Utc>,
    what_class: String,
    what_instance_id: String,
    status: String,
    remote_ip: String,
    message: String,
    #[serde(rename = "type")]
    log_type: LogType,
    data: Value,
}

impl From<LogEntry> for WireEntry {
    fn from(entry: LogEntry) -> Self {
        let log_type = entry.log_type();
        // Payload fields are plain strings, numbers and maps, so this
        // conversion has no failing case.
        let data = entry.payload.to_value().unwrap_or(Value::Null);
        Self {
            app_name: entry.app_name,
            system: entry.system,
            module: entry.module,
            priority: entry.priority,
            who: entry.who,
            op: entry.op,
            when: entry.when,
            what_class: entry.what_class,
            what_instance_id: entry.what_instance_id,
            status: entry.status,
            remote_ip: entry.remote_ip,
            message: entry.message,
            log_type,
            data,
        }
    }
}

impl TryFrom<WireEntry> for LogEntry {
    type Error = String;

    fn try_from(wire: WireEntry) -> Result<Self, Self::Error> {
        let payload = Payload::from_tagged(wire.log_type, wire.data).map_err(|e| {
            format!("data does not match type '{}': {}", wire.log_type, e)
        })?;
        Ok(Self {
            app_name: wire.app_name,
            system: wire.system,
            module: wire.module,
            priority: wire.priority,
            who: wire.who,
            op: wire.op,
            when: wire.when,
            what_class: wire.what_class,
            what_instance_id: wire.what_instance_id,
            status: wire.status,
            remote_ip: wire.remote_ip,
            message: wire.message,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::payload::{ChangeInfo, DebugInfo};
    use serde_json::json;

    #[test]
    fn test_new_entry_defaults() {
        let entry = LogEntry::new("billing", Severity::Warn, "hello", json!("data"));
        assert_eq!(entry.app_name, "billing");
        assert_eq!(entry.priority, Severity::Warn);
        assert_eq!(entry.log_type(), LogType::Activity);
        assert!(entry.who.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let entry = LogEntry::new(
            "billing",
            Severity::Info,
            "rename",
            ChangeInfo::new("account", "update").add_change("name", "a", "b"),
        );
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["type"], "change");
        assert_eq!(value["priority"], "Info");
        assert_eq!(value["data"]["entity"], "account");
        assert_eq!(value["data"]["changes"][0]["new_value"], "b");
        assert!(value.get("payload").is_none());
    }

    #[test]
    fn test_decode_rejects_tag_payload_mismatch() {
        let entry = LogEntry::new("billing", Severity::Info, "msg", DebugInfo::new());
        let mut value = serde_json::to_value(&entry).unwrap();
        value["type"] = json!("change");

        let result: Result<LogEntry, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_remote_ip_rule() {
        assert!(validate_remote_ip("").is_ok());
        assert!(validate_remote_ip("10.1.2.3").is_ok());
        assert!(validate_remote_ip("::1").is_ok());
        assert!(validate_remote_ip("not-an-ip").is_err());
    }
}
