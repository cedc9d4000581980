//! Event payload shapes and the type tag derived from them

use super::log_context::LogContext;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kind of event a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    Change,
    Activity,
    Debug,
}

impl LogType {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogType::Change => "change",
            LogType::Activity => "activity",
            LogType::Debug => "debug",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// One field mutation inside a [`ChangeInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeDetail {
    pub field: String,
    pub old_value: Value,
    pub new_value: Value,
}

/// Prior/new values describing a state mutation on an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeInfo {
    pub entity: String,
    pub op: String,
    pub changes: Vec<ChangeDetail>,
}

impl ChangeInfo {
    pub fn new(entity: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            op: op.into(),
            changes: Vec::new(),
        }
    }

    /// Append a field change, builder style.
    #[must_use]
    pub fn add_change(
        mut self,
        field: impl Into<String>,
        old_value: impl Into<Value>,
        new_value: impl Into<Value>,
    ) -> Self {
        self.changes.push(ChangeDetail {
            field: field.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
        });
        self
    }
}

/// Free-form operation narrative. A bare string is the common case.
pub type ActivityInfo = Value;

/// Developer diagnostics. Location, process and runtime fields are
/// overwritten by the logger at emission time; `data` is caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    pub pid: u32,
    pub runtime: String,
    pub file_name: String,
    pub line_number: u32,
    pub function_name: String,
    pub stack_trace: String,
    #[serde(default)]
    pub data: LogContext,
}

impl DebugInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: LogContext) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }
}

/// Type-specific body of a record. The variant is the record's type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Change(ChangeInfo),
    Activity(ActivityInfo),
    Debug(DebugInfo),
}

impl Payload {
    pub fn log_type(&self) -> LogType {
        match self {
            Payload::Change(_) => LogType::Change,
            Payload::Activity(_) => LogType::Activity,
            Payload::Debug(_) => LogType::Debug,
        }
    }

    /// Payload as a bare JSON value, without the tag.
    pub(crate) fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            Payload::Change(info) => serde_json::to_value(info),
            Payload::Activity(info) => Ok(info.clone()),
            Payload::Debug(info) => serde_json::to_value(info),
        }
    }

    /// Rebuild a payload from its tag and JSON body. Fails when the body
    /// does not have the shape the tag requires.
    pub(crate) fn from_tagged(log_type: LogType, data: Value) -> serde_json::Result<Self> {
        Ok(match log_type {
            LogType::Change => Payload::Change(serde_json::from_value(data)?),
            LogType::Activity => Payload::Activity(data),
            LogType::Debug => Payload::Debug(serde_json::from_value(data)?),
        })
    }
}

impl From<ChangeInfo> for Payload {
    fn from(info: ChangeInfo) -> Self {
        Payload::Change(info)
    }
}

impl From<Value> for Payload {
    fn from(info: Value) -> Self {
        Payload::Activity(info)
    }
}

impl From<DebugInfo> for Payload {
    fn from(info: DebugInfo) -> Self {
        Payload::Debug(info)
    }
}
