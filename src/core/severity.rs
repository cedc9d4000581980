//! Severity levels and their ordering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a log event, from most verbose to least.
///
/// Ordering follows declaration rank, so `Debug2 < Debug1 < ... < Sec`.
/// A logger emits an event iff `event >= threshold`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    Debug2 = 1,
    Debug1 = 2,
    Debug0 = 3,
    #[default]
    Info = 4,
    Warn = 5,
    Err = 6,
    Crit = 7,
    Sec = 8,
}

impl Severity {
    /// Every level, in ascending order.
    pub const ALL: [Severity; 8] = [
        Severity::Debug2,
        Severity::Debug1,
        Severity::Debug0,
        Severity::Info,
        Severity::Warn,
        Severity::Err,
        Severity::Crit,
        Severity::Sec,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug2 => "DEBUG2",
            Severity::Debug1 => "DEBUG1",
            Severity::Debug0 => "DEBUG0",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Err => "ERR",
            Severity::Crit => "CRIT",
            Severity::Sec => "SEC",
        }
    }

    /// Whether an event at `self` passes a filter set to `threshold`.
    #[inline]
    pub fn passes(self, threshold: Severity) -> bool {
        self >= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG2" => Ok(Severity::Debug2),
            "DEBUG1" => Ok(Severity::Debug1),
            "DEBUG0" | "DEBUG" => Ok(Severity::Debug0),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERR" | "ERROR" => Ok(Severity::Err),
            "CRIT" | "CRITICAL" => Ok(Severity::Crit),
            "SEC" | "SECURITY" => Ok(Severity::Sec),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
