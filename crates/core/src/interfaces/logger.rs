//! Diagnostic logging interface

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a logged message is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// Trait for the diagnostic trail of an action. Fire-and-forget.
pub trait ActionLogger: Send + Sync {
    fn log(&self, message: &str, severity: Severity);
}
