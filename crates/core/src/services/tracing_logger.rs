//! Logger backed by `tracing`

use crate::interfaces::{ActionLogger, Severity};

/// Forwards action log messages to `tracing` under the `fakesmith` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl ActionLogger for TracingLogger {
    fn log(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Debug => tracing::debug!(target: "fakesmith", "{message}"),
            Severity::Info => tracing::info!(target: "fakesmith", "{message}"),
            Severity::Warning => tracing::warn!(target: "fakesmith", "{message}"),
            Severity::Error => tracing::error!(target: "fakesmith", "{message}"),
        }
    }
}
