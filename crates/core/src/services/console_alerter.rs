//! Alerter for command-line hosts

use crate::interfaces::Alerter;

/// Prints alerts to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAlerter;

impl ConsoleAlerter {
    pub fn new() -> Self {
        Self
    }
}

impl Alerter for ConsoleAlerter {
    fn present_alert(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
