//! User-facing alert interface

/// Trait for presenting a failure message to the user
pub trait Alerter: Send + Sync {
    fn present_alert(&self, message: &str);
}
