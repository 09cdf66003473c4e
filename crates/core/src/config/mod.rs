//! Configuration management for fakesmith

pub mod fake_config;
pub mod output_config;
mod settings;
mod validation;

// Re-export main types
pub use fake_config::FakeConfig;
pub use output_config::OutputConfig;
pub use settings::{CONFIG_FILE_NAMES, Config};
