//! Configuration validation for ensuring configs are usable before a fake
//! is generated from them

use crate::error::{Error, Result};

use super::Config;

impl Config {
    /// Check that the configured names can appear in Objective-C source
    pub fn validate(&self) -> Result<()> {
        if !self.fake.class_prefix.is_empty() && !is_identifier(&self.fake.class_prefix) {
            return Err(Error::ConfigError(format!(
                "fake.class_prefix `{}` is not a valid identifier",
                self.fake.class_prefix
            )));
        }

        if !is_identifier(&self.fake.superclass) {
            return Err(Error::ConfigError(format!(
                "fake.superclass `{}` is not a valid identifier",
                self.fake.superclass
            )));
        }

        if let Some(import) = self
            .fake
            .extra_imports
            .iter()
            .find(|import| !is_import_target(import))
        {
            return Err(Error::ConfigError(format!(
                "fake.extra_imports entry `{import}` must look like <Module/Header.h> or \"Header.h\""
            )));
        }

        if self.output.directory.as_os_str().is_empty() {
            return Err(Error::ConfigError(
                "output.directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_import_target(import: &str) -> bool {
    let quoted = import.len() > 2 && import.starts_with('"') && import.ends_with('"');
    let angled = import.len() > 2 && import.starts_with('<') && import.ends_with('>');
    quoted || angled
}
