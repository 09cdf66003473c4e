use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where generated fakes are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OutputConfig {
    /// Relative to the current document's directory unless absolute
    pub directory: PathBuf,
    /// Replace fake files that already exist
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("fakes"),
            overwrite: false,
        }
    }
}

impl OutputConfig {
    pub fn resolve_directory(&self, document_dir: &Path) -> PathBuf {
        if self.directory.is_absolute() {
            self.directory.clone()
        } else {
            document_dir.join(&self.directory)
        }
    }
}
