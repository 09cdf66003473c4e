//! Document proxy for a file on disk

use std::path::PathBuf;

use crate::config::OutputConfig;
use crate::interfaces::{FakeLocation, SourceCodeDocumentProxy, SourceDocument};

pub struct FileDocumentProxy {
    path: PathBuf,
    output: OutputConfig,
}

impl FileDocumentProxy {
    pub fn new(path: impl Into<PathBuf>, output: OutputConfig) -> Self {
        Self {
            path: path.into(),
            output,
        }
    }
}

impl SourceCodeDocumentProxy for FileDocumentProxy {
    fn current_document(&self) -> Option<SourceDocument> {
        Some(SourceDocument::new(self.path.clone()))
    }

    fn fake_location(&self) -> Option<FakeLocation> {
        let document = self.current_document()?;
        Some(FakeLocation {
            directory: self.output.resolve_directory(document.directory()),
            header_import: document.header_name(),
        })
    }
}
