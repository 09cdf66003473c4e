//! Current document interface
//!
//! Resolves the file the selection was taken from and, from it, where a
//! generated fake should be written.

use std::path::{Path, PathBuf};

/// Where a generated fake goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeLocation {
    /// Directory receiving the `.h`/`.m` pair
    pub directory: PathBuf,
    /// Header to `#import` for the protocol declaration, e.g. `Greeter.h`
    pub header_import: String,
}

/// The source file the user is working in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory containing the document
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Header that declares what this document holds: `Foo.m` and `Foo.h`
    /// both map to `Foo.h`
    pub fn header_name(&self) -> String {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{stem}.h")
    }
}

/// Trait for resolving the current source document
pub trait SourceCodeDocumentProxy: Send + Sync {
    fn current_document(&self) -> Option<SourceDocument>;

    /// Where the fake for the current document should be written.
    /// `None` when there is no current document.
    fn fake_location(&self) -> Option<FakeLocation>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_name_from_implementation_file() {
        assert_eq!(SourceDocument::new("src/Greeter.m").header_name(), "Greeter.h");
        assert_eq!(SourceDocument::new("Greeter.h").header_name(), "Greeter.h");
    }

    #[test]
    fn test_directory_of_bare_file_name() {
        assert_eq!(SourceDocument::new("Greeter.h").directory(), Path::new(""));
        assert_eq!(
            SourceDocument::new("/tmp/app/Greeter.h").directory(),
            Path::new("/tmp/app")
        );
    }
}
