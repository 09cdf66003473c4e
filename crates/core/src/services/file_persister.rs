//! Writes generated fakes to the file system

use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::fake::GeneratedFake;
use crate::interfaces::{FakeLocation, FakeProtocolPersister};

/// Writes the `.h`/`.m` pair into the location's directory, creating it
/// when needed. Unless `overwrite` is set, existing files are left alone
/// and nothing is written.
#[derive(Debug, Clone, Default)]
pub struct FileSystemFakePersister {
    overwrite: bool,
}

impl FileSystemFakePersister {
    pub fn new(overwrite: bool) -> Self {
        Self { overwrite }
    }
}

impl FakeProtocolPersister for FileSystemFakePersister {
    fn persist(
        &self,
        fake: &GeneratedFake,
        location: &FakeLocation,
    ) -> Result<Vec<PathBuf>, PersistenceError> {
        let files = [
            (location.directory.join(fake.header_file_name()), &fake.header),
            (
                location.directory.join(fake.implementation_file_name()),
                &fake.implementation,
            ),
        ];

        if !self.overwrite {
            if let Some((existing, _)) = files.iter().find(|(path, _)| path.exists()) {
                return Err(PersistenceError::AlreadyExists(existing.clone()));
            }
        }

        std::fs::create_dir_all(&location.directory)
            .map_err(|source| io_error(&location.directory, source))?;

        let mut written = Vec::with_capacity(files.len());
        let mut created = Vec::new();
        for (path, contents) in files {
            let existed = path.exists();
            if let Err(source) = std::fs::write(&path, contents) {
                remove_created(&created);
                return Err(io_error(&path, source));
            }
            tracing::debug!("Wrote {}", path.display());
            if !existed {
                created.push(path.clone());
            }
            written.push(path);
        }
        Ok(written)
    }
}

/// Undo a partial write so the next run does not trip over a lone file
fn remove_created(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!("Failed to remove {}: {}", path.display(), e);
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake() -> GeneratedFake {
        GeneratedFake {
            class_name: "FakeGreeter".to_string(),
            header: "// header\n".to_string(),
            implementation: "// implementation\n".to_string(),
        }
    }

    fn location(temp: &TempDir) -> FakeLocation {
        FakeLocation {
            directory: temp.path().join("fakes"),
            header_import: "Greeter.h".to_string(),
        }
    }

    #[test]
    fn test_persist_writes_both_files() {
        let temp = TempDir::new().unwrap();
        let written = FileSystemFakePersister::new(false)
            .persist(&fake(), &location(&temp))
            .unwrap();

        assert_eq!(
            written,
            vec![
                temp.path().join("fakes/FakeGreeter.h"),
                temp.path().join("fakes/FakeGreeter.m"),
            ]
        );
        assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), "// header\n");
    }

    #[test]
    fn test_persist_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let location = location(&temp);
        std::fs::create_dir_all(&location.directory).unwrap();
        std::fs::write(location.directory.join("FakeGreeter.m"), "keep me").unwrap();

        let result = FileSystemFakePersister::new(false).persist(&fake(), &location);
        assert!(matches!(result, Err(PersistenceError::AlreadyExists(_))));
        assert!(!location.directory.join("FakeGreeter.h").exists());
        assert_eq!(
            std::fs::read_to_string(location.directory.join("FakeGreeter.m")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_failed_write_removes_created_header() {
        let temp = TempDir::new().unwrap();
        let location = location(&temp);
        // A directory where the implementation file should go makes that write fail
        std::fs::create_dir_all(location.directory.join("FakeGreeter.m")).unwrap();

        let result = FileSystemFakePersister::new(true).persist(&fake(), &location);
        assert!(matches!(result, Err(PersistenceError::Io { .. })));
        assert!(!location.directory.join("FakeGreeter.h").exists());
    }

    #[test]
    fn test_failed_write_keeps_existing_header() {
        let temp = TempDir::new().unwrap();
        let location = location(&temp);
        std::fs::create_dir_all(location.directory.join("FakeGreeter.m")).unwrap();
        std::fs::write(location.directory.join("FakeGreeter.h"), "old").unwrap();

        let result = FileSystemFakePersister::new(true).persist(&fake(), &location);
        assert!(matches!(result, Err(PersistenceError::Io { .. })));
        assert!(location.directory.join("FakeGreeter.h").exists());
    }

    #[test]
    fn test_persist_overwrites_when_allowed() {
        let temp = TempDir::new().unwrap();
        let location = location(&temp);
        std::fs::create_dir_all(&location.directory).unwrap();
        std::fs::write(location.directory.join("FakeGreeter.h"), "old").unwrap();

        FileSystemFakePersister::new(true)
            .persist(&fake(), &location)
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(location.directory.join("FakeGreeter.h")).unwrap(),
            "// header\n"
        );
    }
}
