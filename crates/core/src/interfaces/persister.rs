//! Fake persistence interface

use std::path::PathBuf;

use super::document::FakeLocation;
use crate::error::PersistenceError;
use crate::fake::GeneratedFake;

/// Trait for writing a generated fake out
pub trait FakeProtocolPersister: Send + Sync {
    /// Write `fake` at `location`, returning the paths written
    fn persist(
        &self,
        fake: &GeneratedFake,
        location: &FakeLocation,
    ) -> Result<Vec<PathBuf>, PersistenceError>;
}
