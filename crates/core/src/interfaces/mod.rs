//! Collaborator interfaces of the generate-fake action
//!
//! The action never talks to an editor, a terminal or a file system
//! directly. Hosts plug in implementations of these traits; the defaults
//! live in [`crate::services`].

pub mod alerter;
pub mod document;
pub mod logger;
pub mod persister;
pub mod selection;
pub mod tokenizer;

pub use alerter::Alerter;
pub use document::{FakeLocation, SourceCodeDocumentProxy, SourceDocument};
pub use logger::{ActionLogger, Severity};
pub use persister::FakeProtocolPersister;
pub use selection::{SelectedText, SelectedTextProxy};
pub use tokenizer::Tokenizer;
