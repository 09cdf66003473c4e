//! Service implementations of the collaborator interfaces
//!
//! File-system and terminal backed defaults, used by the command-line
//! host. Editor integrations provide their own.

pub mod console_alerter;
pub mod file_document;
pub mod file_persister;
pub mod file_selection;
pub mod tracing_logger;

pub use console_alerter::ConsoleAlerter;
pub use file_document::FileDocumentProxy;
pub use file_persister::FileSystemFakePersister;
pub use file_selection::{FileSelection, LineRange};
pub use tracing_logger::TracingLogger;
