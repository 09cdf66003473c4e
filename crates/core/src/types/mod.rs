pub mod edit;
pub mod protocol;
pub mod range;
pub mod token;

// Re-export commonly used types
pub use edit::TextEdit;
pub use protocol::{DeclaredMethod, MethodKind, ObjcProtocol, ProtocolMethod};
pub use range::SourceRange;
pub use token::{Token, TokenKind, spell_tokens};
