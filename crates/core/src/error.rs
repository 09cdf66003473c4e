use std::io;
use std::path::PathBuf;

use crate::types::SourceRange;

/// Errors raised while turning tokens into an `ObjcSelector`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("nothing to parse: the token sequence is empty")]
    EmptyInput,

    #[error("no return type found before the selector")]
    MissingReturnType,

    #[error("no selector name found at {range}")]
    MissingSelector { range: SourceRange },

    #[error("expected a parenthesized parameter type after `{keyword}:` at {range}")]
    MissingParameterType { keyword: String, range: SourceRange },

    #[error("expected a parameter name after the type of `{keyword}:` at {range}")]
    MissingParameterName { keyword: String, range: SourceRange },

    #[error("unbalanced parentheses starting at {range}")]
    UnbalancedParens { range: SourceRange },

    #[error("unexpected token `{text}` at {range}")]
    UnexpectedToken { text: String, range: SourceRange },

    #[error("a selector needs at least one component")]
    NoComponents,

    #[error("{components} argument-taking components but {parameters} parameters")]
    ParameterCountMismatch { components: usize, parameters: usize },

    #[error("component `{keyword}` must end with a colon in a multi-part selector")]
    BareComponentInKeywordSelector { keyword: String },

    #[error("range starting at {location} with length {length} overflows")]
    RangeOverflow { location: usize, length: usize },

    #[error("component `{keyword}` at {range} lies outside the selector range")]
    ComponentOutsideRange { keyword: String, range: SourceRange },
}

/// Errors raised by structural edits on an `ObjcSelector`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("component index {index} is out of bounds for a selector with {len} components")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("cannot delete the only component of a selector")]
    LastComponent,

    #[error("`{keyword}` is not a valid keyword for this component")]
    InvalidKeyword { keyword: String },
}

/// Errors raised while writing a generated fake
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("refusing to overwrite existing file {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur during fakesmith operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Nothing is selected")]
    EmptySelection,

    #[error("No protocol declaration found in the selection")]
    NoProtocolFound,

    #[error("No method declaration found at the requested location")]
    NoMethodFound,

    #[error("No current source document")]
    NoDocument,
}

impl Error {
    /// One-line message suitable for an alert shown to the user
    pub fn user_message(&self) -> String {
        match self {
            Error::EmptySelection => {
                "Select an Objective-C protocol declaration to generate a fake.".to_string()
            }
            Error::NoProtocolFound => {
                "The selection does not contain an @protocol ... @end declaration.".to_string()
            }
            Error::NoMethodFound => "No method declaration found there.".to_string(),
            Error::NoDocument => "Open a source file before generating a fake.".to_string(),
            Error::Parse(e) => format!("Could not parse the selected protocol: {e}"),
            Error::Edit(e) => format!("Could not edit the selector: {e}"),
            Error::Persistence(e) => format!("Could not save the generated fake: {e}"),
            other => format!("Fake generation failed: {other}"),
        }
    }
}

/// Result type alias for fakesmith operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_converts() {
        let err: Error = ParseError::EmptyInput.into();
        assert!(matches!(err, Error::Parse(ParseError::EmptyInput)));
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_user_message_is_single_line() {
        let errors = vec![
            Error::EmptySelection,
            Error::NoProtocolFound,
            Error::Edit(EditError::LastComponent),
            Error::Persistence(PersistenceError::AlreadyExists(PathBuf::from("FakeFoo.h"))),
        ];
        for err in errors {
            let message = err.user_message();
            assert!(!message.is_empty());
            assert!(!message.contains('\n'), "multi-line message: {message}");
        }
    }
}
