//! fakesmith - Objective-C selector editing and fake generation
//!
//! This crate provides functionality to:
//! - Model a method selector (components, parameters, return type, source
//!   range) and edit it structurally without mutating the original
//! - Segment a protocol declaration into its methods
//! - Generate a recording fake (test double) for a protocol and persist it
//!   through pluggable collaborators
pub mod action;
pub mod config;
pub mod error;
pub mod fake;
pub mod interfaces;
pub mod lexer;
pub mod parser;
pub mod selector;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{EditError, Error, ParseError, PersistenceError, Result};
pub use types::*;

// Re-export main API components
pub use action::{GenerateFakeAction, PersistedFake};
pub use config::Config;
pub use fake::{FakeGenerator, GeneratedFake};
pub use lexer::ObjcLexer;
pub use parser::ProtocolParser;
pub use selector::{ObjcSelector, Parameter, SelectorComponent, SelectorEdit};
