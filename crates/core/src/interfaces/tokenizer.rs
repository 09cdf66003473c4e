//! Tokenizer interface
//!
//! Turns declaration text into the token stream the selector parser reads.

use crate::types::Token;

/// Trait for splitting source text into tokens with absolute ranges
pub trait Tokenizer: Send + Sync {
    /// Tokenize `source`, whose first byte sits at `base_offset` in the
    /// document it came from
    fn tokenize(&self, source: &str, base_offset: usize) -> Vec<Token>;
}
