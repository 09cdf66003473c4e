use serde::{Deserialize, Serialize};
use std::fmt;

use super::range::SourceRange;

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// `[A-Za-z_$][A-Za-z0-9_$]*`
    Identifier,
    /// `@protocol`, `@end`, `@optional`, ...
    AtKeyword,
    Number,
    /// `"..."` or `@"..."`
    StringLiteral,
    /// `...` in variadic declarations
    Ellipsis,
    /// Any single punctuation character
    Punct,
}

/// A lexical unit: its text plus where it sits in the source document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub range: SourceRange,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, range: SourceRange) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }

    /// Shorthand for a single-character punctuation token at `location`
    pub fn punct(ch: char, location: usize) -> Self {
        Self::new(
            TokenKind::Punct,
            ch.to_string(),
            SourceRange::new(location, ch.len_utf8()),
        )
    }

    pub fn identifier(text: impl Into<String>, location: usize) -> Self {
        let text = text.into();
        let range = SourceRange::new(location, text.len());
        Self::new(TokenKind::Identifier, text, range)
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    /// Check if this is the punctuation token `ch`
    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punct
            && self.text.len() == ch.len_utf8()
            && self.text.starts_with(ch)
    }

    pub fn is_at_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::AtKeyword && self.text == keyword
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join token texts the way they were spelled: adjacent tokens are glued
/// together and any gap between two tokens collapses to a single space.
pub fn spell_tokens(tokens: &[Token]) -> String {
    let mut spelled = String::new();
    let mut previous_end: Option<usize> = None;
    for token in tokens {
        if let Some(end) = previous_end {
            if token.range.location > end {
                spelled.push(' ');
            }
        }
        spelled.push_str(&token.text);
        previous_end = Some(token.range.end());
    }
    spelled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punct_matching() {
        let colon = Token::punct(':', 3);
        assert!(colon.is_punct(':'));
        assert!(!colon.is_punct(';'));
        assert!(!colon.is_identifier());
        assert_eq!(colon.range, SourceRange::new(3, 1));
    }

    #[test]
    fn test_at_keyword_matching() {
        let optional = Token::new(TokenKind::AtKeyword, "@optional", SourceRange::new(0, 9));
        assert!(optional.is_at_keyword("@optional"));
        assert!(!optional.is_at_keyword("@required"));

        let spoofed = Token::new(TokenKind::StringLiteral, "@optional", SourceRange::new(0, 9));
        assert!(!spoofed.is_at_keyword("@optional"));
    }

    #[test]
    fn test_spell_tokens_keeps_spacing() {
        // "NSString *" vs "NSString*"
        let spaced = vec![Token::identifier("NSString", 0), Token::punct('*', 9)];
        let glued = vec![Token::identifier("NSString", 0), Token::punct('*', 8)];
        assert_eq!(spell_tokens(&spaced), "NSString *");
        assert_eq!(spell_tokens(&glued), "NSString*");
    }

    #[test]
    fn test_spell_tokens_collapses_wide_gaps() {
        let tokens = vec![Token::identifier("unsigned", 0), Token::identifier("int", 20)];
        assert_eq!(spell_tokens(&tokens), "unsigned int");
        assert_eq!(spell_tokens(&[]), "");
    }
}
