//! Objective-C tokenizer
//!
//! Splits declaration text into [`Token`]s carrying absolute source ranges.
//! Only the lexical classes needed to read method and protocol declarations
//! are distinguished; everything else becomes single-character punctuation.
//! Whitespace, comments and preprocessor lines never produce tokens.

use crate::interfaces::Tokenizer;
use crate::types::{SourceRange, Token, TokenKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct ObjcLexer;

impl ObjcLexer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize `source`, whose first byte sits at `base_offset` in the
    /// document it was taken from.
    pub fn tokenize(&self, source: &str, base_offset: usize) -> Vec<Token> {
        Scanner::new(source, base_offset).run()
    }
}

impl Tokenizer for ObjcLexer {
    fn tokenize(&self, source: &str, base_offset: usize) -> Vec<Token> {
        ObjcLexer::tokenize(self, source, base_offset)
    }
}

struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    base: usize,
    at_line_start: bool,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, base: usize) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            base,
            at_line_start: true,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some(ch) = self.peek_char() {
            match ch {
                '\n' => {
                    self.at_line_start = true;
                    self.pos += 1;
                }
                c if c.is_whitespace() => self.pos += c.len_utf8(),
                '/' if self.peek_byte(1) == Some(b'/') => self.skip_line(),
                '/' if self.peek_byte(1) == Some(b'*') => self.skip_block_comment(),
                '#' if self.at_line_start => self.skip_directive(),
                _ => {
                    self.at_line_start = false;
                    self.lex_token(ch);
                }
            }
        }
        self.tokens
    }

    fn lex_token(&mut self, ch: char) {
        let start = self.pos;
        let kind = match ch {
            c if is_ident_start(c) => {
                self.eat_while(is_ident_continue);
                TokenKind::Identifier
            }
            c if c.is_ascii_digit() => {
                self.eat_while(|c| c.is_ascii_alphanumeric() || c == '.');
                TokenKind::Number
            }
            '"' => {
                self.eat_string();
                TokenKind::StringLiteral
            }
            '@' if self.peek_byte(1) == Some(b'"') => {
                self.pos += 1;
                self.eat_string();
                TokenKind::StringLiteral
            }
            '@' if self
                .source
                .get(self.pos + 1..)
                .and_then(|rest| rest.chars().next())
                .is_some_and(is_ident_start) =>
            {
                self.pos += 1;
                self.eat_while(is_ident_continue);
                TokenKind::AtKeyword
            }
            '.' if self.source[self.pos..].starts_with("...") => {
                self.pos += 3;
                TokenKind::Ellipsis
            }
            c => {
                self.pos += c.len_utf8();
                TokenKind::Punct
            }
        };

        let text = &self.source[start..self.pos];
        let range = SourceRange::from_bounds(start, self.pos).shifted(self.base);
        self.tokens.push(Token::new(kind, text, range));
    }

    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek_char() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Consume a `"..."` literal, honouring backslash escapes. An unterminated
    /// literal runs to the end of the line.
    fn eat_string(&mut self) {
        self.pos += 1;
        while let Some(c) = self.peek_char() {
            match c {
                '\\' => {
                    self.pos += 1;
                    if let Some(escaped) = self.peek_char() {
                        self.pos += escaped.len_utf8();
                    }
                }
                '"' => {
                    self.pos += 1;
                    return;
                }
                '\n' => return,
                c => self.pos += c.len_utf8(),
            }
        }
    }

    fn skip_line(&mut self) {
        match self.source[self.pos..].find('\n') {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    fn skip_block_comment(&mut self) {
        match self.source[self.pos + 2..].find("*/") {
            Some(offset) => self.pos += offset + 4,
            None => self.pos = self.source.len(),
        }
    }

    /// Skip a preprocessor directive, following `\` line continuations
    fn skip_directive(&mut self) {
        loop {
            self.skip_line();
            let continued = self.source[..self.pos].trim_end_matches('\r').ends_with('\\');
            if !continued || self.pos >= self.source.len() {
                break;
            }
            self.pos += 1;
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_byte(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_method_declaration() {
        let tokens = ObjcLexer::new().tokenize("- (void)doThing:(NSString *)thing;", 0);
        assert_eq!(
            texts(&tokens),
            vec![
                "-", "(", "void", ")", "doThing", ":", "(", "NSString", "*", ")", "thing", ";"
            ]
        );
        assert_eq!(tokens[4].kind, TokenKind::Identifier);
        assert_eq!(tokens[4].range, SourceRange::new(8, 7));
    }

    #[test]
    fn test_ranges_are_absolute() {
        let tokens = ObjcLexer::new().tokenize("init;", 120);
        assert_eq!(tokens[0].range, SourceRange::new(120, 4));
        assert_eq!(tokens[1].range, SourceRange::new(124, 1));
    }

    #[test]
    fn test_skips_comments_and_directives() {
        let source = "#import <Foundation/Foundation.h>\n\
                      // a comment\n\
                      /* block\n comment */ @protocol Greeter\n";
        let tokens = ObjcLexer::new().tokenize(source, 0);
        assert_eq!(texts(&tokens), vec!["@protocol", "Greeter"]);
        assert_eq!(tokens[0].kind, TokenKind::AtKeyword);
    }

    #[test]
    fn test_directive_line_continuation() {
        let source = "#define GREETING \\\n  hello\nworld";
        let tokens = ObjcLexer::new().tokenize(source, 0);
        assert_eq!(texts(&tokens), vec!["world"]);
    }

    #[test]
    fn test_hash_inside_line_is_punct() {
        let tokens = ObjcLexer::new().tokenize("a # b", 0);
        assert_eq!(texts(&tokens), vec!["a", "#", "b"]);
    }

    #[test]
    fn test_string_literals_and_ellipsis() {
        let tokens = ObjcLexer::new().tokenize(r#"@"hi \"there\"" "x" ..."#, 0);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, r#"@"hi \"there\"""#);
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[2].kind, TokenKind::Ellipsis);
    }

    #[test]
    fn test_numbers_and_unicode_punct() {
        let tokens = ObjcLexer::new().tokenize("42 0x1F é", 0);
        assert_eq!(texts(&tokens), vec!["42", "0x1F", "é"]);
        assert_eq!(tokens[2].kind, TokenKind::Punct);
        assert_eq!(tokens[2].range.length, 2);
    }
}
