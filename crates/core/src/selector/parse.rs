//! Construction of an [`ObjcSelector`] from a method declaration's tokens.
//!
//! Accepted shape:
//!
//! ```text
//! ('-' | '+')? '(' type ')' keyword                               trailer
//! ('-' | '+')? '(' type ')' (keyword? ':' '(' type ')' name)+     trailer
//! trailer := (identifier ('(' ... ')')? | ',' '...')* (';' | '{' ...)?
//! ```
//!
//! The trailer covers attribute macros (`NS_SWIFT_NAME(...)`,
//! `__attribute__((...))`), variadic markers and the terminator. It is read
//! but kept out of the selector range, so replacing that range leaves the
//! trailer in place.

use super::{ObjcSelector, Parameter, SelectorComponent};
use crate::error::ParseError;
use crate::types::{MethodKind, SourceRange, Token, TokenKind, spell_tokens};

type Pair = (SelectorComponent, Option<Parameter>);

impl ObjcSelector {
    /// Parse one method declaration, e.g. `- (void)doThing:(NSString *)thing;`
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, ParseError> {
        Self::parse_declaration(tokens).map(|(_, selector)| selector)
    }

    /// Like [`ObjcSelector::from_tokens`], also reporting whether the method
    /// was declared with `-` or `+`. A missing marker reads as `-`.
    pub fn parse_declaration(tokens: &[Token]) -> Result<(MethodKind, Self), ParseError> {
        let first = tokens.first().ok_or(ParseError::EmptyInput)?;
        let mut cursor = Cursor::new(tokens);

        let kind = match MethodKind::from_marker(&first.text) {
            Some(kind) if first.kind == TokenKind::Punct => {
                cursor.advance();
                kind
            }
            _ => MethodKind::Instance,
        };

        if !cursor.peek().is_some_and(|t| t.is_punct('(')) {
            return Err(ParseError::MissingReturnType);
        }
        let (return_tokens, _) = cursor.parenthesized()?;
        if return_tokens.is_empty() {
            return Err(ParseError::MissingReturnType);
        }
        let return_type = spell_tokens(return_tokens);

        let pairs = parse_components(&mut cursor)?;
        let declaration = &tokens[..cursor.pos];
        skip_trailer(&mut cursor)?;

        let range = SourceRange::envelope_of(declaration.iter().map(|t| t.range))
            .ok_or(ParseError::EmptyInput)?;
        let (components, parameters): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        let selector = Self::from_parts(
            components,
            parameters.into_iter().flatten().collect(),
            return_type,
            range,
        )?;

        tracing::debug!(
            "Parsed selector {} ({} parameters) at {}",
            selector.selector_string(),
            selector.parameters().len(),
            range
        );
        Ok((kind, selector))
    }
}

fn parse_components(cursor: &mut Cursor<'_>) -> Result<Vec<Pair>, ParseError> {
    let first = match cursor.peek() {
        Some(token) if token.is_identifier() => token,
        Some(token) => return Err(ParseError::MissingSelector { range: token.range }),
        None => {
            return Err(ParseError::MissingSelector {
                range: cursor.here(),
            });
        }
    };
    cursor.advance();

    // Unary selector: `init`, `dealloc`, ...
    if !cursor.peek().is_some_and(|t| t.is_punct(':')) {
        return Ok(vec![(
            SelectorComponent::new(first.text.as_str(), false, first.range),
            None,
        )]);
    }

    let mut pairs = Vec::new();
    let mut keyword = Some(first);
    loop {
        let (component, parameter) = parse_argument(cursor, keyword)?;
        pairs.push((component, Some(parameter)));

        keyword = match (cursor.peek(), cursor.peek_nth(1)) {
            (Some(token), Some(next)) if token.is_identifier() && next.is_punct(':') => {
                cursor.advance();
                Some(token)
            }
            (Some(token), _) if token.is_punct(':') => None,
            _ => break,
        };
    }

    Ok(pairs)
}

/// Parse `':' '(' type ')' name` for the keyword already consumed
fn parse_argument(
    cursor: &mut Cursor<'_>,
    keyword: Option<&Token>,
) -> Result<(SelectorComponent, Parameter), ParseError> {
    let keyword_text = keyword.map(|t| t.text.clone()).unwrap_or_default();

    let colon = match cursor.peek() {
        Some(token) if token.is_punct(':') => token,
        Some(token) => {
            return Err(ParseError::UnexpectedToken {
                text: token.text.clone(),
                range: token.range,
            });
        }
        None => {
            return Err(ParseError::MissingSelector {
                range: cursor.here(),
            });
        }
    };
    cursor.advance();

    let open = match cursor.peek() {
        Some(token) if token.is_punct('(') => token,
        other => {
            return Err(ParseError::MissingParameterType {
                keyword: keyword_text,
                range: other.map_or_else(|| cursor.here(), |t| t.range),
            });
        }
    };
    let (type_tokens, _) = cursor.parenthesized()?;
    if type_tokens.is_empty() {
        return Err(ParseError::MissingParameterType {
            keyword: keyword_text,
            range: open.range,
        });
    }

    let name = match cursor.peek() {
        Some(token) if token.is_identifier() => token,
        other => {
            return Err(ParseError::MissingParameterName {
                keyword: keyword_text,
                range: other.map_or_else(|| cursor.here(), |t| t.range),
            });
        }
    };
    cursor.advance();

    let start = keyword.map_or(colon.range.location, |t| t.range.location);
    let component = SelectorComponent::new(
        keyword_text,
        true,
        SourceRange::from_bounds(start, name.range.end()),
    );
    let parameter = Parameter::new(
        spell_tokens(type_tokens),
        name.text.as_str(),
        SourceRange::from_bounds(open.range.location, name.range.end()),
    );
    Ok((component, parameter))
}

fn skip_trailer(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    while let Some(token) = cursor.peek() {
        if token.is_punct(';') {
            cursor.advance();
            break;
        }
        // A method body follows; it is not part of the declaration.
        if token.is_punct('{') {
            return Ok(());
        }
        if token.is_identifier() {
            cursor.advance();
            if cursor.peek().is_some_and(|t| t.is_punct('(')) {
                cursor.parenthesized()?;
            }
            continue;
        }
        if token.is_punct(',')
            && cursor
                .peek_nth(1)
                .is_some_and(|t| t.kind == TokenKind::Ellipsis)
        {
            cursor.advance();
            cursor.advance();
            continue;
        }
        return Err(ParseError::UnexpectedToken {
            text: token.text.clone(),
            range: token.range,
        });
    }

    match cursor.peek() {
        Some(extra) => Err(ParseError::UnexpectedToken {
            text: extra.text.clone(),
            range: extra.range,
        }),
        None => Ok(()),
    }
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Range to blame when the input ends early: empty, just past the last
    /// consumed token.
    fn here(&self) -> SourceRange {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(last) => SourceRange::empty_at(last.range.end()),
            None => SourceRange::default(),
        }
    }

    /// Consume a balanced `( ... )` group starting at the current token and
    /// return the tokens between the outer parentheses plus the closing one.
    fn parenthesized(&mut self) -> Result<(&'a [Token], &'a Token), ParseError> {
        let open = match self.peek() {
            Some(token) if token.is_punct('(') => token,
            Some(token) => {
                return Err(ParseError::UnexpectedToken {
                    text: token.text.clone(),
                    range: token.range,
                });
            }
            None => {
                return Err(ParseError::UnbalancedParens { range: self.here() });
            }
        };
        self.advance();

        let inner_start = self.pos;
        let mut depth = 1usize;
        while let Some(token) = self.peek() {
            self.advance();
            if token.is_punct('(') {
                depth += 1;
            } else if token.is_punct(')') {
                depth -= 1;
                if depth == 0 {
                    return Ok((&self.tokens[inner_start..self.pos - 1], token));
                }
            }
        }

        Err(ParseError::UnbalancedParens { range: open.range })
    }
}
