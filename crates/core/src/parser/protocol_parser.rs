use std::sync::Arc;

use tree_sitter::{Node, Parser, Tree};

use super::protocol_detector::ProtocolDetector;
use super::utils::{first_identifier_text, node_to_range};
use crate::{
    error::{Error, Result},
    interfaces::Tokenizer,
    lexer::ObjcLexer,
    selector::ObjcSelector,
    types::{DeclaredMethod, ObjcProtocol, ProtocolMethod, Token},
};

/// Splits Objective-C source into protocols and method declarations.
///
/// tree-sitter finds the declarations; each one is then tokenized and read
/// by [`ObjcSelector::parse_declaration`], which stays the only selector
/// parser.
pub struct ProtocolParser {
    parser: Parser,
    tokenizer: Arc<dyn Tokenizer>,
}

impl ProtocolParser {
    pub fn new() -> Result<Self> {
        Self::with_tokenizer(Arc::new(ObjcLexer::new()))
    }

    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_objc::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser, tokenizer })
    }

    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::TreeSitterError("Failed to parse source code".to_string()))
    }

    /// Parse the first protocol with a body in `text`, which starts at
    /// `base_offset` in its document. Fails as a whole if any member does.
    pub fn parse_protocol(&mut self, text: &str, base_offset: usize) -> Result<ObjcProtocol> {
        let tree = self.parse(text)?;
        let detector = ProtocolDetector::new(text);
        let node = detector
            .protocols(&tree)
            .into_iter()
            .next()
            .ok_or(Error::NoProtocolFound)?;

        let range = node_to_range(&node, base_offset);
        let tokens = self
            .tokenizer
            .tokenize(&text[node.start_byte()..node.end_byte()], range.location);
        let name = first_identifier_text(&node, text.as_bytes())
            .map(str::to_string)
            .or_else(|| protocol_name(&tokens))
            .ok_or(Error::NoProtocolFound)?;
        let sections = SectionMarkers::from_tokens(&tokens);

        let mut methods = Vec::new();
        for method in detector.methods(node) {
            let declared = self.declared_method(text, &method, base_offset)?;
            methods.push(ProtocolMethod {
                kind: declared.kind,
                optional: sections.is_optional_at(declared.range.location),
                selector: declared.selector,
            });
        }

        tracing::debug!(
            "Parsed protocol {} with {} methods at {}",
            name,
            methods.len(),
            range
        );
        Ok(ObjcProtocol {
            conformances: conformances(&tokens),
            name,
            methods,
            range,
        })
    }

    /// Every method declared or defined in a whole file. Declarations that
    /// do not parse are skipped.
    pub fn method_declarations(&mut self, text: &str) -> Result<Vec<DeclaredMethod>> {
        let tree = self.parse(text)?;
        let detector = ProtocolDetector::new(text);

        let mut methods = Vec::new();
        for node in detector.methods(tree.root_node()) {
            match self.declared_method(text, &node, 0) {
                Ok(method) => methods.push(method),
                Err(e) => tracing::warn!(
                    "Skipping method declaration at {}: {}",
                    node_to_range(&node, 0),
                    e
                ),
            }
        }
        Ok(methods)
    }

    /// The method declaration spanning byte `offset` of `text`
    pub fn method_at(&mut self, text: &str, offset: usize) -> Result<DeclaredMethod> {
        let tree = self.parse(text)?;
        let detector = ProtocolDetector::new(text);
        let node = detector
            .method_at(&tree, offset)
            .ok_or(Error::NoMethodFound)?;
        self.declared_method(text, &node, 0)
    }

    fn declared_method(&self, text: &str, node: &Node, base_offset: usize) -> Result<DeclaredMethod> {
        let range = node_to_range(node, base_offset);
        let tokens = self
            .tokenizer
            .tokenize(&text[node.start_byte()..node.end_byte()], range.location);
        let (kind, selector) = ObjcSelector::parse_declaration(&tokens)?;
        Ok(DeclaredMethod {
            kind,
            selector,
            range,
        })
    }
}

/// Offsets of the `@optional` / `@required` markers of one protocol
struct SectionMarkers {
    markers: Vec<(usize, bool)>,
}

impl SectionMarkers {
    fn from_tokens(tokens: &[Token]) -> Self {
        let markers = tokens
            .iter()
            .filter_map(|t| {
                if t.is_at_keyword("@optional") {
                    Some((t.range.location, true))
                } else if t.is_at_keyword("@required") {
                    Some((t.range.location, false))
                } else {
                    None
                }
            })
            .collect();
        Self { markers }
    }

    /// Methods are required until the first marker before them says otherwise
    fn is_optional_at(&self, offset: usize) -> bool {
        self.markers
            .iter()
            .take_while(|(location, _)| *location < offset)
            .last()
            .is_some_and(|(_, optional)| *optional)
    }
}

fn protocol_name(tokens: &[Token]) -> Option<String> {
    let position = tokens.iter().position(|t| t.is_at_keyword("@protocol"))?;
    tokens
        .get(position + 1)
        .filter(|t| t.is_identifier())
        .map(|t| t.text.clone())
}

/// Protocols listed in `<...>` right after the protocol name
fn conformances(tokens: &[Token]) -> Vec<String> {
    let Some(position) = tokens.iter().position(|t| t.is_at_keyword("@protocol")) else {
        return Vec::new();
    };
    let mut rest = tokens[position + 1..].iter().skip(1);
    if !rest.next().is_some_and(|t| t.is_punct('<')) {
        return Vec::new();
    }
    rest.take_while(|t| !t.is_punct('>'))
        .filter(|t| t.is_identifier())
        .map(|t| t.text.clone())
        .collect()
}
