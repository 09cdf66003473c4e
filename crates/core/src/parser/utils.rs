use crate::types::SourceRange;
use tree_sitter::Node;

/// Byte range of `node`, shifted by `base` into document coordinates
pub fn node_to_range(node: &Node, base: usize) -> SourceRange {
    SourceRange::from_bounds(node.start_byte(), node.end_byte()).shifted(base)
}

/// Text of the first `identifier` child, which names protocols and classes
pub fn first_identifier_text<'a>(node: &Node, source: &'a [u8]) -> Option<&'a str> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|child| child.kind() == "identifier")
        .and_then(|child| child.utf8_text(source).ok())
}
