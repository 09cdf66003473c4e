//! Locates protocol and method declaration nodes in an Objective-C tree

use tree_sitter::{Node, Tree};

const METHOD_KINDS: [&str; 2] = ["method_declaration", "method_definition"];

pub struct ProtocolDetector<'s> {
    source: &'s [u8],
}

impl<'s> ProtocolDetector<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source: source.as_bytes(),
        }
    }

    /// Every `@protocol` with a body, in document order. Forward
    /// declarations (`@protocol Foo;`) are skipped.
    pub fn protocols<'t>(&self, tree: &'t Tree) -> Vec<Node<'t>> {
        let mut found = Vec::new();
        self.visit(tree.root_node(), &mut |node| {
            if node.kind() != "protocol_declaration" {
                return true;
            }
            if self.has_body(&node) {
                found.push(node);
            }
            false
        });
        found
    }

    /// Every method declaration or definition below `node`
    pub fn methods<'t>(&self, node: Node<'t>) -> Vec<Node<'t>> {
        let mut found = Vec::new();
        self.visit(node, &mut |node| {
            if METHOD_KINDS.contains(&node.kind()) {
                found.push(node);
                return false;
            }
            true
        });
        found
    }

    /// The innermost method node whose span contains byte `offset`
    pub fn method_at<'t>(&self, tree: &'t Tree, offset: usize) -> Option<Node<'t>> {
        self.methods(tree.root_node())
            .into_iter()
            .find(|node| node.start_byte() <= offset && offset < node.end_byte())
    }

    fn has_body(&self, node: &Node) -> bool {
        node.utf8_text(self.source)
            .map(|text| text.contains("@end"))
            .unwrap_or(false)
    }

    /// Pre-order walk; `enter` returns whether to descend into a node
    fn visit<'t>(&self, node: Node<'t>, enter: &mut impl FnMut(Node<'t>) -> bool) {
        if !enter(node) {
            return;
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
        for child in children {
            self.visit(child, enter);
        }
    }
}
