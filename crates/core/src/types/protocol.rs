use serde::{Deserialize, Serialize};
use std::fmt;

use super::range::SourceRange;
use crate::selector::ObjcSelector;

/// Whether a method is declared with `-` (instance) or `+` (class)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MethodKind {
    #[default]
    Instance,
    Class,
}

impl MethodKind {
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "-" => Some(Self::Instance),
            "+" => Some(Self::Class),
            _ => None,
        }
    }

    pub fn marker(&self) -> char {
        match self {
            Self::Instance => '-',
            Self::Class => '+',
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// One method declared by a protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolMethod {
    pub kind: MethodKind,
    pub selector: ObjcSelector,
    /// Declared inside an `@optional` section
    pub optional: bool,
}

/// A method declaration found anywhere in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredMethod {
    pub kind: MethodKind,
    pub selector: ObjcSelector,
    /// The whole declaration, terminator or body included
    pub range: SourceRange,
}

/// A parsed `@protocol ... @end` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjcProtocol {
    pub name: String,
    /// Protocols listed in `<...>` after the name
    pub conformances: Vec<String>,
    pub methods: Vec<ProtocolMethod>,
    pub range: SourceRange,
}

impl ObjcProtocol {
    pub fn instance_methods(&self) -> impl Iterator<Item = &ProtocolMethod> {
        self.methods
            .iter()
            .filter(|method| method.kind == MethodKind::Instance)
    }

    pub fn class_methods(&self) -> impl Iterator<Item = &ProtocolMethod> {
        self.methods
            .iter()
            .filter(|method| method.kind == MethodKind::Class)
    }

    /// Find a method by its selector string (e.g. `setName:age:`)
    pub fn method(&self, selector: &str) -> Option<&ProtocolMethod> {
        self.methods
            .iter()
            .find(|method| method.selector.selector_string() == selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::ObjcLexer;

    fn method(source: &str, optional: bool) -> ProtocolMethod {
        let tokens = ObjcLexer::new().tokenize(source, 0);
        let (kind, selector) = ObjcSelector::parse_declaration(&tokens).unwrap();
        ProtocolMethod {
            kind,
            selector,
            optional,
        }
    }

    #[test]
    fn test_method_kind_markers() {
        assert_eq!(MethodKind::from_marker("+"), Some(MethodKind::Class));
        assert_eq!(MethodKind::from_marker("-"), Some(MethodKind::Instance));
        assert_eq!(MethodKind::from_marker("*"), None);
        assert_eq!(MethodKind::Class.to_string(), "+");
    }

    #[test]
    fn test_protocol_method_lookup() {
        let protocol = ObjcProtocol {
            name: "Greeter".to_string(),
            conformances: vec!["NSObject".to_string()],
            methods: vec![
                method("- (void)greet:(NSString *)name;", false),
                method("+ (instancetype)sharedGreeter;", false),
                method("- (void)wave;", true),
            ],
            range: SourceRange::new(0, 100),
        };

        assert_eq!(protocol.instance_methods().count(), 2);
        assert_eq!(protocol.class_methods().count(), 1);
        assert!(protocol.method("wave").is_some_and(|m| m.optional));
        assert!(protocol.method("greet").is_none());
    }
}
