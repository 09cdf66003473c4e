//! Objective-C method selector model
//!
//! An [`ObjcSelector`] is a value: every structural edit returns a new
//! selector and leaves the receiver untouched, so callers can keep older
//! versions around (undo stacks, previews) without any synchronization.
//!
//! Invariants held by every constructed selector:
//! - there is at least one component;
//! - a selector with more than one component has only colon-terminated
//!   (argument-taking) components;
//! - there is exactly one parameter per argument-taking component, in order;
//! - `range` encloses the range of every component.

mod edit;
mod parse;
mod render;

pub use edit::{PLACEHOLDER_TYPE, SelectorEdit};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::types::SourceRange;

/// One keyword segment of a selector, e.g. `age:` in `setName:age:`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectorComponent {
    /// Keyword text without the trailing colon. May be empty for
    /// argument-taking components (`foo::` has an empty second keyword).
    pub keyword: String,
    /// Whether the component ends with a colon and takes an argument
    pub takes_argument: bool,
    pub range: SourceRange,
}

impl SelectorComponent {
    pub fn new(keyword: impl Into<String>, takes_argument: bool, range: SourceRange) -> Self {
        Self {
            keyword: keyword.into(),
            takes_argument,
            range,
        }
    }

    /// An empty argument-taking component, used as an insertion scaffold
    pub fn placeholder(range: SourceRange) -> Self {
        Self::new("", true, range)
    }

    /// The component as it appears in a selector string (`age:` or `init`)
    pub fn spelling(&self) -> String {
        if self.takes_argument {
            format!("{}:", self.keyword)
        } else {
            self.keyword.clone()
        }
    }
}

/// The declared type and local name bound to an argument-taking component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Type spelling as written between the parentheses, e.g. `NSString *`
    pub type_name: String,
    pub name: String,
    pub range: SourceRange,
}

impl Parameter {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, range: SourceRange) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            range,
        }
    }
}

/// A parsed Objective-C method selector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SelectorParts")]
pub struct ObjcSelector {
    components: Vec<SelectorComponent>,
    parameters: Vec<Parameter>,
    return_type: String,
    range: SourceRange,
}

/// Unvalidated selector fields, as found in serialized form
#[derive(Deserialize)]
struct SelectorParts {
    components: Vec<SelectorComponent>,
    parameters: Vec<Parameter>,
    return_type: String,
    range: SourceRange,
}

impl TryFrom<SelectorParts> for ObjcSelector {
    type Error = ParseError;

    fn try_from(parts: SelectorParts) -> Result<Self, Self::Error> {
        ObjcSelector::from_parts(parts.components, parts.parameters, parts.return_type, parts.range)
    }
}

impl ObjcSelector {
    /// Build a selector from pre-parsed parts, checking every invariant
    pub fn from_parts(
        components: Vec<SelectorComponent>,
        parameters: Vec<Parameter>,
        return_type: impl Into<String>,
        range: SourceRange,
    ) -> Result<Self, ParseError> {
        if components.is_empty() {
            return Err(ParseError::NoComponents);
        }

        if components.len() > 1 {
            if let Some(bare) = components.iter().find(|c| !c.takes_argument) {
                return Err(ParseError::BareComponentInKeywordSelector {
                    keyword: bare.keyword.clone(),
                });
            }
        }

        let argument_count = components.iter().filter(|c| c.takes_argument).count();
        if argument_count != parameters.len() {
            return Err(ParseError::ParameterCountMismatch {
                components: argument_count,
                parameters: parameters.len(),
            });
        }

        let ranges = std::iter::once(range)
            .chain(components.iter().map(|c| c.range))
            .chain(parameters.iter().map(|p| p.range));
        for checked in ranges {
            if checked.checked_end().is_none() {
                return Err(ParseError::RangeOverflow {
                    location: checked.location,
                    length: checked.length,
                });
            }
        }

        if let Some(outside) = components.iter().find(|c| !range.encloses(&c.range)) {
            return Err(ParseError::ComponentOutsideRange {
                keyword: outside.keyword.clone(),
                range: outside.range,
            });
        }

        Ok(Self {
            components,
            parameters,
            return_type: return_type.into(),
            range,
        })
    }

    /// Rebuild from component/parameter pairs that already satisfy the
    /// invariants (used by the edit operations).
    fn from_pairs(
        pairs: Vec<(SelectorComponent, Option<Parameter>)>,
        return_type: String,
        range: SourceRange,
    ) -> Self {
        let (components, parameters): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        let selector = Self {
            components,
            parameters: parameters.into_iter().flatten().collect(),
            return_type,
            range,
        };
        debug_assert!(
            Self::from_parts(
                selector.components.clone(),
                selector.parameters.clone(),
                selector.return_type.clone(),
                selector.range,
            )
            .is_ok(),
            "edit produced an invalid selector"
        );
        selector
    }

    /// Pair every component with its parameter (if it takes one)
    fn pairs(&self) -> Vec<(SelectorComponent, Option<Parameter>)> {
        let mut parameters = self.parameters.iter().cloned();
        self.components
            .iter()
            .map(|component| {
                let parameter = if component.takes_argument {
                    parameters.next()
                } else {
                    None
                };
                (component.clone(), parameter)
            })
            .collect()
    }

    pub fn components(&self) -> &[SelectorComponent] {
        &self.components
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn range(&self) -> SourceRange {
        self.range
    }

    /// A selector without arguments, such as `init` or `dealloc`
    pub fn is_unary(&self) -> bool {
        self.parameters.is_empty()
    }

    /// The parameter bound to component `index`, if that component takes one
    pub fn parameter_for_component(&self, index: usize) -> Option<&Parameter> {
        let component = self.components.get(index)?;
        if !component.takes_argument {
            return None;
        }
        let position = self.components[..index]
            .iter()
            .filter(|c| c.takes_argument)
            .count();
        self.parameters.get(position)
    }
}
