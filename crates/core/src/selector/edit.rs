//! Structural edits. Each one validates its indices first and either returns
//! a complete new selector or an error; the receiver is never modified.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{ObjcSelector, Parameter, SelectorComponent};
use crate::error::EditError;
use crate::types::SourceRange;

/// Type given to the parameter of an inserted placeholder component
pub const PLACEHOLDER_TYPE: &str = "id";

/// A structural edit described as data, for hosts that queue or replay edits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SelectorEdit {
    Delete { index: usize },
    Insert { index: usize },
    Swap { index: usize, other_index: usize },
    Rename { index: usize, keyword: String },
}

impl fmt::Display for SelectorEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorEdit::Delete { index } => write!(f, "delete component {index}"),
            SelectorEdit::Insert { index } => write!(f, "insert component at {index}"),
            SelectorEdit::Swap { index, other_index } => {
                write!(f, "swap components {index} and {other_index}")
            }
            SelectorEdit::Rename { index, keyword } => {
                write!(f, "rename component {index} to `{keyword}`")
            }
        }
    }
}

impl ObjcSelector {
    /// Remove component `index` together with its parameter
    pub fn delete_component_at_index(&self, index: usize) -> Result<Self, EditError> {
        self.check_index(index)?;
        if self.components.len() == 1 {
            return Err(EditError::LastComponent);
        }

        let mut pairs = self.pairs();
        pairs.remove(index);
        Ok(Self::from_pairs(pairs, self.return_type.clone(), self.range))
    }

    /// Insert an empty argument-taking component at `index`, shifting later
    /// components right. The placeholder has an empty keyword and an `id`
    /// parameter named `argN`, ready to be filled in by the caller.
    ///
    /// Inserting into a unary selector (`init`) also turns the existing
    /// component into an argument-taking one with its own placeholder
    /// parameter, since a multi-part selector cannot contain a bare keyword.
    pub fn insert_component_at_index(&self, index: usize) -> Result<Self, EditError> {
        let len = self.components.len();
        if index > len {
            return Err(EditError::IndexOutOfBounds { index, len });
        }

        let location = match self.components.get(index) {
            Some(next) => next.range.location,
            None => self
                .components
                .iter()
                .map(|c| c.range.end())
                .max()
                .unwrap_or(self.range.end()),
        };

        let mut pairs = self.pairs();
        pairs.insert(
            index,
            (SelectorComponent::placeholder(SourceRange::empty_at(location)), None),
        );
        let mut used: HashSet<String> =
            self.parameters.iter().map(|p| p.name.clone()).collect();
        for (position, (component, parameter)) in pairs.iter_mut().enumerate() {
            if parameter.is_some() {
                continue;
            }
            let at = if component.keyword.is_empty() {
                component.range
            } else {
                SourceRange::empty_at(component.range.end())
            };
            component.takes_argument = true;
            *parameter = Some(placeholder_parameter(position, at, &mut used));
        }

        Ok(Self::from_pairs(pairs, self.return_type.clone(), self.range))
    }

    /// Exchange components `index` and `other_index`. Parameters travel with
    /// their components; keywords, types and the return type are unchanged.
    /// Swapping a component with itself yields an equal selector.
    pub fn swap_component_at_index(
        &self,
        index: usize,
        other_index: usize,
    ) -> Result<Self, EditError> {
        self.check_index(index)?;
        self.check_index(other_index)?;

        let mut pairs = self.pairs();
        pairs.swap(index, other_index);
        Ok(Self::from_pairs(pairs, self.return_type.clone(), self.range))
    }

    /// Give component `index` a new keyword. Argument-taking components may
    /// have an empty keyword; a unary selector's keyword must be a non-empty
    /// identifier.
    pub fn rename_component_at_index(
        &self,
        index: usize,
        keyword: &str,
    ) -> Result<Self, EditError> {
        self.check_index(index)?;

        let component = &self.components[index];
        let valid = if keyword.is_empty() {
            component.takes_argument
        } else {
            is_identifier(keyword)
        };
        if !valid {
            return Err(EditError::InvalidKeyword {
                keyword: keyword.to_string(),
            });
        }

        let mut pairs = self.pairs();
        pairs[index].0.keyword = keyword.to_string();
        Ok(Self::from_pairs(pairs, self.return_type.clone(), self.range))
    }

    pub fn apply_edit(&self, edit: &SelectorEdit) -> Result<Self, EditError> {
        match edit {
            SelectorEdit::Delete { index } => self.delete_component_at_index(*index),
            SelectorEdit::Insert { index } => self.insert_component_at_index(*index),
            SelectorEdit::Swap { index, other_index } => {
                self.swap_component_at_index(*index, *other_index)
            }
            SelectorEdit::Rename { index, keyword } => {
                self.rename_component_at_index(*index, keyword)
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        let len = self.components.len();
        if index >= len {
            return Err(EditError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }
}

/// Placeholder named `argN`, counting up from `position` past names in `used`
fn placeholder_parameter(
    position: usize,
    at: SourceRange,
    used: &mut HashSet<String>,
) -> Parameter {
    let name = (position..)
        .map(|n| format!("arg{n}"))
        .find(|name| !used.contains(name))
        .unwrap_or_default();
    used.insert(name.clone());
    Parameter::new(PLACEHOLDER_TYPE, name, at)
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::ObjcLexer;

    fn selector(source: &str) -> ObjcSelector {
        ObjcSelector::from_tokens(&ObjcLexer::new().tokenize(source, 0)).unwrap()
    }

    fn set_name_age() -> ObjcSelector {
        selector("- (void)setName:(NSString *)name age:(NSInteger)age;")
    }

    fn three_part() -> ObjcSelector {
        selector("- (BOOL)moveFrom:(NSInteger)from to:(NSInteger)to animated:(BOOL)animated;")
    }

    fn names(selector: &ObjcSelector) -> Vec<&str> {
        selector.parameters().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_delete_component_removes_parameter() {
        let original = three_part();
        let edited = original.delete_component_at_index(1).unwrap();

        assert_eq!(edited.components().len(), original.components().len() - 1);
        assert_eq!(edited.selector_string(), "moveFrom:animated:");
        assert_eq!(names(&edited), vec!["from", "animated"]);
        assert_eq!(edited.return_type(), "BOOL");
        assert_eq!(edited.range(), original.range());
    }

    #[test]
    fn test_delete_last_remaining_component_fails() {
        let unary = selector("- (void)dealloc;");
        assert_eq!(unary.delete_component_at_index(0), Err(EditError::LastComponent));

        let one_arg = set_name_age().delete_component_at_index(1).unwrap();
        assert_eq!(one_arg.selector_string(), "setName:");
        assert_eq!(one_arg.delete_component_at_index(0), Err(EditError::LastComponent));
    }

    #[test]
    fn test_delete_out_of_bounds() {
        assert_eq!(
            set_name_age().delete_component_at_index(2),
            Err(EditError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_insert_component_shifts_right() {
        let original = set_name_age();
        let edited = original.insert_component_at_index(1).unwrap();

        assert_eq!(edited.components().len(), 3);
        assert_eq!(edited.selector_string(), "setName::age:");
        assert_eq!(names(&edited), vec!["name", "arg1", "age"]);
        assert_eq!(edited.parameters()[1].type_name, PLACEHOLDER_TYPE);

        // The placeholder sits where the shifted component starts
        assert_eq!(
            edited.components()[1].range,
            SourceRange::empty_at(original.components()[1].range.location)
        );
    }

    #[test]
    fn test_insert_component_at_end() {
        let original = set_name_age();
        let edited = original.insert_component_at_index(2).unwrap();
        assert_eq!(edited.selector_string(), "setName:age::");
        assert_eq!(
            edited.components()[2].range,
            SourceRange::empty_at(original.components()[1].range.end())
        );
        assert!(edited.range().encloses(&edited.components()[2].range));
    }

    #[test]
    fn test_insert_into_unary_selector() {
        let edited = selector("- (instancetype)init;")
            .insert_component_at_index(0)
            .unwrap();
        assert_eq!(edited.selector_string(), ":init:");
        assert_eq!(edited.parameters().len(), 2);
        assert_eq!(names(&edited), vec!["arg0", "arg1"]);
    }

    #[test]
    fn test_insert_skips_taken_parameter_names() {
        let edited = selector("- (void)foo:(id)arg1 bar:(id)x;")
            .insert_component_at_index(1)
            .unwrap();
        assert_eq!(names(&edited), vec!["arg1", "arg2", "x"]);
        assert_eq!(
            edited.declaration(crate::types::MethodKind::Instance),
            "- (void)foo:(id)arg1 :(id)arg2 bar:(id)x"
        );

        let edited = selector("- (void)foo:(id)arg0;")
            .insert_component_at_index(0)
            .unwrap();
        assert_eq!(edited.selector_string(), ":foo:");
        assert_eq!(names(&edited), vec!["arg1", "arg0"]);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        assert_eq!(
            set_name_age().insert_component_at_index(3),
            Err(EditError::IndexOutOfBounds { index: 3, len: 2 })
        );
    }

    #[test]
    fn test_swap_moves_parameters_with_components() {
        let original = set_name_age();
        let swapped = original.swap_component_at_index(0, 1).unwrap();

        assert_eq!(swapped.selector_string(), "age:setName:");
        assert_eq!(names(&swapped), vec!["age", "name"]);
        assert_eq!(swapped.parameters()[1].type_name, "NSString *");
        assert_eq!(swapped.return_type(), original.return_type());
    }

    #[test]
    fn test_swap_is_its_own_inverse() {
        let original = three_part();
        let round_trip = original
            .swap_component_at_index(0, 2)
            .and_then(|s| s.swap_component_at_index(0, 2))
            .unwrap();
        assert_eq!(round_trip, original);
    }

    #[test]
    fn test_swap_with_itself_is_identity() {
        let original = three_part();
        assert_eq!(original.swap_component_at_index(1, 1).unwrap(), original);
    }

    #[test]
    fn test_swap_out_of_bounds_fails() {
        let original = set_name_age();
        let snapshot = original.clone();
        assert_eq!(
            original.swap_component_at_index(0, 5),
            Err(EditError::IndexOutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(
            original.swap_component_at_index(7, 0),
            Err(EditError::IndexOutOfBounds { index: 7, len: 2 })
        );
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_edits_leave_receiver_unchanged() {
        let original = three_part();
        let snapshot = original.clone();

        let _ = original.delete_component_at_index(0).unwrap();
        let _ = original.insert_component_at_index(1).unwrap();
        let _ = original.swap_component_at_index(0, 2).unwrap();
        let _ = original.rename_component_at_index(0, "slideFrom").unwrap();

        assert_eq!(original.components(), snapshot.components());
        assert_eq!(original.parameters(), snapshot.parameters());
        assert_eq!(original.return_type(), snapshot.return_type());
        assert_eq!(original.range(), snapshot.range());
    }

    #[test]
    fn test_rename_component() {
        let renamed = set_name_age().rename_component_at_index(1, "years").unwrap();
        assert_eq!(renamed.selector_string(), "setName:years:");
        assert_eq!(names(&renamed), vec!["name", "age"]);

        let emptied = set_name_age().rename_component_at_index(1, "").unwrap();
        assert_eq!(emptied.selector_string(), "setName::");
    }

    #[test]
    fn test_rename_rejects_invalid_keywords() {
        let unary = selector("- (void)dealloc;");
        assert_eq!(
            unary.rename_component_at_index(0, ""),
            Err(EditError::InvalidKeyword {
                keyword: String::new()
            })
        );
        assert!(matches!(
            set_name_age().rename_component_at_index(0, "set name"),
            Err(EditError::InvalidKeyword { .. })
        ));
        assert!(matches!(
            set_name_age().rename_component_at_index(4, "x"),
            Err(EditError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_apply_edit_matches_direct_calls() {
        let original = three_part();
        assert_eq!(
            original.apply_edit(&SelectorEdit::Swap {
                index: 0,
                other_index: 2
            }),
            original.swap_component_at_index(0, 2)
        );
        assert_eq!(
            original.apply_edit(&SelectorEdit::Delete { index: 9 }),
            Err(EditError::IndexOutOfBounds { index: 9, len: 3 })
        );
    }

    #[test]
    fn test_selector_edit_serialization() {
        let edit: SelectorEdit =
            serde_json::from_str(r#"{ "op": "rename", "index": 1, "keyword": "years" }"#).unwrap();
        assert_eq!(
            edit,
            SelectorEdit::Rename {
                index: 1,
                keyword: "years".to_string()
            }
        );
        assert_eq!(edit.to_string(), "rename component 1 to `years`");
    }
}
