//! Text produced from a selector: its name, a declaration and the patch
//! that writes that declaration back into the document.

use super::ObjcSelector;
use crate::types::{MethodKind, TextEdit};

impl ObjcSelector {
    /// The selector name, e.g. `setName:age:` or `init`
    pub fn selector_string(&self) -> String {
        self.components.iter().map(|c| c.spelling()).collect()
    }

    /// Render the declaration without its terminator:
    /// `- (void)setName:(NSString *)name age:(NSInteger)age`
    pub fn declaration(&self, kind: MethodKind) -> String {
        let mut parameters = self.parameters.iter();
        let parts: Vec<String> = self
            .components
            .iter()
            .map(|component| {
                let parameter = if component.takes_argument {
                    parameters.next()
                } else {
                    None
                };
                match parameter {
                    Some(parameter) => format!(
                        "{}:({}){}",
                        component.keyword, parameter.type_name, parameter.name
                    ),
                    None => component.spelling(),
                }
            })
            .collect();

        format!("{} ({}){}", kind.marker(), self.return_type, parts.join(" "))
    }

    /// Patch replacing the declaration this selector was parsed from with
    /// its current rendering. Trailing attributes and the `;` lie outside
    /// the range and are kept.
    pub fn replacement_edit(&self, kind: MethodKind) -> TextEdit {
        TextEdit::new(self.range, self.declaration(kind))
    }
}
