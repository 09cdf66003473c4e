use serde::{Deserialize, Serialize};

use super::range::SourceRange;

/// A textual replacement against the original document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: SourceRange,
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: SourceRange, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Apply the edit to `source`, or `None` when the range does not fit
    /// the text (out of bounds or not on a char boundary).
    pub fn apply(&self, source: &str) -> Option<String> {
        let prefix = source.get(..self.range.location)?;
        let suffix = source.get(self.range.checked_end()?..)?;
        let mut patched = String::with_capacity(prefix.len() + self.new_text.len() + suffix.len());
        patched.push_str(prefix);
        patched.push_str(&self.new_text);
        patched.push_str(suffix);
        Some(patched)
    }
}
