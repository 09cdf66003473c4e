//! Text selection interface
//!
//! Abstracts where the selected source text comes from: an editor
//! selection, a line range of a file, or text injected by a test.

use serde::{Deserialize, Serialize};

/// Selected source text and where it starts in its document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedText {
    pub text: String,
    /// Byte offset of the first selected byte within the document
    pub offset: usize,
}

impl SelectedText {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    /// A selection of nothing but whitespace counts as empty
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Trait for reading the current selection
pub trait SelectedTextProxy: Send + Sync {
    /// The current selection, or `None` when nothing is selected
    fn current_selection(&self) -> Option<SelectedText>;
}
