//! Selection taken from a file on disk
//!
//! Stands in for an editor selection: either the whole file or an
//! inclusive range of lines.

use std::path::PathBuf;

use crate::interfaces::{SelectedText, SelectedTextProxy};

/// Inclusive, 0-based line range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

pub struct FileSelection {
    path: PathBuf,
    lines: Option<LineRange>,
}

impl FileSelection {
    pub fn new(path: impl Into<PathBuf>, lines: Option<LineRange>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    fn select(&self, source: &str) -> Option<SelectedText> {
        let Some(lines) = self.lines else {
            return Some(SelectedText::new(source, 0));
        };
        if lines.start > lines.end {
            return None;
        }

        let mut offset = 0;
        let mut start = None;
        let mut end = source.len();
        for (index, line) in source.split_inclusive('\n').enumerate() {
            if index == lines.start {
                start = Some(offset);
            }
            offset += line.len();
            if index == lines.end {
                end = offset;
                break;
            }
        }

        let start = start?;
        Some(SelectedText::new(&source[start..end], start))
    }
}

impl SelectedTextProxy for FileSelection {
    fn current_selection(&self) -> Option<SelectedText> {
        let source = match std::fs::read_to_string(&self.path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), e);
                return None;
            }
        };

        self.select(&source).filter(|selection| !selection.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SOURCE: &str = "line0\nline1\nline2\nline3\n";

    fn selection(lines: Option<LineRange>) -> Option<SelectedText> {
        FileSelection::new("unused.h", lines).select(SOURCE)
    }

    #[test]
    fn test_whole_file() {
        assert_eq!(selection(None), Some(SelectedText::new(SOURCE, 0)));
    }

    #[test]
    fn test_line_range() {
        let selected = selection(Some(LineRange::new(1, 2))).unwrap();
        assert_eq!(selected.text, "line1\nline2\n");
        assert_eq!(selected.offset, 6);
    }

    #[test]
    fn test_range_past_end_is_clamped() {
        let selected = selection(Some(LineRange::new(3, 10))).unwrap();
        assert_eq!(selected.text, "line3\n");
        assert_eq!(selection(Some(LineRange::new(9, 10))), None);
        assert_eq!(selection(Some(LineRange::new(2, 1))), None);
    }

    #[test]
    fn test_missing_or_blank_file_selects_nothing() {
        let temp = TempDir::new().unwrap();
        let missing = FileSelection::new(temp.path().join("Missing.h"), None);
        assert_eq!(missing.current_selection(), None);

        let blank = temp.path().join("Blank.h");
        std::fs::write(&blank, "  \n\n").unwrap();
        assert_eq!(FileSelection::new(&blank, None).current_selection(), None);
    }
}
