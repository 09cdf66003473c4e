use serde::{Deserialize, Serialize};
use std::fmt;

/// A span of source text, as a byte offset plus a byte length.
///
/// Offsets are absolute within the document the text was taken from, so a
/// range can be used directly to patch that document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceRange {
    pub location: usize,
    pub length: usize,
}

impl SourceRange {
    pub fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Build a range from a start and an exclusive end offset
    pub fn from_bounds(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start must not be after end");
        Self {
            location: start,
            length: end.saturating_sub(start),
        }
    }

    /// An empty range sitting at `location`
    pub fn empty_at(location: usize) -> Self {
        Self {
            location,
            length: 0,
        }
    }

    /// Exclusive end offset, clamped to `usize::MAX`
    pub fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Exclusive end offset, or `None` when it does not fit in a `usize`
    pub fn checked_end(&self) -> Option<usize> {
        self.location.checked_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Smallest range covering both `self` and `other`
    pub fn envelope(self, other: Self) -> Self {
        Self::from_bounds(
            self.location.min(other.location),
            self.end().max(other.end()),
        )
    }

    /// Envelope of every range in the iterator, or `None` when it is empty
    pub fn envelope_of<I>(ranges: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        ranges.into_iter().reduce(Self::envelope)
    }

    /// Check if another range lies entirely within this one.
    /// Empty ranges on either boundary count as enclosed.
    pub fn encloses(&self, other: &SourceRange) -> bool {
        other.location >= self.location && other.end() <= self.end()
    }

    /// Move the range forward by `base` bytes
    pub fn shifted(self, base: usize) -> Self {
        Self {
            location: self.location + base,
            length: self.length,
        }
    }

    /// Slice the covered text out of `source`, if the range is in bounds
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.location..self.end())
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.location, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_covers_both() {
        let a = SourceRange::new(4, 3);
        let b = SourceRange::new(10, 5);
        assert_eq!(a.envelope(b), SourceRange::from_bounds(4, 15));
        assert_eq!(b.envelope(a), SourceRange::from_bounds(4, 15));
    }

    #[test]
    fn test_envelope_of_empty_iterator() {
        assert_eq!(SourceRange::envelope_of(Vec::new()), None);
        let ranges = vec![SourceRange::new(7, 1), SourceRange::new(2, 2)];
        assert_eq!(
            SourceRange::envelope_of(ranges),
            Some(SourceRange::from_bounds(2, 8))
        );
    }

    #[test]
    fn test_encloses_empty_range_at_end() {
        let outer = SourceRange::new(0, 10);
        assert!(outer.encloses(&SourceRange::empty_at(10)));
        assert!(outer.encloses(&SourceRange::new(3, 7)));
        assert!(!outer.encloses(&SourceRange::new(3, 8)));
    }

    #[test]
    fn test_end_at_usize_limit() {
        let range = SourceRange::new(usize::MAX, 1);
        assert_eq!(range.checked_end(), None);
        assert_eq!(range.end(), usize::MAX);
        assert_eq!(SourceRange::new(3, 4).checked_end(), Some(7));
    }

    #[test]
    fn test_slice_and_shift() {
        let source = "- (void)dealloc;";
        let range = SourceRange::new(8, 7);
        assert_eq!(range.slice(source), Some("dealloc"));
        assert_eq!(range.shifted(100), SourceRange::new(108, 7));
        assert_eq!(SourceRange::new(10, 40).slice(source), None);
    }
}
