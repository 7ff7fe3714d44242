use std::ops::Range;

/// A byte range `[start, end)` into the parsed source text.
///
/// Every element records the span its source text occupies, markers
/// included, so slicing the source with consecutive sibling spans reproduces
/// the text those siblings were parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `source` with this span.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or not on char boundaries, which
    /// only happens when the span was produced from a different source.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}
