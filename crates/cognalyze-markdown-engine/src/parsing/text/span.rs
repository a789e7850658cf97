use serde::Serialize;

/// A half-open range `[start, end)`.
///
/// Inline nodes use it for byte offsets into the formatted text; block nodes
/// use it for source line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start.
    pub start: usize,
    /// Exclusive end.
    pub end: usize,
}

impl Span {
    /// Span covering a single line index.
    #[must_use]
    pub fn line(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Returns the length. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `s` by this span, treated as byte offsets.
    ///
    /// Returns an empty string when the span is out of bounds or not on a
    /// char boundary rather than panicking.
    #[must_use]
    pub fn slice(self, s: &str) -> &str {
        s.get(self.start..self.end).unwrap_or("")
    }
}
