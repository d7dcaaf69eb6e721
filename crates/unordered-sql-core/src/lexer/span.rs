//! Source location tracking for tokens and AST nodes.

use serde::Serialize;

/// A half-open byte range into the source text.
///
/// Spans never own text; they are only meaningful relative to the exact
/// string they were produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a span from a start offset and a length.
    #[must_use]
    pub const fn with_len(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merges two spans into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Returns true if a cursor at `offset` touches the span.
    ///
    /// Both ends are inclusive: a cursor placed right after the last byte
    /// is still considered inside.
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Returns the text covered by the span.
    ///
    /// Returns an empty string if the span does not fit `text`.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or_default()
    }

    /// Returns the text from the start of the span up to `cursor`.
    ///
    /// Returns `None` when the cursor lies outside the span.
    #[must_use]
    pub fn text_before<'a>(&self, text: &'a str, cursor: usize) -> Option<&'a str> {
        if !self.contains(cursor) {
            return None;
        }
        text.get(self.start..cursor)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
