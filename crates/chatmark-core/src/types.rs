//! Core types for chatmark

use serde::{Deserialize, Serialize};

/// Half-open range of source lines, `start..end`, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineRange {
    /// First line of the range
    pub start: usize,
    /// One past the last line of the range
    pub end: usize,
}

impl LineRange {
    /// Create a new range covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one line.
    pub fn single(line: usize) -> Self {
        Self::new(line, line + 1)
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range covers no lines.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `line` falls inside the range.
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line < self.end
    }
}

/// A value paired with the source lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Located<T> {
    /// The value itself
    pub value: T,
    /// Source lines consumed to produce it
    pub lines: LineRange,
}

impl<T> Located<T> {
    /// Pair a value with its line range.
    pub fn new(value: T, lines: LineRange) -> Self {
        Self { value, lines }
    }

    /// Drop the location, keeping the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transform the value, keeping the location.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located {
            value: f(self.value),
            lines: self.lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_range() {
        let range = LineRange::new(2, 5);
        assert_eq!(range.len(), 3);
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
        assert!(!range.is_empty());

        let single = LineRange::single(7);
        assert_eq!(single, LineRange::new(7, 8));
        assert!(LineRange::new(3, 3).is_empty());
    }

    #[test]
    fn test_located_map() {
        let located = Located::new(21, LineRange::single(0));
        let doubled = located.map(|n| n * 2);
        assert_eq!(doubled.value, 42);
        assert_eq!(doubled.lines, LineRange::single(0));
        assert_eq!(doubled.into_inner(), 42);
    }
}
