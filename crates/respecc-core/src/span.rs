//! Source locations attached to AST nodes and diagnostics.
//!
//! The external parser fills these in; builders and tests may use
//! [`Span::default`] when no source text exists.

use serde::{Deserialize, Serialize};

/// A position in source text (1-based line and column plus byte offset).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
        }
    }

    #[must_use]
    pub const fn with_offset(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    const fn precedes(self, other: Self) -> bool {
        self.line < other.line || (self.line == other.line && self.column < other.column)
    }
}

/// A half-open range of source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    #[must_use]
    pub const fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Creates a span from byte offsets only.
    #[must_use]
    pub const fn from_range(start: usize, end: usize) -> Self {
        Self {
            start: Location::with_offset(0, 0, start),
            end: Location::with_offset(0, 0, end),
        }
    }

    /// Creates a span covering a single line range.
    #[must_use]
    pub const fn on_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            start: Location::new(line, start_column),
            end: Location::new(line, end_column),
        }
    }

    /// Merges two spans into a single span covering both.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let start = if self.start.precedes(other.start) {
            self.start
        } else {
            other.start
        };
        let end = if other.end.precedes(self.end) {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start.line, self.start.column)
    }
}
