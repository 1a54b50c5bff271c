//! Caret coordinates.
//!
//! The session stores the caret as a char offset into the document. This
//! module holds the `(line, col)` view of that offset, used by the status bar
//! and by Go To.
//!
//! All coordinates here are **0-indexed**. Columns count Unicode scalar values
//! (chars), not bytes or grapheme clusters, matching how `ropey` indexes text.
//! The 1-indexed `Ln 3, Col 7` form only appears in [`Position::status_label`]
//! and the `Display` impl.

use std::fmt;

/// A position in a document: (line, column), both 0-indexed.
///
/// `col` is the char offset from the start of the line. For the line
/// `"café\n"`, column 3 is `'é'` and column 4 is the newline.
///
/// # Ordering
///
/// Positions are ordered lexicographically: line first, then column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// The origin — line 0, column 0.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The status bar text for this position: `Ln 1, Col 1` at the origin.
    #[must_use]
    pub fn status_label(self) -> String {
        format!("Ln {}, Col {}", self.line + 1, self.col + 1)
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
