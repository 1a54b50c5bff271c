//! Selection — the caret plus an optional selected span.
//!
//! A `Selection` is a pair of char offsets: the `anchor` stays put and the
//! `head` is the caret. When they are equal nothing is selected. This is the
//! same anchor/head model a GUI text area uses for shift-selection, and it
//! lets Find place the caret at the *start* of a match while still selecting
//! the whole match (anchor at the end, head at the start).
//!
//! The selection never owns the document; anything that can shrink the text
//! calls [`Selection::clamp`] afterwards.

use std::ops::Range;

/// Caret and selection, as char offsets into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    anchor: usize,
    head: usize,
}

impl Selection {
    /// A collapsed selection: the caret at `offset`, nothing selected.
    #[must_use]
    pub const fn point(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// A selection from `anchor` to `head`; the caret ends up at `head`.
    #[must_use]
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Select `start..end` with the caret on `start`.
    #[must_use]
    pub const fn span_from_start(start: usize, end: usize) -> Self {
        Self {
            anchor: end,
            head: start,
        }
    }

    /// The caret offset.
    #[inline]
    #[must_use]
    pub const fn caret(self) -> usize {
        self.head
    }

    /// The selected span, ordered.
    #[must_use]
    pub const fn range(self) -> Range<usize> {
        if self.anchor <= self.head {
            self.anchor..self.head
        } else {
            self.head..self.anchor
        }
    }

    /// True when nothing is selected.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.anchor == self.head
    }

    /// Pull both ends back into `0..=len`.
    #[must_use]
    pub fn clamp(self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            head: self.head.min(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_empty() {
        let sel = Selection::point(4);
        assert!(sel.is_empty());
        assert_eq!(sel.caret(), 4);
        assert_eq!(sel.range(), 4..4);
    }

    #[test]
    fn backward_selection_orders_range() {
        let sel = Selection::new(9, 2);
        assert_eq!(sel.caret(), 2);
        assert_eq!(sel.range(), 2..9);
        assert!(!sel.is_empty());
    }

    #[test]
    fn span_from_start_puts_caret_first() {
        let sel = Selection::span_from_start(3, 6);
        assert_eq!(sel.caret(), 3);
        assert_eq!(sel.range(), 3..6);
    }

    #[test]
    fn clamp_pulls_both_ends() {
        assert_eq!(Selection::new(2, 10).clamp(5), Selection::new(2, 5));
        assert_eq!(Selection::new(8, 10).clamp(5), Selection::point(5));
        assert_eq!(Selection::new(1, 3).clamp(5), Selection::new(1, 3));
    }
}
