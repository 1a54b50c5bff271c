//! Search — literal forward search and the Find/Find Next memory.
//!
//! Searches are plain substring matches over the whole document, so a
//! pattern may span a line break. There is no wrap-around: Find looks from
//! the caret to the end of the text and stops.
//!
//! # Find / Find Next flow
//!
//! 1. Find(query) searches from the caret (inclusive) and records the query
//!    and the origin: the match start, or the caret when nothing matched.
//! 2. Find Next searches from `origin + 1`, so it can never land on the
//!    occurrence the previous search returned.

use crate::document::Document;

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// A search hit: start offset and length, both in chars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub len: usize,
}

impl Match {
    /// One past the last char of the match.
    #[inline]
    #[must_use]
    pub const fn end(self) -> usize {
        self.start + self.len
    }
}

/// What a Find or Find Next did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The caret moved to this match and selected it.
    Found(Match),
    /// The query does not occur after the search origin.
    NotFound,
    /// Nothing to search for (empty query, or Find Next before any Find).
    Idle,
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// The remembered query and origin used by Find Next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    origin: usize,
}

impl SearchState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: String::new(),
            origin: 0,
        }
    }

    /// The last query. Empty until the first Find.
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Where the last search landed (or started, if it found nothing).
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> usize {
        self.origin
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Record a search.
    pub fn remember(&mut self, query: &str, origin: usize) {
        query.clone_into(&mut self.query);
        self.origin = origin;
    }

    /// Move the origin after a Find Next.
    pub const fn advance_to(&mut self, origin: usize) {
        self.origin = origin;
    }
}

// ---------------------------------------------------------------------------
// Search functions
// ---------------------------------------------------------------------------

/// Find the first occurrence of `pattern` starting at char offset `from`
/// (inclusive). Returns `None` for an empty pattern or an offset past the end.
#[must_use]
pub fn find_forward(doc: &Document, pattern: &str, from: usize) -> Option<Match> {
    if pattern.is_empty() || from > doc.len_chars() {
        return None;
    }

    let tail = doc.rope().slice(from..).to_string();
    let byte_idx = tail.find(pattern)?;
    Some(Match {
        start: from + byte_to_char(&tail, byte_idx),
        len: pattern.chars().count(),
    })
}

/// Find every non-overlapping occurrence of `pattern`, in document order.
#[must_use]
pub fn find_all(doc: &Document, pattern: &str) -> Vec<Match> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let text = doc.contents();
    let pat_chars = pattern.chars().count();
    let mut matches = Vec::new();
    // Walk byte offsets while tracking the char offset incrementally.
    let mut last_byte = 0;
    let mut last_char = 0;
    for (byte_idx, _) in text.match_indices(pattern) {
        last_char += byte_to_char(&text[last_byte..], byte_idx - last_byte);
        last_byte = byte_idx;
        matches.push(Match {
            start: last_char,
            len: pat_chars,
        });
    }
    matches
}

/// Convert a byte offset to a char offset in a string.
fn byte_to_char(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn m(start: usize, len: usize) -> Match {
        Match { start, len }
    }

    // -- SearchState -------------------------------------------------------

    #[test]
    fn state_starts_empty() {
        let st = SearchState::new();
        assert!(st.is_empty());
        assert_eq!(st.query(), "");
        assert_eq!(st.origin(), 0);
    }

    #[test]
    fn state_remember_and_advance() {
        let mut st = SearchState::new();
        st.remember("foo", 7);
        assert_eq!(st.query(), "foo");
        assert_eq!(st.origin(), 7);
        st.advance_to(12);
        assert_eq!(st.query(), "foo");
        assert_eq!(st.origin(), 12);
    }

    // -- find_forward -------------------------------------------------------

    #[test]
    fn forward_from_start() {
        let doc = Document::from_text("hello world hello");
        assert_eq!(find_forward(&doc, "hello", 0), Some(m(0, 5)));
    }

    #[test]
    fn forward_is_inclusive_of_from() {
        let doc = Document::from_text("hello world hello");
        assert_eq!(find_forward(&doc, "hello", 12), Some(m(12, 5)));
        assert_eq!(find_forward(&doc, "hello", 1), Some(m(12, 5)));
    }

    #[test]
    fn forward_does_not_wrap() {
        let doc = Document::from_text("hello world");
        assert_eq!(find_forward(&doc, "hello", 1), None);
    }

    #[test]
    fn forward_spans_lines() {
        let doc = Document::from_text("end\nstart");
        assert_eq!(find_forward(&doc, "d\ns", 0), Some(m(2, 3)));
    }

    #[test]
    fn forward_reports_char_offsets() {
        let doc = Document::from_text("日本語 café café");
        assert_eq!(find_forward(&doc, "café", 0), Some(m(4, 4)));
        assert_eq!(find_forward(&doc, "café", 5), Some(m(9, 4)));
    }

    #[test]
    fn forward_edge_inputs() {
        let doc = Document::from_text("abc");
        assert_eq!(find_forward(&doc, "", 0), None);
        assert_eq!(find_forward(&doc, "a", 4), None);
        assert_eq!(find_forward(&doc, "c", 3), None);
        assert_eq!(find_forward(&Document::new(), "a", 0), None);
    }

    // -- find_all -----------------------------------------------------------

    #[test]
    fn all_matches_in_order() {
        let doc = Document::from_text("banana");
        assert_eq!(find_all(&doc, "a"), vec![m(1, 1), m(3, 1), m(5, 1)]);
        assert_eq!(find_all(&doc, "ana"), vec![m(1, 3)]);
    }

    #[test]
    fn all_matches_unicode() {
        let doc = Document::from_text("é-é\né");
        assert_eq!(find_all(&doc, "é"), vec![m(0, 1), m(2, 1), m(4, 1)]);
    }

    #[test]
    fn all_matches_empty_pattern() {
        let doc = Document::from_text("abc");
        assert!(find_all(&doc, "").is_empty());
    }

    #[test]
    fn match_end() {
        assert_eq!(m(3, 4).end(), 7);
    }
}
