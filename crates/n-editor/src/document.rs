//! Document — the text being edited.
//!
//! A `Document` wraps a [`ropey::Rope`] with the handful of editing operations
//! a notepad needs, char-offset/`Position` conversion, file I/O and metadata
//! (bound path, modified flag, detected line ending).
//!
//! # Design choices
//!
//! - **Offsets are char offsets**, not byte offsets. Offset 3 of `"café"` is
//!   `'é'`. Byte offsets never leak into the public API.
//!
//! - **Lines break on `\n` only.** The rope is built without ropey's
//!   `unicode_lines`/`cr_lines` features, so the line count is the number of
//!   `\n` characters plus one. A `\r\n` file keeps its `\r` at the end of each
//!   line.
//!
//! - **Files are read and written verbatim.** The detected [`LineEnding`] is
//!   informational (status bar); saving never converts anything.
//!
//! - **Saves are atomic.** Content goes to a temporary file next to the
//!   target which is then renamed over it, so a failed save never leaves a
//!   half-written file behind.
//!
//! - **Out-of-range offsets are clamped** to the document length instead of
//!   panicking. Callers hold offsets across edits and the session re-clamps.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use ropey::{Rope, RopeSlice};
use crate::position::Position;
use crate::search;

// ---------------------------------------------------------------------------
// Line ending detection
// ---------------------------------------------------------------------------

/// Line ending style of a document, detected from the first line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\n` — Unix, macOS, Linux. Also the default for new documents.
    Lf,
    /// `\r\n` — Windows, DOS.
    CrLf,
}

impl LineEnding {
    /// Detect the line ending of `text` from its first `\n`.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(i) if i > 0 && text.as_bytes()[i - 1] == b'\r' => Self::CrLf,
            _ => Self::Lf,
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => f.write_str("LF"),
            Self::CrLf => f.write_str("CRLF"),
        }
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The text content of the session, plus its file binding.
pub struct Document {
    rope: Rope,
    path: Option<PathBuf>,
    modified: bool,
    line_ending: LineEnding,
}

impl Document {
    // -- Construction -------------------------------------------------------

    /// An empty, unbound document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            path: None,
            modified: false,
            line_ending: LineEnding::Lf,
        }
    }

    /// An unbound document holding `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            line_ending: LineEnding::detect(text),
            rope: Rope::from_str(text),
            path: None,
            modified: false,
        }
    }

    /// Load a document from a file and bind it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut doc = Self::from_text(&text);
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    // -- Text access --------------------------------------------------------

    /// The underlying rope.
    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total number of lines. An empty document has 1 line, and a document
    /// ending in `\n` has a trailing empty line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total byte count (what a save writes).
    #[inline]
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// A line by 0-indexed number, including its trailing `\n`.
    #[must_use]
    pub fn line(&self, line: usize) -> Option<RopeSlice<'_>> {
        (line < self.rope.len_lines()).then(|| self.rope.line(line))
    }

    /// The whole text as a `String`.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    /// The text in a char range, or `None` if the range is out of bounds or
    /// reversed.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Option<String> {
        if range.start > range.end || range.end > self.len_chars() {
            return None;
        }
        Some(self.rope.slice(range).to_string())
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Char offset of the first character of a 0-indexed line.
    #[must_use]
    pub fn line_to_char(&self, line: usize) -> Option<usize> {
        (line < self.rope.len_lines()).then(|| self.rope.line_to_char(line))
    }

    /// Convert a char offset to `(line, col)`. An offset equal to the length
    /// maps to the position just past the last character.
    #[must_use]
    pub fn char_to_position(&self, char_idx: usize) -> Option<Position> {
        if char_idx > self.rope.len_chars() {
            return None;
        }
        let line = self.rope.char_to_line(char_idx);
        Some(Position::new(line, char_idx - self.rope.line_to_char(line)))
    }

    /// Clamp an offset into `0..=len_chars()`.
    #[inline]
    #[must_use]
    pub fn clamp(&self, char_idx: usize) -> usize {
        char_idx.min(self.rope.len_chars())
    }

    // -- Editing ------------------------------------------------------------

    /// Insert text at a char offset. Returns the number of chars inserted.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let idx = self.clamp(char_idx);
        self.rope.insert(idx, text);
        self.modified = true;
        text.chars().count()
    }

    /// Remove a char range. Empty (or fully out-of-range) ranges are no-ops.
    pub fn remove(&mut self, range: Range<usize>) {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end);
        if start >= end {
            return;
        }
        self.rope.remove(start..end);
        self.modified = true;
    }

    /// Replace a char range with `text`. Returns the number of chars inserted.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> usize {
        let start = self.clamp(range.start.min(range.end));
        self.remove(start..range.end);
        self.insert(start, text)
    }

    /// Replace every occurrence of `find` with `with` across the whole text.
    /// Returns the number of occurrences replaced. An empty `find` matches
    /// nothing.
    pub fn replace_all(&mut self, find: &str, with: &str) -> usize {
        let matches = search::find_all(self, find);
        // Back to front, so earlier offsets stay valid.
        for m in matches.iter().rev() {
            self.rope.remove(m.start..m.end());
            self.rope.insert(m.start, with);
        }
        if !matches.is_empty() {
            self.modified = true;
        }
        matches.len()
    }

    // -- Metadata -----------------------------------------------------------

    /// The file this document is bound to, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[inline]
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    /// The bound file's name, for the window title.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// True if the text changed since it was created, loaded or saved.
    #[inline]
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    #[inline]
    pub const fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// The line ending detected when the text was loaded.
    #[inline]
    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    // -- File I/O -----------------------------------------------------------

    /// Write the text verbatim to `path` through a temporary file in the same
    /// directory, then rename it over the target. An existing target keeps
    /// its permissions; a new file gets the usual `0o666` minus the umask.
    ///
    /// Does not touch the binding or the modified flag; the session decides
    /// what a successful write means.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created or written,
    /// or the rename fails. The target is untouched in that case.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            self.rope.write_to(&mut writer)?;
            writer.flush()?;
        }
        if let Ok(meta) = fs::metadata(path) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("lines", &self.line_count())
            .field("chars", &self.len_chars())
            .field("modified", &self.modified)
            .field("line_ending", &self.line_ending)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
