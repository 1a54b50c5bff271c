//! Editor session — one document, its caret and everything that acts on it.
//!
//! A `Session` owns the [`Document`], the [`Selection`] (whose head is the
//! caret), the optional file binding (kept on the document), the Find/Find
//! Next memory and the display preferences. Every menu command ends up as
//! one method call here.
//!
//! Nothing in this module prompts or draws. Methods that can fail return
//! [`EditorError`] with the session left exactly as it was; methods whose
//! "failure" is a normal outcome (no match, nothing selected) say so in their
//! return value. The command table in [`crate::command`] turns both into
//! dialogs through the [`Host`](crate::host::Host) traits.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

use crate::clipboard::{Clipboard, Register};
use crate::document::Document;
use crate::error::{EditorError, FileAction};
use crate::position::Position;
use crate::prefs::{DisplayPrefs, Font};
use crate::search::{self, SearchOutcome, SearchState};
use crate::selection::Selection;

/// Window title of an unbound document, and prefix of a bound one.
pub const APP_TITLE: &str = "Notepad";

/// `strftime` pattern of Time/Date, e.g. `Mon Oct 19 14:03:12 +02:00 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Result of [`Session::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saved {
    /// Written to the bound path.
    Written(PathBuf),
    /// No binding yet: the caller has to ask for a path and use
    /// [`Session::save_as`].
    NeedsPath,
}

/// The editor state behind one notepad window.
pub struct Session {
    doc: Document,
    selection: Selection,
    search: SearchState,
    prefs: DisplayPrefs,
    clipboard: Box<dyn Clipboard>,
}

impl Session {
    // -- Construction -------------------------------------------------------

    /// An empty session with default preferences and an in-memory clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefs(DisplayPrefs::default())
    }

    #[must_use]
    pub fn with_prefs(prefs: DisplayPrefs) -> Self {
        Self {
            doc: Document::new(),
            selection: Selection::default(),
            search: SearchState::new(),
            prefs,
            clipboard: Box::new(Register::new()),
        }
    }

    /// Swap in another clipboard (the shell's system clipboard).
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// A session whose document holds `text`, caret at 0. Unbound.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut session = Self::new();
        session.doc = Document::from_text(text);
        session
    }

    // -- Accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.doc
    }

    #[inline]
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Caret offset in chars.
    #[inline]
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.selection.caret()
    }

    /// Caret as 0-indexed `(line, col)`.
    #[must_use]
    pub fn caret_position(&self) -> Position {
        self.doc
            .char_to_position(self.caret())
            .unwrap_or(Position::ZERO)
    }

    /// The File Binding.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.doc.path()
    }

    #[inline]
    #[must_use]
    pub const fn search_state(&self) -> &SearchState {
        &self.search
    }

    #[inline]
    #[must_use]
    pub const fn prefs(&self) -> &DisplayPrefs {
        &self.prefs
    }

    /// `Notepad` or `Notepad - name.txt`.
    #[must_use]
    pub fn title(&self) -> String {
        self.doc.file_name().map_or_else(
            || APP_TITLE.to_string(),
            |name| format!("{APP_TITLE} - {name}"),
        )
    }

    /// `Ln 3, Col 7`, or `None` while the status bar is hidden.
    #[must_use]
    pub fn status_text(&self) -> Option<String> {
        self.prefs
            .status_bar
            .then(|| self.caret_position().status_label())
    }

    /// The currently selected text (empty when nothing is selected).
    #[must_use]
    pub fn selected_text(&self) -> String {
        self.doc.slice(self.selection.range()).unwrap_or_default()
    }

    // -- File commands ------------------------------------------------------

    /// New: empty document, no binding, caret at 0. The search memory and
    /// preferences survive.
    pub fn new_document(&mut self) {
        self.doc = Document::new();
        self.selection = Selection::point(0);
        log::info!("new document");
    }

    /// Open: replace the document with the contents of `path` and bind it.
    ///
    /// # Errors
    ///
    /// [`EditorError::Io`] if the file cannot be read as UTF-8 text. The
    /// current document and binding are untouched.
    pub fn open(&mut self, path: &Path) -> Result<(), EditorError> {
        let doc = Document::from_file(path).map_err(|source| {
            log::warn!("open {} failed: {source}", path.display());
            EditorError::io(FileAction::Open, path, source)
        })?;
        self.doc = doc;
        self.doc.set_path(absolute(path));
        self.selection = Selection::point(0);
        log::info!(
            "opened {} ({} lines, {} bytes)",
            path.display(),
            self.doc.line_count(),
            self.doc.len_bytes()
        );
        Ok(())
    }

    /// Save: write to the bound path, or report that a path is needed.
    ///
    /// # Errors
    ///
    /// [`EditorError::Io`] if writing fails. The document is unaffected.
    pub fn save(&mut self) -> Result<Saved, EditorError> {
        let Some(path) = self.doc.path().map(Path::to_path_buf) else {
            return Ok(Saved::NeedsPath);
        };
        self.save_as(&path)?;
        Ok(Saved::Written(path))
    }

    /// Save As: write to `path` and bind it.
    ///
    /// # Errors
    ///
    /// [`EditorError::Io`] if writing fails. Binding and document are
    /// unaffected.
    pub fn save_as(&mut self, path: &Path) -> Result<(), EditorError> {
        self.doc.write_to(path).map_err(|source| {
            log::warn!("save {} failed: {source}", path.display());
            EditorError::io(FileAction::Save, path, source)
        })?;
        self.doc.set_path(absolute(path));
        self.doc.mark_saved();
        log::info!("saved {} ({} bytes)", path.display(), self.doc.len_bytes());
        Ok(())
    }

    // -- Text surface -------------------------------------------------------

    /// Type `text`: it replaces the selection and the caret ends after it.
    pub fn insert_text(&mut self, text: &str) {
        let range = self.selection.range();
        let inserted = self.doc.replace(range.clone(), text);
        self.selection = Selection::point(range.start + inserted);
    }

    /// Move the caret, dropping any selection. Clamped to the document.
    pub fn set_caret(&mut self, offset: usize) {
        self.selection = Selection::point(self.doc.clamp(offset));
    }

    /// Select from `anchor` to `head` (the caret). Clamped to the document.
    pub fn select(&mut self, anchor: usize, head: usize) {
        self.selection = Selection::new(anchor, head).clamp(self.doc.len_chars());
    }

    // -- Edit commands ------------------------------------------------------

    /// Copy the selection to the clipboard. Returns `false` (and leaves the
    /// clipboard alone) when nothing is selected.
    pub fn copy(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.clipboard.set(self.selected_text());
        true
    }

    /// Copy, then delete the selection.
    pub fn cut(&mut self) -> bool {
        if !self.copy() {
            return false;
        }
        self.delete_selection();
        true
    }

    /// Replace the selection with the clipboard text. Returns `false` when
    /// the clipboard is empty.
    pub fn paste(&mut self) -> bool {
        match self.clipboard.get() {
            Some(text) if !text.is_empty() => {
                self.insert_text(&text);
                true
            }
            _ => false,
        }
    }

    /// Remove the selection; the caret stays where the text was.
    pub fn delete_selection(&mut self) {
        let range = self.selection.range();
        self.doc.remove(range.clone());
        self.selection = Selection::point(range.start);
    }

    /// Select the whole document, caret at the end.
    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.doc.len_chars());
    }

    /// Find: search for `query` from the caret (inclusive). A match moves
    /// the caret to its start and selects it. The query is remembered for
    /// Find Next either way.
    pub fn find(&mut self, query: &str) -> SearchOutcome {
        if query.is_empty() {
            return SearchOutcome::Idle;
        }
        let from = self.caret();
        if let Some(m) = search::find_forward(&self.doc, query, from) {
            self.selection = Selection::span_from_start(m.start, m.end());
            self.search.remember(query, m.start);
            log::debug!("find {query:?} from {from}: match at {}", m.start);
            SearchOutcome::Found(m)
        } else {
            self.search.remember(query, from);
            log::debug!("find {query:?} from {from}: no match");
            SearchOutcome::NotFound
        }
    }

    /// Find Next: search the remembered query strictly after the previous
    /// origin.
    pub fn find_next(&mut self) -> SearchOutcome {
        if self.search.is_empty() {
            return SearchOutcome::Idle;
        }
        let from = self.search.origin() + 1;
        match search::find_forward(&self.doc, self.search.query(), from) {
            Some(m) => {
                self.selection = Selection::span_from_start(m.start, m.end());
                self.search.advance_to(m.start);
                log::debug!("find next from {from}: match at {}", m.start);
                SearchOutcome::Found(m)
            }
            None => {
                log::debug!("find next from {from}: no further matches");
                SearchOutcome::NotFound
            }
        }
    }

    /// Replace every occurrence of `find` in the whole document, whatever
    /// is selected. Returns how many were replaced.
    pub fn replace_all(&mut self, find: &str, with: &str) -> usize {
        let count = self.doc.replace_all(find, with);
        if count > 0 {
            self.selection = Selection::point(self.doc.clamp(self.caret()));
        }
        log::debug!("replace {find:?} -> {with:?}: {count} occurrences");
        count
    }

    /// Go To: parse a 1-based line number and move the caret to the start of
    /// that line.
    ///
    /// # Errors
    ///
    /// [`EditorError::InvalidLine`] if `input` is not a number in
    /// `1..=line_count`. The caret does not move.
    pub fn goto_line(&mut self, input: &str) -> Result<usize, EditorError> {
        let invalid = || EditorError::InvalidLine {
            input: input.to_string(),
            line_count: self.doc.line_count(),
        };
        let line: usize = input.trim().parse().map_err(|_| invalid())?;
        let offset = line
            .checked_sub(1)
            .and_then(|idx| self.doc.line_to_char(idx))
            .ok_or_else(invalid)?;
        self.selection = Selection::point(offset);
        Ok(offset)
    }

    /// Time/Date: insert the current local time at the caret.
    pub fn insert_timestamp(&mut self) -> String {
        self.insert_timestamp_at(&Local::now())
    }

    /// Insert `now` formatted with [`TIMESTAMP_FORMAT`] at the caret. The
    /// selection is not replaced; the caret ends after the stamp.
    pub fn insert_timestamp_at<Tz>(&mut self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let stamp = now.format(TIMESTAMP_FORMAT).to_string();
        let caret = self.caret();
        let inserted = self.doc.insert(caret, &stamp);
        self.selection = Selection::point(caret + inserted);
        stamp
    }

    // -- Display preferences ------------------------------------------------

    pub const fn toggle_word_wrap(&mut self) -> bool {
        self.prefs.toggle_word_wrap()
    }

    pub const fn toggle_status_bar(&mut self) -> bool {
        self.prefs.toggle_status_bar()
    }

    pub fn set_font(&mut self, font: Font) {
        self.prefs.set_font(font);
    }

    pub const fn zoom_in(&mut self) -> u16 {
        self.prefs.zoom_in()
    }

    pub fn zoom_out(&mut self) -> u16 {
        self.prefs.zoom_out()
    }

    pub fn reset_zoom(&mut self) {
        self.prefs.reset_zoom();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("doc", &self.doc)
            .field("selection", &self.selection)
            .field("search", &self.search)
            .field("prefs", &self.prefs)
            .finish_non_exhaustive()
    }
}

/// The binding is stored absolute; fall back to the path as given if the
/// working directory is gone.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
