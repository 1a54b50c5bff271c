//! Capabilities the session needs from whatever shell hosts it.
//!
//! The session never draws anything. When a command needs a path, a font, a
//! line of input, or has something to tell the user, it goes through one of
//! these traits. The terminal shell implements them on stdio; tests implement
//! them with scripted answers.
//!
//! Every "pick"/"ask" method returns `None` when the user cancels.

use std::io;
use std::path::{Path, PathBuf};

use crate::prefs::Font;

/// Modal file chooser.
pub trait PathPicker {
    /// Choose an existing file to open.
    fn pick_open(&mut self) -> Option<PathBuf>;

    /// Choose where to save. `suggested` is the current binding, if any.
    fn pick_save(&mut self, suggested: Option<&Path>) -> Option<PathBuf>;
}

/// Modal font chooser, starting from the current font.
pub trait FontPicker {
    fn pick_font(&mut self, current: &Font) -> Option<Font>;
}

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// Modal message box.
pub trait Notifier {
    fn notify(&mut self, level: Level, title: &str, message: &str);
}

/// Modal input dialogs.
pub trait Prompter {
    /// A single text field labelled `label`, pre-filled with `initial`.
    fn ask(&mut self, title: &str, label: &str, initial: &str) -> Option<String>;

    /// The two-field Replace dialog: returns `(find, replace_with)`.
    fn ask_replace(&mut self, initial_find: &str) -> Option<(String, String)>;
}

/// Whatever the host treats as a printer.
pub trait Printer {
    /// # Errors
    ///
    /// Returns an error if the text could not be sent to the printer.
    fn print(&mut self, title: &str, text: &str) -> io::Result<()>;
}

/// Everything a command handler may call on its host.
pub trait Host: PathPicker + FontPicker + Notifier + Prompter + Printer {}

impl<T: PathPicker + FontPicker + Notifier + Prompter + Printer> Host for T {}
