//! Session errors.
//!
//! Only two things can go wrong inside a session command: a file could not be
//! read or written, or Go To was given a line that does not exist. Everything
//! else (a search with no match, a replace that finds nothing) is a normal
//! outcome and is reported through the return value instead.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which file operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Open,
    Save,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Save => f.write_str("save"),
        }
    }
}

/// An error raised by an [`Session`](crate::session::Session) command.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Reading or writing a file failed. Session state is left as it was
    /// before the command.
    #[error("cannot {action} {}: {source}", path.display())]
    Io {
        action: FileAction,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Go To got something that is not a line of the document.
    #[error("invalid line number {input:?} (document has {line_count} lines)")]
    InvalidLine { input: String, line_count: usize },
}

impl EditorError {
    pub(crate) fn io(action: FileAction, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// The dialog text shown for this error.
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::Io {
                action: FileAction::Open,
                ..
            } => "Error opening file.",
            Self::Io {
                action: FileAction::Save,
                ..
            } => "Error saving file.",
            Self::InvalidLine { .. } => "Invalid line number.",
        }
    }
}
