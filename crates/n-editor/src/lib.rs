//! # n-editor — Editor session core for n-pad
//!
//! Everything a single-window notepad does, with no UI attached:
//!
//! - **[`position`]** — `Position` (line, col), 0-indexed, shown 1-based
//! - **[`document`]** — `Document` wrapping a rope with editing, file I/O, and metadata
//! - **[`selection`]** — anchor/head selection whose head is the caret
//! - **[`search`]** — literal forward search and the Find/Find Next memory
//! - **[`clipboard`]** — the `Clipboard` seam and the in-memory register
//! - **[`prefs`]** — word wrap, status bar, font and zoom
//! - **[`session`]** — `Session`, the state behind one window and every command on it
//! - **[`host`]** — capability traits the session asks for paths, fonts and input
//! - **[`command`]** — the declarative menu table and its handlers
//! - **[`config`]** — `config.toml` loading
//! - **[`error`]** — `EditorError` for failed file I/O and bad Go To input
//!
//! A shell renders the session, turns user input into [`command::execute`]
//! calls, and implements [`host::Host`] for the dialogs.

pub mod clipboard;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod host;
pub mod position;
pub mod prefs;
pub mod search;
pub mod selection;
pub mod session;
