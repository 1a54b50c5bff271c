//! Menu commands — a declarative table of everything the user can run.
//!
//! The shell never wires handlers by hand. It walks [`MENU`] to build its
//! menus and calls [`execute`] with the [`CommandId`] the user picked. Each
//! entry carries its menu, label, optional shortcut, flags and handler.
//!
//! # Menus
//!
//! | Menu   | Commands                                                         |
//! |--------|------------------------------------------------------------------|
//! | File   | New, Open..., Save, Save As..., Page Setup..., Print..., Exit    |
//! | Edit   | Undo, Cut, Copy, Paste, Delete, Find..., Find Next, Replace..., Go To..., Select All, Time/Date |
//! | Format | Word Wrap (check), Font...                                       |
//! | View   | Zoom In, Zoom Out, Restore Default Zoom, Status Bar (check)      |
//! | Help   | View Help, About Notepad                                         |
//!
//! Undo is listed but disabled: there is no edit history.
//!
//! # Handlers
//!
//! A handler is a plain `fn(&mut Session, &mut dyn Host) -> Action`. It asks
//! the host for whatever input it needs, calls the session, and turns errors
//! and "not found" outcomes into host notifications. Handlers never return
//! errors; the only thing the shell learns is whether to keep going.

use std::fmt;

use bitflags::bitflags;

use crate::error::EditorError;
use crate::host::{Host, Level};
use crate::search::SearchOutcome;
use crate::session::{APP_TITLE, Saved, Session};

// ---------------------------------------------------------------------------
// Table types
// ---------------------------------------------------------------------------

/// Top-level menus, in menu-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    File,
    Edit,
    Format,
    View,
    Help,
}

impl Menu {
    pub const ALL: [Self; 5] = [Self::File, Self::Edit, Self::Format, Self::View, Self::Help];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Edit => "Edit",
            Self::Format => "Format",
            Self::View => "View",
            Self::Help => "Help",
        }
    }
}

/// Every command the menus can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    New,
    Open,
    Save,
    SaveAs,
    PageSetup,
    Print,
    Exit,
    Undo,
    Cut,
    Copy,
    Paste,
    Delete,
    Find,
    FindNext,
    Replace,
    GoTo,
    SelectAll,
    TimeDate,
    WordWrap,
    Font,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    StatusBar,
    ViewHelp,
    About,
}

bitflags! {
    /// How a menu entry is presented.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EntryFlags: u8 {
        /// Shown with a check mark reflecting a display preference.
        const CHECKABLE = 1 << 0;
        /// Shown greyed out; [`execute`] ignores it.
        const DISABLED  = 1 << 1;
    }
}

/// What the shell should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// A command handler.
pub type Handler = fn(&mut Session, &mut dyn Host) -> Action;

/// One runnable menu entry.
#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub menu: Menu,
    pub label: &'static str,
    pub id: CommandId,
    pub shortcut: Option<&'static str>,
    pub flags: EntryFlags,
    pub handler: Handler,
}

impl CommandEntry {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.flags.contains(EntryFlags::DISABLED)
    }

    /// The check state of a checkable entry, `None` for plain entries.
    #[must_use]
    pub const fn checked(&self, session: &Session) -> Option<bool> {
        if !self.flags.contains(EntryFlags::CHECKABLE) {
            return None;
        }
        match self.id {
            CommandId::WordWrap => Some(session.prefs().word_wrap),
            CommandId::StatusBar => Some(session.prefs().status_bar),
            _ => None,
        }
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("menu", &self.menu)
            .field("label", &self.label)
            .field("id", &self.id)
            .field("shortcut", &self.shortcut)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// A row of a menu.
#[derive(Debug, Clone, Copy)]
pub enum MenuItem {
    Command(CommandEntry),
    Separator(Menu),
}

impl MenuItem {
    #[must_use]
    pub const fn menu(&self) -> Menu {
        match self {
            Self::Command(entry) => entry.menu,
            Self::Separator(menu) => *menu,
        }
    }
}

const fn cmd(
    menu: Menu,
    label: &'static str,
    id: CommandId,
    shortcut: Option<&'static str>,
    flags: EntryFlags,
    handler: Handler,
) -> MenuItem {
    MenuItem::Command(CommandEntry {
        menu,
        label,
        id,
        shortcut,
        flags,
        handler,
    })
}

const NONE: EntryFlags = EntryFlags::empty();

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

/// Every menu row, grouped by menu in menu-bar order.
#[rustfmt::skip]
pub static MENU: &[MenuItem] = &[
    cmd(Menu::File, "New",          CommandId::New,       Some("Ctrl+N"), NONE, cmd_new),
    cmd(Menu::File, "Open...",      CommandId::Open,      Some("Ctrl+O"), NONE, cmd_open),
    cmd(Menu::File, "Save",         CommandId::Save,      Some("Ctrl+S"), NONE, cmd_save),
    cmd(Menu::File, "Save As...",   CommandId::SaveAs,    None,           NONE, cmd_save_as),
    cmd(Menu::File, "Page Setup...", CommandId::PageSetup, None,          NONE, cmd_page_setup),
    cmd(Menu::File, "Print...",     CommandId::Print,     Some("Ctrl+P"), NONE, cmd_print),
    MenuItem::Separator(Menu::File),
    cmd(Menu::File, "Exit",         CommandId::Exit,      None,           NONE, cmd_exit),

    cmd(Menu::Edit, "Undo",         CommandId::Undo,      Some("Ctrl+Z"), EntryFlags::DISABLED, cmd_undo),
    MenuItem::Separator(Menu::Edit),
    cmd(Menu::Edit, "Cut",          CommandId::Cut,       Some("Ctrl+X"), NONE, cmd_cut),
    cmd(Menu::Edit, "Copy",         CommandId::Copy,      Some("Ctrl+C"), NONE, cmd_copy),
    cmd(Menu::Edit, "Paste",        CommandId::Paste,     Some("Ctrl+V"), NONE, cmd_paste),
    cmd(Menu::Edit, "Delete",       CommandId::Delete,    Some("Del"),    NONE, cmd_delete),
    MenuItem::Separator(Menu::Edit),
    cmd(Menu::Edit, "Find...",      CommandId::Find,      Some("Ctrl+F"), NONE, cmd_find),
    cmd(Menu::Edit, "Find Next",    CommandId::FindNext,  Some("F3"),     NONE, cmd_find_next),
    cmd(Menu::Edit, "Replace...",   CommandId::Replace,   Some("Ctrl+H"), NONE, cmd_replace),
    cmd(Menu::Edit, "Go To...",     CommandId::GoTo,      Some("Ctrl+G"), NONE, cmd_goto),
    MenuItem::Separator(Menu::Edit),
    cmd(Menu::Edit, "Select All",   CommandId::SelectAll, Some("Ctrl+A"), NONE, cmd_select_all),
    cmd(Menu::Edit, "Time/Date",    CommandId::TimeDate,  Some("F5"),     NONE, cmd_time_date),

    cmd(Menu::Format, "Word Wrap",  CommandId::WordWrap,  None,           EntryFlags::CHECKABLE, cmd_word_wrap),
    cmd(Menu::Format, "Font...",    CommandId::Font,      None,           NONE, cmd_font),

    cmd(Menu::View, "Zoom In",      CommandId::ZoomIn,    Some("Ctrl++"), NONE, cmd_zoom_in),
    cmd(Menu::View, "Zoom Out",     CommandId::ZoomOut,   Some("Ctrl+-"), NONE, cmd_zoom_out),
    cmd(Menu::View, "Restore Default Zoom", CommandId::ResetZoom, Some("Ctrl+0"), NONE, cmd_reset_zoom),
    MenuItem::Separator(Menu::View),
    cmd(Menu::View, "Status Bar",   CommandId::StatusBar, None,           EntryFlags::CHECKABLE, cmd_status_bar),

    cmd(Menu::Help, "View Help",    CommandId::ViewHelp,  Some("F1"),     NONE, cmd_view_help),
    MenuItem::Separator(Menu::Help),
    cmd(Menu::Help, "About Notepad", CommandId::About,    None,           NONE, cmd_about),
];

// ---------------------------------------------------------------------------
// Lookup and dispatch
// ---------------------------------------------------------------------------

/// Every runnable entry, in table order.
pub fn entries() -> impl Iterator<Item = &'static CommandEntry> {
    MENU.iter().filter_map(|item| match item {
        MenuItem::Command(entry) => Some(entry),
        MenuItem::Separator(_) => None,
    })
}

/// The rows of one menu, separators included.
pub fn menu_items(menu: Menu) -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(move |item| item.menu() == menu)
}

/// The entry for a command id.
#[must_use]
pub fn entry(id: CommandId) -> Option<&'static CommandEntry> {
    entries().find(|entry| entry.id == id)
}

/// Find an entry by what a user might type: its label (case-insensitive,
/// trailing `...` optional) or its shortcut (`ctrl+f`, `F3`).
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CommandEntry> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }
    entries().find(|entry| {
        normalize(entry.label) == wanted || entry.shortcut.is_some_and(|s| normalize(s) == wanted)
    })
}

fn normalize(name: &str) -> String {
    name.trim().trim_end_matches("...").trim().to_lowercase()
}

/// Run a command. Disabled entries do nothing.
pub fn execute(id: CommandId, session: &mut Session, host: &mut dyn Host) -> Action {
    let Some(entry) = entry(id) else {
        return Action::Continue;
    };
    if !entry.is_enabled() {
        log::debug!("ignoring disabled command {:?}", entry.id);
        return Action::Continue;
    }
    log::debug!("running {:?}", entry.id);
    (entry.handler)(session, host)
}

// ---------------------------------------------------------------------------
// Handlers — File
// ---------------------------------------------------------------------------

fn report(host: &mut dyn Host, title: &str, err: &EditorError) {
    host.notify(Level::Error, title, &format!("{}\n{err}", err.headline()));
}

fn cmd_new(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.new_document();
    Action::Continue
}

fn cmd_open(session: &mut Session, host: &mut dyn Host) -> Action {
    if let Some(path) = host.pick_open() {
        if let Err(err) = session.open(&path) {
            report(host, "Error", &err);
        }
    }
    Action::Continue
}

fn cmd_save(session: &mut Session, host: &mut dyn Host) -> Action {
    match session.save() {
        Ok(Saved::Written(_)) => Action::Continue,
        Ok(Saved::NeedsPath) => cmd_save_as(session, host),
        Err(err) => {
            report(host, "Error", &err);
            Action::Continue
        }
    }
}

fn cmd_save_as(session: &mut Session, host: &mut dyn Host) -> Action {
    let suggested = session.path().map(std::path::Path::to_path_buf);
    if let Some(path) = host.pick_save(suggested.as_deref()) {
        if let Err(err) = session.save_as(&path) {
            report(host, "Error", &err);
        }
    }
    Action::Continue
}

fn cmd_page_setup(_session: &mut Session, host: &mut dyn Host) -> Action {
    host.notify(Level::Info, "Info", "Page Setup is not implemented.");
    Action::Continue
}

fn cmd_print(session: &mut Session, host: &mut dyn Host) -> Action {
    if let Err(err) = host.print(&session.title(), &session.document().contents()) {
        log::warn!("print failed: {err}");
        host.notify(Level::Error, "Error", "Error printing.");
    }
    Action::Continue
}

fn cmd_exit(_session: &mut Session, _host: &mut dyn Host) -> Action {
    Action::Quit
}

// ---------------------------------------------------------------------------
// Handlers — Edit
// ---------------------------------------------------------------------------

fn cmd_undo(_session: &mut Session, _host: &mut dyn Host) -> Action {
    Action::Continue
}

fn cmd_cut(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.cut();
    Action::Continue
}

fn cmd_copy(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.copy();
    Action::Continue
}

fn cmd_paste(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.paste();
    Action::Continue
}

fn cmd_delete(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.delete_selection();
    Action::Continue
}

fn cmd_find(session: &mut Session, host: &mut dyn Host) -> Action {
    let last = session.search_state().query().to_string();
    if let Some(query) = host.ask("Find", "Find:", &last) {
        if session.find(&query) == SearchOutcome::NotFound {
            host.notify(Level::Info, "Find", "Text not found.");
        }
    }
    Action::Continue
}

fn cmd_find_next(session: &mut Session, host: &mut dyn Host) -> Action {
    if session.find_next() == SearchOutcome::NotFound {
        host.notify(Level::Info, "Find Next", "No further matches.");
    }
    Action::Continue
}

fn cmd_replace(session: &mut Session, host: &mut dyn Host) -> Action {
    let last = session.search_state().query().to_string();
    if let Some((find, with)) = host.ask_replace(&last) {
        session.replace_all(&find, &with);
    }
    Action::Continue
}

fn cmd_goto(session: &mut Session, host: &mut dyn Host) -> Action {
    if let Some(input) = host.ask("Go To", "Go to line:", "") {
        if let Err(err) = session.goto_line(&input) {
            report(host, "Go To", &err);
        }
    }
    Action::Continue
}

fn cmd_select_all(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.select_all();
    Action::Continue
}

fn cmd_time_date(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.insert_timestamp();
    Action::Continue
}

// ---------------------------------------------------------------------------
// Handlers — Format, View, Help
// ---------------------------------------------------------------------------

fn cmd_word_wrap(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.toggle_word_wrap();
    Action::Continue
}

fn cmd_font(session: &mut Session, host: &mut dyn Host) -> Action {
    let current = session.prefs().font.clone();
    if let Some(font) = host.pick_font(&current) {
        session.set_font(font);
    }
    Action::Continue
}

fn cmd_zoom_in(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.zoom_in();
    Action::Continue
}

fn cmd_zoom_out(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.zoom_out();
    Action::Continue
}

fn cmd_reset_zoom(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.reset_zoom();
    Action::Continue
}

fn cmd_status_bar(session: &mut Session, _host: &mut dyn Host) -> Action {
    session.toggle_status_bar();
    Action::Continue
}

fn cmd_view_help(_session: &mut Session, host: &mut dyn Host) -> Action {
    host.notify(
        Level::Info,
        "View Help",
        "This is a simple Notepad application.\n\
         Pick a command from the File, Edit, Format, View or Help menu by\n\
         number, label or shortcut.",
    );
    Action::Continue
}

fn cmd_about(_session: &mut Session, host: &mut dyn Host) -> Action {
    host.notify(
        Level::Info,
        "About Notepad",
        &format!(
            "{APP_TITLE}\nVersion {}\nTerminal Edition",
            env!("CARGO_PKG_VERSION")
        ),
    );
    Action::Continue
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{FontPicker, Notifier, PathPicker, Printer, Prompter};
    use crate::prefs::Font;
    use pretty_assertions::assert_eq;
    use std::collections::{HashSet, VecDeque};
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    /// A host that answers from scripts and records what it was asked.
    #[derive(Default)]
    struct FakeHost {
        open_paths: VecDeque<Option<PathBuf>>,
        save_paths: VecDeque<Option<PathBuf>>,
        answers: VecDeque<Option<String>>,
        replaces: VecDeque<Option<(String, String)>>,
        fonts: VecDeque<Option<Font>>,
        print_fails: bool,

        notes: Vec<(Level, String, String)>,
        asked: Vec<(String, String)>,
        suggested: Vec<Option<PathBuf>>,
        printed: Vec<String>,
    }

    impl PathPicker for FakeHost {
        fn pick_open(&mut self) -> Option<PathBuf> {
            self.open_paths.pop_front().flatten()
        }

        fn pick_save(&mut self, suggested: Option<&Path>) -> Option<PathBuf> {
            self.suggested.push(suggested.map(Path::to_path_buf));
            self.save_paths.pop_front().flatten()
        }
    }

    impl FontPicker for FakeHost {
        fn pick_font(&mut self, _current: &Font) -> Option<Font> {
            self.fonts.pop_front().flatten()
        }
    }

    impl Notifier for FakeHost {
        fn notify(&mut self, level: Level, title: &str, message: &str) {
            self.notes.push((level, title.into(), message.into()));
        }
    }

    impl Prompter for FakeHost {
        fn ask(&mut self, title: &str, _label: &str, initial: &str) -> Option<String> {
            self.asked.push((title.into(), initial.into()));
            self.answers.pop_front().flatten()
        }

        fn ask_replace(&mut self, initial_find: &str) -> Option<(String, String)> {
            self.asked.push(("Replace".into(), initial_find.into()));
            self.replaces.pop_front().flatten()
        }
    }

    impl Printer for FakeHost {
        fn print(&mut self, _title: &str, text: &str) -> io::Result<()> {
            if self.print_fails {
                return Err(io::Error::other("no printer"));
            }
            self.printed.push(text.into());
            Ok(())
        }
    }

    fn run(id: CommandId, session: &mut Session, host: &mut FakeHost) -> Action {
        execute(id, session, host)
    }

    // -- Table --------------------------------------------------------------

    #[test]
    fn every_command_has_exactly_one_entry() {
        let ids: Vec<CommandId> = entries().map(|e| e.id).collect();
        let unique: HashSet<CommandId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 26);
    }

    #[test]
    fn menus_are_grouped_in_bar_order() {
        let order: Vec<Menu> = MENU.iter().map(MenuItem::menu).collect();
        let mut deduped = order.clone();
        deduped.dedup();
        assert_eq!(deduped, Menu::ALL.to_vec());
    }

    #[test]
    fn file_menu_layout() {
        let labels: Vec<&str> = menu_items(Menu::File)
            .map(|item| match item {
                MenuItem::Command(e) => e.label,
                MenuItem::Separator(_) => "-",
            })
            .collect();
        assert_eq!(
            labels,
            vec!["New", "Open...", "Save", "Save As...", "Page Setup...", "Print...", "-", "Exit"]
        );
    }

    #[test]
    fn lookup_by_label_and_shortcut() {
        assert_eq!(lookup("find").map(|e| e.id), Some(CommandId::Find));
        assert_eq!(lookup("Find...").map(|e| e.id), Some(CommandId::Find));
        assert_eq!(lookup("  GO TO ").map(|e| e.id), Some(CommandId::GoTo));
        assert_eq!(lookup("f3").map(|e| e.id), Some(CommandId::FindNext));
        assert_eq!(lookup("ctrl+s").map(|e| e.id), Some(CommandId::Save));
        assert_eq!(lookup("nope").map(|e| e.id), None);
        assert_eq!(lookup("").map(|e| e.id), None);
    }

    #[test]
    fn checkable_entries_reflect_prefs() {
        let mut session = Session::new();
        let wrap = entry(CommandId::WordWrap).unwrap();
        assert_eq!(wrap.checked(&session), Some(true));
        session.toggle_word_wrap();
        assert_eq!(wrap.checked(&session), Some(false));
        assert_eq!(entry(CommandId::New).unwrap().checked(&session), None);
    }

    #[test]
    fn undo_is_disabled_and_inert() {
        let undo = entry(CommandId::Undo).unwrap();
        assert!(!undo.is_enabled());

        let mut session = Session::from_text("x");
        let mut host = FakeHost::default();
        assert_eq!(run(CommandId::Undo, &mut session, &mut host), Action::Continue);
        assert_eq!(session.document().contents(), "x");
    }

    // -- File handlers ------------------------------------------------------

    #[test]
    fn exit_quits_everything_else_continues() {
        let mut session = Session::new();
        let mut host = FakeHost::default();
        assert_eq!(run(CommandId::Exit, &mut session, &mut host), Action::Quit);
        assert_eq!(run(CommandId::New, &mut session, &mut host), Action::Continue);
    }

    #[test]
    fn open_cancelled_does_nothing() {
        let mut session = Session::from_text("keep");
        let mut host = FakeHost::default();
        host.open_paths.push_back(None);
        run(CommandId::Open, &mut session, &mut host);
        assert_eq!(session.document().contents(), "keep");
        assert!(host.notes.is_empty());
    }

    #[test]
    fn open_failure_is_reported() {
        let mut session = Session::from_text("keep");
        let mut host = FakeHost::default();
        host.open_paths
            .push_back(Some(PathBuf::from("/nonexistent/n-pad/missing.txt")));
        run(CommandId::Open, &mut session, &mut host);

        assert_eq!(session.document().contents(), "keep");
        let (level, title, message) = &host.notes[0];
        assert_eq!(*level, Level::Error);
        assert_eq!(title, "Error");
        assert!(message.starts_with("Error opening file.\n"));
    }

    #[test]
    fn save_unbound_prompts_then_binds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");

        let mut session = Session::from_text("body");
        let mut host = FakeHost::default();
        host.save_paths.push_back(Some(path.clone()));
        run(CommandId::Save, &mut session, &mut host);

        assert_eq!(host.suggested, vec![None]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "body");
        assert_eq!(session.title(), "Notepad - new.txt");

        // Bound now: the next Save writes without asking.
        session.insert_text("more ");
        run(CommandId::Save, &mut session, &mut host);
        assert_eq!(host.suggested.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "more body");
    }

    #[test]
    fn save_as_suggests_current_binding() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");

        let mut session = Session::from_text("x");
        session.save_as(&first).unwrap();

        let mut host = FakeHost::default();
        host.save_paths.push_back(Some(second.clone()));
        run(CommandId::SaveAs, &mut session, &mut host);

        assert_eq!(host.suggested.len(), 1);
        assert!(host.suggested[0].as_ref().is_some_and(|p| p.ends_with("first.txt")));
        assert!(second.exists());
        assert_eq!(session.title(), "Notepad - second.txt");
    }

    #[test]
    fn save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::from_text("x");
        let mut host = FakeHost::default();
        host.save_paths
            .push_back(Some(dir.path().join("missing").join("x.txt")));
        run(CommandId::SaveAs, &mut session, &mut host);

        assert_eq!(session.path(), None);
        assert!(host.notes[0].2.starts_with("Error saving file."));
    }

    #[test]
    fn page_setup_and_print() {
        let mut session = Session::from_text("print me");
        let mut host = FakeHost::default();
        run(CommandId::PageSetup, &mut session, &mut host);
        assert_eq!(host.notes[0].2, "Page Setup is not implemented.");

        run(CommandId::Print, &mut session, &mut host);
        assert_eq!(host.printed, vec!["print me".to_string()]);

        host.print_fails = true;
        run(CommandId::Print, &mut session, &mut host);
        assert_eq!(
            host.notes.last().unwrap(),
            &(Level::Error, "Error".into(), "Error printing.".into())
        );
    }

    // -- Edit handlers ------------------------------------------------------

    #[test]
    fn find_prefills_last_query_and_reports_misses() {
        let mut session = Session::from_text("one two one");
        let mut host = FakeHost::default();
        host.answers.push_back(Some("one".into()));
        host.answers.push_back(Some("zzz".into()));

        run(CommandId::Find, &mut session, &mut host);
        assert_eq!(session.selected_text(), "one");

        run(CommandId::Find, &mut session, &mut host);
        assert_eq!(
            host.asked,
            vec![("Find".into(), String::new()), ("Find".into(), "one".into())]
        );
        assert_eq!(
            host.notes,
            vec![(Level::Info, "Find".into(), "Text not found.".into())]
        );
    }

    #[test]
    fn find_cancelled_or_empty_is_silent() {
        let mut session = Session::from_text("abc");
        let mut host = FakeHost::default();
        host.answers.push_back(None);
        host.answers.push_back(Some(String::new()));
        run(CommandId::Find, &mut session, &mut host);
        run(CommandId::Find, &mut session, &mut host);
        assert!(host.notes.is_empty());
        assert!(session.search_state().is_empty());
    }

    #[test]
    fn find_next_walks_then_reports_end() {
        let mut session = Session::from_text("a-a-a");
        let mut host = FakeHost::default();
        host.answers.push_back(Some("a".into()));

        run(CommandId::Find, &mut session, &mut host);
        run(CommandId::FindNext, &mut session, &mut host);
        assert_eq!(session.caret(), 2);
        run(CommandId::FindNext, &mut session, &mut host);
        assert_eq!(session.caret(), 4);
        run(CommandId::FindNext, &mut session, &mut host);
        assert_eq!(session.caret(), 4);
        assert_eq!(host.notes.len(), 1);
        assert_eq!(host.notes[0].2, "No further matches.");
    }

    #[test]
    fn find_next_without_query_is_silent() {
        let mut session = Session::from_text("abc");
        let mut host = FakeHost::default();
        run(CommandId::FindNext, &mut session, &mut host);
        assert!(host.notes.is_empty());
    }

    #[test]
    fn replace_uses_dialog_values() {
        let mut session = Session::from_text("banana");
        let mut host = FakeHost::default();
        host.answers.push_back(Some("an".into()));
        host.replaces.push_back(Some(("a".into(), "b".into())));

        run(CommandId::Find, &mut session, &mut host);
        run(CommandId::Replace, &mut session, &mut host);

        assert_eq!(host.asked.last().unwrap(), &("Replace".into(), "an".into()));
        assert_eq!(session.document().contents(), "bbnbnb");
    }

    #[test]
    fn goto_reports_invalid_line() {
        let mut session = Session::from_text("a\nb");
        session.set_caret(1);
        let mut host = FakeHost::default();
        host.answers.push_back(Some("7".into()));
        host.answers.push_back(Some("2".into()));

        run(CommandId::GoTo, &mut session, &mut host);
        assert_eq!(session.caret(), 1);
        assert_eq!(host.notes[0].1, "Go To");
        assert!(host.notes[0].2.starts_with("Invalid line number."));

        run(CommandId::GoTo, &mut session, &mut host);
        assert_eq!(session.caret(), 2);
        assert_eq!(host.notes.len(), 1);
    }

    #[test]
    fn clipboard_commands() {
        let mut session = Session::from_text("hello world");
        let mut host = FakeHost::default();

        run(CommandId::SelectAll, &mut session, &mut host);
        run(CommandId::Copy, &mut session, &mut host);
        session.set_caret(11);
        run(CommandId::Paste, &mut session, &mut host);
        assert_eq!(session.document().contents(), "hello worldhello world");

        session.select(0, 6);
        run(CommandId::Cut, &mut session, &mut host);
        assert_eq!(session.document().contents(), "worldhello world");

        session.select(5, 16);
        run(CommandId::Delete, &mut session, &mut host);
        assert_eq!(session.document().contents(), "world");
    }

    #[test]
    fn time_date_inserts_text() {
        let mut session = Session::new();
        let mut host = FakeHost::default();
        run(CommandId::TimeDate, &mut session, &mut host);
        assert!(!session.document().is_empty());
        assert_eq!(session.caret(), session.document().len_chars());
    }

    // -- Format / View / Help handlers --------------------------------------

    #[test]
    fn font_and_zoom_commands() {
        let mut session = Session::new();
        let mut host = FakeHost::default();
        host.fonts.push_back(Some(Font::new("Courier New", 8)));
        host.fonts.push_back(None);

        run(CommandId::Font, &mut session, &mut host);
        assert_eq!(session.prefs().font, Font::new("Courier New", 8));
        run(CommandId::Font, &mut session, &mut host);
        assert_eq!(session.prefs().font, Font::new("Courier New", 8));

        run(CommandId::ZoomOut, &mut session, &mut host);
        assert_eq!(session.prefs().font.size, 8);
        run(CommandId::ZoomIn, &mut session, &mut host);
        assert_eq!(session.prefs().font.size, 10);
        run(CommandId::ResetZoom, &mut session, &mut host);
        assert_eq!(session.prefs().font, Font::default());
    }

    #[test]
    fn toggles_round_trip() {
        let mut session = Session::new();
        let mut host = FakeHost::default();
        let before = session.prefs().clone();
        for id in [CommandId::WordWrap, CommandId::StatusBar] {
            run(id, &mut session, &mut host);
            run(id, &mut session, &mut host);
        }
        assert_eq!(session.prefs(), &before);
    }

    #[test]
    fn help_and_about_notify() {
        let mut session = Session::new();
        let mut host = FakeHost::default();
        run(CommandId::ViewHelp, &mut session, &mut host);
        run(CommandId::About, &mut session, &mut host);
        assert_eq!(host.notes[0].1, "View Help");
        assert_eq!(host.notes[1].1, "About Notepad");
        assert!(host.notes[1].2.starts_with("Notepad\nVersion "));
    }
}
