// SPDX-License-Identifier: MIT
//
// Line-oriented terminal shell.
//
// The shell redraws the session after every input line, then reads the next
// one:
//
//   ?                      show the menus
//   7 | find | ctrl+f      run a command by number, label or shortcut
//   >text                  type text at the caret (\n, \t and \\ escapes)
//   @12                    move the caret to char offset 12
//   @3-9                   select chars 3..9, caret at 9
//
// Dialogs read their answer from the following line. An empty answer takes
// the bracketed default; `:cancel` or end of input cancels.
//
// Screen:
//
//   ── Notepad - notes.txt ──
//     1 │ first line
//     2 │ second line
//   ── Ln 2, Col 7 │ Arial 14pt │ LF │ Wrap │ Modified
//
// The shell is the session's Host: every dialog, message box, font chooser
// and printer a command asks for is implemented here on top of R and W.

use std::io::{self, BufRead, Write};
use std::mem;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use n_editor::command::{self, Action, CommandEntry, CommandId, Menu, MenuItem};
use n_editor::config::EditorConfig;
use n_editor::host::{FontPicker, Level, Notifier, PathPicker, Printer, Prompter};
use n_editor::prefs::{FONT_SIZES, Font};
use n_editor::session::Session;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Answer that cancels any dialog.
const CANCEL: &str = ":cancel";

/// Logical lines drawn around the caret.
const VIEW_LINES: usize = 20;

/// Narrowest wrap column accepted from the config.
const MIN_WRAP_WIDTH: usize = 8;

/// Offered by the font chooser when `fc-list` is unavailable.
const FALLBACK_FAMILIES: &[&str] = &[
    "Arial",
    "Courier New",
    "DejaVu Sans",
    "DejaVu Sans Mono",
    "Liberation Mono",
    "Monospace",
    "Sans",
    "Serif",
];

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@(?P<anchor>\d+)(?:-(?P<head>\d+))?|(?P<number>\d+))$")
        .expect("directive pattern is valid")
});

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One parsed line at the main prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Empty,
    Menu,
    Command(CommandId),
    Insert(String),
    Caret(usize),
    Select(usize, usize),
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    if let Some(text) = line.strip_prefix('>') {
        return Input::Insert(unescape(text));
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    if trimmed == "?" {
        return Input::Menu;
    }
    let unknown = || Input::Unknown(trimmed.to_string());

    if let Some(caps) = DIRECTIVE.captures(trimmed) {
        let parse = |name: &str| caps.name(name).map(|m| m.as_str().parse::<usize>());
        return match (parse("number"), parse("anchor"), parse("head")) {
            (Some(Ok(n)), _, _) => {
                command_by_number(n).map_or_else(unknown, |e| Input::Command(e.id))
            }
            (None, Some(Ok(anchor)), None) => Input::Caret(anchor),
            (None, Some(Ok(anchor)), Some(Ok(head))) => Input::Select(anchor, head),
            _ => unknown(),
        };
    }
    command::lookup(trimmed).map_or_else(unknown, |e| Input::Command(e.id))
}

/// Menu numbers are 1-based positions in the command table.
fn command_by_number(n: usize) -> Option<&'static CommandEntry> {
    n.checked_sub(1).and_then(|idx| command::entries().nth(idx))
}

/// `\n`, `\t` and `\\`; any other backslash is kept as typed.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

/// Split one logical line into display rows of at most `width` columns.
///
/// Breaks fall between words. Whitespace that overflows stays at the end of
/// its row, and a word wider than a whole row is broken between graphemes.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;

    for word in line.split_word_bounds() {
        let w = word.width();
        if used + w > width && used > 0 {
            if word.trim().is_empty() {
                row.push_str(word);
                used += w;
                continue;
            }
            rows.push(mem::take(&mut row));
            used = 0;
        }
        if w <= width {
            row.push_str(word);
            used += w;
            continue;
        }
        for grapheme in word.graphemes(true) {
            let gw = grapheme.width();
            if used + gw > width && used > 0 {
                rows.push(mem::take(&mut row));
                used = 0;
            }
            row.push_str(grapheme);
            used += gw;
        }
    }
    rows.push(row);
    rows
}

/// Families from `fc-list`, or a fixed list when it cannot be run.
pub fn system_font_families() -> Vec<String> {
    let families = match Command::new("fc-list").args([":", "family"]).output() {
        Ok(out) if out.status.success() => parse_font_list(&String::from_utf8_lossy(&out.stdout)),
        Ok(out) => {
            log::debug!("fc-list exited with {}", out.status);
            Vec::new()
        }
        Err(err) => {
            log::debug!("fc-list unavailable: {err}");
            Vec::new()
        }
    };
    if families.is_empty() {
        return FALLBACK_FAMILIES.iter().map(ToString::to_string).collect();
    }
    families
}

/// `fc-list : family` prints one font per line, aliases comma-separated.
fn parse_font_list(text: &str) -> Vec<String> {
    let mut families: Vec<String> = text
        .lines()
        .filter_map(|line| line.split(',').next())
        .map(|name| name.trim().replace("\\-", "-"))
        .filter(|name| !name.is_empty())
        .collect();
    families.sort_unstable();
    families.dedup();
    families
}

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

pub struct Shell<R, W> {
    input: R,
    output: W,
    wrap_width: usize,
    print_command: String,
    font_families: Option<Vec<String>>,
    closed: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: &EditorConfig) -> Self {
        Self {
            input,
            output,
            wrap_width: config.wrap_width.max(MIN_WRAP_WIDTH),
            print_command: config.print_command.clone(),
            font_families: None,
            closed: false,
        }
    }

    /// Use `families` instead of asking `fc-list`.
    #[cfg(test)]
    fn with_font_families(mut self, families: Vec<String>) -> Self {
        self.font_families = Some(families);
        self
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    /// Read and run input lines until Exit or end of input.
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        self.render_menu(session)?;
        while !self.closed {
            self.render(session)?;
            let Some(line) = self.prompt_line("> ")? else {
                break;
            };
            match parse_input(&line) {
                Input::Empty => {}
                Input::Menu => self.render_menu(session)?,
                Input::Command(id) => {
                    if command::execute(id, session, self) == Action::Quit {
                        break;
                    }
                }
                Input::Insert(text) => session.insert_text(&text),
                Input::Caret(offset) => session.set_caret(offset),
                Input::Select(anchor, head) => session.select(anchor, head),
                Input::Unknown(text) => {
                    writeln!(self.output, "unknown command {text:?}; type ? for the menus")?;
                }
            }
        }
        writeln!(self.output)?;
        self.output.flush()?;
        log::info!("shell closed");
        Ok(())
    }

    // -- Line I/O -----------------------------------------------------------

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Ask for one line. `None` on cancel, end of input or I/O failure.
    fn answer(&mut self, label: &str, default: &str) -> Option<String> {
        let prompt = if default.is_empty() {
            format!("{label} ")
        } else {
            format!("{label} [{default}] ")
        };
        match self.prompt_line(&prompt) {
            Ok(Some(line)) if line.trim() == CANCEL => None,
            Ok(Some(line)) if line.is_empty() => Some(default.to_string()),
            Ok(Some(line)) => Some(line),
            Ok(None) => None,
            Err(err) => {
                log::warn!("dialog input failed: {err}");
                None
            }
        }
    }

    fn say(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            log::warn!("cannot write to terminal: {err}");
        }
    }

    fn families(&mut self) -> &[String] {
        self.font_families.get_or_insert_with(system_font_families)
    }

    // -- Drawing ------------------------------------------------------------

    fn render(&mut self, session: &Session) -> io::Result<()> {
        let doc = session.document();
        let prefs = session.prefs();
        writeln!(self.output, "── {} ──", session.title())?;

        let line_count = doc.line_count();
        let caret_line = session.caret_position().line;
        let first = caret_line
            .saturating_sub(VIEW_LINES / 2)
            .min(line_count.saturating_sub(VIEW_LINES));
        let last = (first + VIEW_LINES).min(line_count);
        let gutter = line_count.to_string().len().max(3);

        for idx in first..last {
            let text = doc.line(idx).map(|l| l.to_string()).unwrap_or_default();
            let text = text.trim_end_matches(['\n', '\r']);
            let rows = if prefs.word_wrap {
                wrap_line(text, self.wrap_width)
            } else {
                vec![text.to_string()]
            };
            for (i, row) in rows.iter().enumerate() {
                if i == 0 {
                    writeln!(self.output, "{:>gutter$} │ {row}", idx + 1)?;
                } else {
                    writeln!(self.output, "{:>gutter$} │ {row}", "")?;
                }
            }
        }

        if let Some(status) = session.status_text() {
            let mut parts = vec![
                status,
                prefs.font.to_string(),
                doc.line_ending().to_string(),
            ];
            if prefs.word_wrap {
                parts.push("Wrap".to_string());
            }
            let selection = session.selection();
            if !selection.is_empty() {
                parts.push(format!("Sel {}", selection.range().len()));
            }
            if doc.is_modified() {
                parts.push("Modified".to_string());
            }
            writeln!(self.output, "── {}", parts.join(" │ "))?;
        }
        self.output.flush()
    }

    fn render_menu(&mut self, session: &Session) -> io::Result<()> {
        let mut number = 0;
        for menu in Menu::ALL {
            writeln!(self.output, "{}", menu.label())?;
            for item in command::menu_items(menu) {
                match item {
                    MenuItem::Separator(_) => writeln!(self.output, "      ───")?,
                    MenuItem::Command(entry) => {
                        number += 1;
                        let check = match entry.checked(session) {
                            Some(true) => "[x] ",
                            Some(false) => "[ ] ",
                            None => "",
                        };
                        let name = format!("{check}{}", entry.label);
                        let shortcut = entry.shortcut.unwrap_or("");
                        let state = if entry.is_enabled() { "" } else { " (unavailable)" };
                        writeln!(self.output, "  {number:>2}  {name:<24}{shortcut}{state}")?;
                    }
                }
            }
        }
        self.output.flush()
    }
}

// ---------------------------------------------------------------------------
// Host capabilities
// ---------------------------------------------------------------------------

fn non_blank_path(answer: &str) -> Option<PathBuf> {
    let trimmed = answer.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

impl<R: BufRead, W: Write> PathPicker for Shell<R, W> {
    fn pick_open(&mut self) -> Option<PathBuf> {
        self.answer("Open file:", "").as_deref().and_then(non_blank_path)
    }

    fn pick_save(&mut self, suggested: Option<&Path>) -> Option<PathBuf> {
        let default = suggested.map(|p| p.display().to_string()).unwrap_or_default();
        self.answer("Save as:", &default).as_deref().and_then(non_blank_path)
    }
}

impl<R: BufRead, W: Write> FontPicker for Shell<R, W> {
    fn pick_font(&mut self, current: &Font) -> Option<Font> {
        let family = loop {
            let answer = self.answer("Font family (? lists):", &current.family)?;
            let answer = answer.trim();
            if answer == "?" {
                let listing: Vec<String> = self
                    .families()
                    .iter()
                    .enumerate()
                    .map(|(i, name)| format!("  {:>3}  {name}", i + 1))
                    .collect();
                self.say(&listing.join("\n"));
                continue;
            }
            if let Ok(n) = answer.parse::<usize>() {
                let picked = n.checked_sub(1).and_then(|i| self.families().get(i).cloned());
                match picked {
                    Some(name) => break name,
                    None => {
                        self.say(&format!("no font number {n}"));
                        continue;
                    }
                }
            }
            break answer.to_string();
        };

        let sizes = FONT_SIZES.map(|s| s.to_string()).join(", ");
        let answer = self.answer(&format!("Size ({sizes}):"), &current.size.to_string())?;
        if let Ok(size) = answer.trim().parse::<u16>() {
            Some(Font::new(family, size))
        } else {
            self.say(&format!("invalid font size {:?}", answer.trim()));
            None
        }
    }
}

impl<R: BufRead, W: Write> Notifier for Shell<R, W> {
    fn notify(&mut self, level: Level, title: &str, message: &str) {
        let marker = match level {
            Level::Info => "──",
            Level::Error => "!!",
        };
        let mut text = format!("{marker} {title} {marker}");
        for line in message.lines() {
            text.push_str("\n   ");
            text.push_str(line);
        }
        self.say(&text);
    }
}

impl<R: BufRead, W: Write> Prompter for Shell<R, W> {
    fn ask(&mut self, title: &str, label: &str, initial: &str) -> Option<String> {
        self.answer(&format!("{title} ▸ {label}"), initial)
    }

    fn ask_replace(&mut self, initial_find: &str) -> Option<(String, String)> {
        let find = self.answer("Replace ▸ Find what:", initial_find)?;
        let with = self.answer("Replace ▸ Replace with:", "")?;
        Some((find, with))
    }
}

impl<R: BufRead, W: Write> Printer for Shell<R, W> {
    /// Pipe the text into the configured print command.
    fn print(&mut self, title: &str, text: &str) -> io::Result<()> {
        let mut words = self.print_command.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no print command"))?;
        let mut child = Command::new(program)
            .args(words)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // Dropping stdin closes the pipe; reap the child even if the write failed.
        let written = child
            .stdin
            .take()
            .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));
        let status = child.wait()?;
        written?;
        if !status.success() {
            return Err(io::Error::other(format!("{program} exited with {status}")));
        }
        log::info!("printed {title:?} with {program}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
