// SPDX-License-Identifier: MIT
//
// n-pad — a menu-driven terminal notepad.
//
// This is the main binary that wires together:
//
//   cli       → arguments (FILE, -v, --log, --config)
//   paths     → default config and log locations
//   logging   → fern file logger
//   n-editor  → Session, the command table and config.toml loading
//   clipboard → system clipboard mirrored into the session's register
//   shell     → stdio rendering, input parsing, and every Host dialog
//
// Each input line flows through:
//
//   stdin → shell::parse_input → command::execute → handler → Session
//                                                  ↘ Host dialog (shell)
//   Session → shell::render → stdout

mod cli;
mod clipboard;
mod logging;
mod paths;
mod shell;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use n_editor::config::Config;
use n_editor::host::{Level, Notifier};
use n_editor::session::Session;

use crate::cli::Cli;
use crate::clipboard::SystemClipboard;
use crate::shell::Shell;

fn main() {
    if let Err(err) = run() {
        log::error!("{err:#}");
        eprintln!("n-pad: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match cli.log_file {
        Some(path) => path,
        None => paths::default_log_file()?,
    };
    logging::init(cli.verbosity, &log_file)?;

    let config_file = match cli.config_file {
        Some(path) => path,
        None => paths::default_config_file()?,
    };
    let config = Config::load(&config_file)
        .with_context(|| format!("cannot load {}", config_file.display()))?;
    log::debug!("config: {config:?}");

    let clipboard = SystemClipboard::new(config.editor.system_clipboard);
    log::info!("system clipboard: {}", clipboard.is_system());
    let mut session =
        Session::with_prefs(config.display_prefs()).with_clipboard(Box::new(clipboard));

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock(), &config.editor);
    if let Some(path) = &cli.file {
        if let Err(err) = session.open(path) {
            shell.notify(Level::Error, "Error", &format!("{}\n{err}", err.headline()));
        }
    }

    shell.run(&mut session).context("terminal I/O failed")
}
