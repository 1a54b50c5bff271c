// SPDX-License-Identifier: MIT
//
// File logging. The terminal belongs to the shell, so every log line goes
// to a file, never to stdout or stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;

/// `-v` count to level: warnings by default, then info, debug, trace.
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger, appending to `path`.
pub fn init(verbosity: u8, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }
    let file = fern::log_file(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    fern::Dispatch::new()
        .level(level_for(verbosity))
        // arboard reports every clipboard round trip at debug.
        .level_for("arboard", LevelFilter::Warn)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} [{}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.target(),
                record.level(),
                message
            ));
        })
        .chain(file)
        .apply()
        .context("logger already installed")?;

    log::info!("n-pad {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
