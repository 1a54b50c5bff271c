// SPDX-License-Identifier: MIT
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// A menu-driven terminal notepad.
#[derive(Parser, Debug)]
#[command(name = "n-pad", version, about, long_about = None)]
pub struct Cli {
    /// File to open at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbosity: u8,

    /// Write logs to a specific file
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Load configuration from a specific file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,
}
