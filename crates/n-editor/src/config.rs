//! User configuration — `config.toml`.
//!
//! The file is optional. Every key has a default, unknown keys are rejected
//! so typos do not silently do nothing.
//!
//! ```toml
//! [display]
//! word-wrap = true
//! status-bar = true
//! font-family = "Arial"
//! font-size = 14
//!
//! [editor]
//! system-clipboard = true
//! wrap-width = 80
//! print-command = "lpr"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::prefs::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DisplayPrefs, Font, MIN_FONT_SIZE};

/// Errors from loading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("font-size {0} is below the minimum of {min}", min = MIN_FONT_SIZE)]
    FontTooSmall(u16),
}

/// `[display]` — initial display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DisplayConfig {
    pub word_wrap: bool,
    pub status_bar: bool,
    pub font_family: String,
    pub font_size: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            word_wrap: true,
            status_bar: true,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// `[editor]` — shell behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EditorConfig {
    /// Mirror Cut/Copy/Paste to the system clipboard when one is reachable.
    pub system_clipboard: bool,
    /// Column at which the shell wraps lines when word wrap is on.
    pub wrap_width: usize,
    /// Program that File ▸ Print pipes the document into.
    pub print_command: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            system_clipboard: true,
            wrap_width: 80,
            print_command: "lpr".to_string(),
        }
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub editor: EditorConfig,
}

impl Config {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys, or a font size
    /// below the minimum.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        if config.display.font_size < MIN_FONT_SIZE {
            return Err(ConfigError::FontTooSmall(config.display.font_size));
        }
        Ok(config)
    }

    /// Load `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::from_toml(&source),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// The display preferences a session starts with.
    #[must_use]
    pub fn display_prefs(&self) -> DisplayPrefs {
        DisplayPrefs {
            word_wrap: self.display.word_wrap,
            status_bar: self.display.status_bar,
            font: Font::new(self.display.font_family.clone(), self.display.font_size),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
