//! Display preferences — word wrap, status bar, font and zoom.
//!
//! These never touch the document. The shell reads them when it renders.
//!
//! | Preference | Default | Notes                                 |
//! |------------|---------|---------------------------------------|
//! | word wrap  | on      | toggled by Format ▸ Word Wrap         |
//! | status bar | shown   | toggled by View ▸ Status Bar          |
//! | font       | Arial   | Format ▸ Font, reset by Restore Zoom  |
//! | font size  | 14      | ±2 per zoom step, never below 8       |

use std::fmt;

/// Family used by Restore Default Zoom and by a fresh session.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Size used by Restore Default Zoom and by a fresh session.
pub const DEFAULT_FONT_SIZE: u16 = 14;

/// Zoom Out never goes below this, and Set Font clamps up to it.
pub const MIN_FONT_SIZE: u16 = 8;

/// Points added or removed by one Zoom In / Zoom Out.
pub const ZOOM_STEP: u16 = 2;

/// The sizes offered by the font chooser.
pub const FONT_SIZES: [u16; 10] = [8, 10, 12, 14, 16, 18, 20, 24, 28, 32];

/// A font family and point size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub size: u16,
}

impl Font {
    /// A font, with the size raised to [`MIN_FONT_SIZE`] if needed.
    #[must_use]
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size: size.max(MIN_FONT_SIZE),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.size)
    }
}

/// Purely presentational settings of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPrefs {
    pub word_wrap: bool,
    pub status_bar: bool,
    pub font: Font,
}

impl DisplayPrefs {
    pub const fn toggle_word_wrap(&mut self) -> bool {
        self.word_wrap = !self.word_wrap;
        self.word_wrap
    }

    pub const fn toggle_status_bar(&mut self) -> bool {
        self.status_bar = !self.status_bar;
        self.status_bar
    }

    /// Replace the font. Sizes below the minimum are raised to it.
    pub fn set_font(&mut self, font: Font) {
        self.font = Font::new(font.family, font.size);
    }

    pub const fn zoom_in(&mut self) -> u16 {
        self.font.size = self.font.size.saturating_add(ZOOM_STEP);
        self.font.size
    }

    pub fn zoom_out(&mut self) -> u16 {
        self.font.size = self.font.size.saturating_sub(ZOOM_STEP).max(MIN_FONT_SIZE);
        self.font.size
    }

    /// Back to the default family and size.
    pub fn reset_zoom(&mut self) {
        self.font = Font::default();
    }
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            word_wrap: true,
            status_bar: true,
            font: Font::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = DisplayPrefs::default();
        assert!(prefs.word_wrap);
        assert!(prefs.status_bar);
        assert_eq!(prefs.font, Font::new("Arial", 14));
    }

    #[test]
    fn toggles_are_involutions() {
        let mut prefs = DisplayPrefs::default();
        assert!(!prefs.toggle_word_wrap());
        assert!(prefs.toggle_word_wrap());
        assert!(!prefs.toggle_status_bar());
        assert!(prefs.toggle_status_bar());
        assert_eq!(prefs, DisplayPrefs::default());
    }

    #[test]
    fn zoom_out_floors_at_minimum() {
        let mut prefs = DisplayPrefs::default();
        prefs.font.size = 10;
        assert_eq!(prefs.zoom_out(), 8);
        assert_eq!(prefs.zoom_out(), 8);
        prefs.font.size = 9;
        assert_eq!(prefs.zoom_out(), 8);
    }

    #[test]
    fn zoom_in_then_reset() {
        let mut prefs = DisplayPrefs::default();
        prefs.set_font(Font::new("Courier New", 32));
        assert_eq!(prefs.zoom_in(), 34);
        prefs.reset_zoom();
        assert_eq!(prefs.font, Font::new(DEFAULT_FONT_FAMILY, 14));
    }

    #[test]
    fn zoom_in_saturates() {
        let mut prefs = DisplayPrefs::default();
        prefs.font.size = u16::MAX - 1;
        assert_eq!(prefs.zoom_in(), u16::MAX);
    }

    #[test]
    fn set_font_clamps_small_sizes() {
        let mut prefs = DisplayPrefs::default();
        prefs.set_font(Font {
            family: "Mono".into(),
            size: 3,
        });
        assert_eq!(prefs.font.size, MIN_FONT_SIZE);
        assert_eq!(prefs.font.family, "Mono");
    }

    #[test]
    fn font_display() {
        assert_eq!(Font::default().to_string(), "Arial 14pt");
    }

    #[test]
    fn chooser_sizes_respect_minimum() {
        assert!(FONT_SIZES.iter().all(|&s| s >= MIN_FONT_SIZE));
        assert!(FONT_SIZES.contains(&DEFAULT_FONT_SIZE));
    }
}
