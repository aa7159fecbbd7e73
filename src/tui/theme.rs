//! Theme system for consistent UI colors across dark and light modes.
//!
//! The studio works in black and white, so both palettes stay close to
//! monochrome with a single warm accent. The OS preference is detected via
//! the `dark-light` crate and can be overridden from config or at runtime.

use crate::config::ThemeMode;
use ratatui::style::Color;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color for errors and the not-found view
    pub error: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for hints and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for cards and elevated panels
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching palette.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured mode into a palette.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates the dark palette: near-monochrome on black, warm gold accent.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::White,
            accent: Color::Rgb(208, 170, 90),
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::Rgb(36, 36, 36),
            surface: Color::Rgb(22, 22, 22),
        }
    }

    /// Creates the light palette, matching the site's paper background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Black,
            accent: Color::Rgb(150, 105, 20),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::Rgb(245, 245, 245),
            highlight_bg: Color::Rgb(228, 228, 228),
            surface: Color::White,
        }
    }

    /// Whether this palette is the dark one.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        *self == Self::dark()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
