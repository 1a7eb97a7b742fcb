//! Color schemes and ANSI escape helpers.
//!
//! Two themes ship with the plugin (`catppuccin-mocha`, the default, and
//! `catppuccin-latte`). Any other palette can be loaded from a TOML file named
//! by the `theme_file` configuration key:
//!
//! ```toml
//! name = "solarized"
//!
//! [colors]
//! header_fg = "#93a1a1"
//! selection_fg = "#002b36"
//! selection_bg = "#268bd2"
//! text_normal = "#839496"
//! text_dim = "#586e75"
//! border = "#073642"
//! search_bar_border = "#d33682"
//! match_highlight_fg = "#002b36"
//! match_highlight_bg = "#b58900"
//! empty_state_fg = "#268bd2"
//! modal_border = "#6c71c4"
//! input_focus_fg = "#859900"
//! danger_fg = "#dc322f"
//! ```
//!
//! Colors are `#rrggbb` strings rendered as 24-bit escapes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{Result, RolodexError};

/// Named palette used by every component.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors for each UI element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar and column header text.
    pub header_fg: String,
    /// Title bar background; unset leaves the terminal background.
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, subtitles and row hints.
    pub text_dim: String,

    /// Horizontal separators.
    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Loading / no users message.
    pub empty_state_fg: String,

    /// Frame of the editor and confirmation dialogs.
    pub modal_border: String,
    /// Label and cursor of the focused form field.
    pub input_focus_fg: String,
    /// Delete prompt accents.
    pub danger_fg: String,
}

impl Theme {
    /// Built-in theme by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`RolodexError::Theme`] if the file cannot be read or does not describe
    /// every required color.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            RolodexError::Theme(format!("cannot read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| RolodexError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// `#rrggbb` to RGB, white when malformed.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reverse() -> &'static str {
        "\u{001b}[7m"
    }

    /// Clears every attribute.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Only if the bundled mocha file stops parsing, which the tests catch.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
