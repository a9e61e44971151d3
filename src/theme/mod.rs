//! Color themes

mod palette;

pub use palette::{DARK, LIGHT};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub cursor: Color,
}

impl Theme {
    /// The theme selected by the dark-mode setting
    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::dark() } else { Theme::light() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_setting_selects_the_dark_theme() {
        assert_eq!(Theme::for_dark_mode(true).name, "Dojo Dark");
        assert_eq!(Theme::for_dark_mode(false).name, "Dojo Light");
    }
}
