//! The two built-in palettes

use ratatui::style::Color;

use super::Theme;

/// Dark palette
pub const DARK: Theme = Theme {
    name: String::new(), // Will be set properly with const fn when stabilized

    // Background colors
    bg_primary: Color::Rgb(26, 27, 38),   // #1a1b26
    bg_secondary: Color::Rgb(36, 40, 59), // #24283b

    // Foreground colors
    fg_primary: Color::Rgb(169, 177, 214),   // #a9b1d6
    fg_secondary: Color::Rgb(192, 202, 245), // #c0caf5
    fg_muted: Color::Rgb(86, 95, 137),       // #565f89

    // Accent colors
    accent_primary: Color::Rgb(122, 162, 247),   // #7aa2f7
    accent_secondary: Color::Rgb(187, 154, 247), // #bb9af7

    // Semantic colors
    success: Color::Rgb(158, 206, 106), // #9ece6a
    warning: Color::Rgb(224, 175, 104), // #e0af68
    error: Color::Rgb(247, 118, 142),   // #f7768e
    info: Color::Rgb(125, 207, 255),    // #7dcfff

    // UI elements
    border: Color::Rgb(65, 72, 104),           // #414868
    border_focused: Color::Rgb(122, 162, 247), // #7aa2f7
    selection: Color::Rgb(40, 52, 87),         // #283457
    cursor: Color::Rgb(192, 202, 245),         // #c0caf5
};

/// Light palette
pub const LIGHT: Theme = Theme {
    name: String::new(),

    // Background colors
    bg_primary: Color::Rgb(244, 244, 249),   // #f4f4f9
    bg_secondary: Color::Rgb(230, 231, 237), // #e6e7ed

    // Foreground colors
    fg_primary: Color::Rgb(52, 59, 88),   // #343b58
    fg_secondary: Color::Rgb(36, 40, 59), // #24283b
    fg_muted: Color::Rgb(121, 128, 156),  // #79809c

    // Accent colors
    accent_primary: Color::Rgb(52, 84, 138),     // #34548a
    accent_secondary: Color::Rgb(136, 87, 163),  // #8857a3

    // Semantic colors
    success: Color::Rgb(56, 119, 52),  // #387734
    warning: Color::Rgb(143, 94, 21),  // #8f5e15
    error: Color::Rgb(140, 67, 81),    // #8c4351
    info: Color::Rgb(15, 117, 153),    // #0f7599

    // UI elements
    border: Color::Rgb(190, 192, 205),         // #bec0cd
    border_focused: Color::Rgb(52, 84, 138),   // #34548a
    selection: Color::Rgb(215, 218, 233),      // #d7dae9
    cursor: Color::Rgb(52, 59, 88),            // #343b58
};

// Workaround for const String
impl Theme {
    pub fn dark() -> Self {
        Theme { name: "Dojo Dark".to_string(), ..DARK }
    }

    pub fn light() -> Self {
        Theme { name: "Dojo Light".to_string(), ..LIGHT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_named() {
        assert_eq!(Theme::dark().name, "Dojo Dark");
        assert_eq!(Theme::light().name, "Dojo Light");
    }

    #[test]
    fn palette_colors_are_rgb() {
        let theme = Theme::dark();
        assert!(matches!(theme.bg_primary, Color::Rgb(_, _, _)));
        assert!(matches!(theme.accent_primary, Color::Rgb(_, _, _)));
    }
}
