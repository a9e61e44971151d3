//! Key handling

use crossterm::event::{KeyCode, KeyModifiers};

use crate::progress::Section;

/// Vim-style key mapping (basic, without modifiers)
pub fn vim_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::Char('d') | KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Char('u') | KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('/') => Some(Action::Search),
        KeyCode::Char('?') => Some(Action::Help),
        // Section navigation
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextSection),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevSection),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Section::ALL.get(index).map(|&section| Action::GoSection(section))
        }
        // Mark complete
        KeyCode::Char('m') => Some(Action::ToggleComplete),
        // Note: 'q' intentionally not mapped - use :q command to quit
        _ => None,
    }
}

/// Key mapping with modifiers (for Ctrl combinations)
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('d') | KeyCode::Char('f') => Some(Action::PageDown),
            KeyCode::Char('u') | KeyCode::Char('b') => Some(Action::PageUp),
            _ => None,
        }
    } else {
        vim_key_to_action(key)
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,

    // Sections
    NextSection,
    PrevSection,
    GoSection(Section),

    // Selection
    Select,
    Back,

    // Progress
    ToggleComplete,

    // Modes
    Search,
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(vim_key_to_action(KeyCode::Char('j')), Some(Action::Down));
    }

    #[test]
    fn vim_k_maps_to_up() {
        assert_eq!(vim_key_to_action(KeyCode::Char('k')), Some(Action::Up));
    }

    #[test]
    fn digits_jump_to_sections() {
        assert_eq!(
            vim_key_to_action(KeyCode::Char('1')),
            Some(Action::GoSection(Section::Dashboard))
        );
        assert_eq!(
            vim_key_to_action(KeyCode::Char('7')),
            Some(Action::GoSection(Section::Leetcode))
        );
        assert_eq!(
            vim_key_to_action(KeyCode::Char('9')),
            Some(Action::GoSection(Section::Settings))
        );
    }

    #[test]
    fn tab_cycles_sections() {
        assert_eq!(vim_key_to_action(KeyCode::Tab), Some(Action::NextSection));
        assert_eq!(vim_key_to_action(KeyCode::BackTab), Some(Action::PrevSection));
    }

    #[test]
    fn m_toggles_completion() {
        assert_eq!(vim_key_to_action(KeyCode::Char('m')), Some(Action::ToggleComplete));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(vim_key_to_action(KeyCode::Char('x')), None);
    }

    #[test]
    fn ctrl_d_pages_down() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('d'), KeyModifiers::CONTROL),
            Some(Action::PageDown)
        );
    }

    #[test]
    fn no_modifier_uses_vim_keys() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::Down)
        );
    }
}
