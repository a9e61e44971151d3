//! Command line at the bottom of the screen

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, CommandMode};
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, theme: &Theme) {
    let (text, style) = match state.mode {
        CommandMode::Normal => {
            if let Some(ref msg) = state.message {
                let style = if state.is_error {
                    Style::default().fg(theme.error)
                } else {
                    Style::default().fg(theme.fg_muted)
                };
                (msg.clone(), style)
            } else {
                (
                    String::from("Press : for commands, / for search, ? for help"),
                    Style::default().fg(theme.fg_muted),
                )
            }
        }
        CommandMode::Command => (state.display_text(), Style::default().fg(theme.accent_primary)),
        CommandMode::Search => (state.display_text(), Style::default().fg(theme.info)),
    };

    // Block cursor at the end while typing
    let line = if state.is_input_mode() {
        let cursor_style = Style::default()
            .fg(theme.bg_primary)
            .bg(theme.cursor)
            .add_modifier(Modifier::BOLD);
        Line::from(vec![Span::styled(text, style), Span::styled(" ", cursor_style)])
    } else {
        Line::from(Span::styled(text, style))
    };

    frame.render_widget(Paragraph::new(line), area);
}
