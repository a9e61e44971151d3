//! Header bar and shared layout helpers

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::state::AppState;
use crate::progress::{ProgressStore, Section};
use crate::theme::Theme;

/// Draw the header: section tabs on the left, overall progress on the right
pub fn draw_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    store: &ProgressStore,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(inner);

    frame.render_widget(tab_line(state.section, theme), chunks[0]);

    let overall = store.overall_percentage();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(progress_color(overall, theme)).bg(theme.bg_secondary))
        .label(format!("Overall {overall}%"))
        .percent(overall as u16);
    frame.render_widget(gauge, centered_vertically(chunks[1], 1));
}

/// One tab per section, the active one highlighted
fn tab_line(active: Section, theme: &Theme) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, section) in Section::ALL.into_iter().enumerate() {
        let style = if section == active {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, section.title()), style));
        spans.push(Span::styled("|", Style::default().fg(theme.border)));
    }
    spans.pop();
    Paragraph::new(Line::from(spans))
}

/// A bordered block with the standard styling
pub fn section_block(title: &str, focused: bool, theme: &Theme) -> Block<'static> {
    let border_color = if focused { theme.border_focused } else { theme.border };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary))
}

/// Color for a progress value: red below a third, yellow below two, green above
pub fn progress_color(percent: u8, theme: &Theme) -> ratatui::style::Color {
    match percent {
        0..=33 => theme.error,
        34..=66 => theme.warning,
        _ => theme.success,
    }
}

/// Shrink an area to `height` rows, vertically centered
pub fn centered_vertically(area: Rect, height: u16) -> Rect {
    if area.height <= height {
        return area;
    }
    let top = (area.height - height) / 2;
    Rect { y: area.y + top, height, ..area }
}

/// A centered rectangle for overlays, as a fraction of the frame
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_color_bands() {
        let theme = Theme::default();
        assert_eq!(progress_color(0, &theme), theme.error);
        assert_eq!(progress_color(33, &theme), theme.error);
        assert_eq!(progress_color(34, &theme), theme.warning);
        assert_eq!(progress_color(67, &theme), theme.success);
        assert_eq!(progress_color(100, &theme), theme.success);
    }

    #[test]
    fn centered_rect_is_inside_the_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 50);
        assert!(rect.x >= area.x && rect.right() <= area.right());
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
    }

    #[test]
    fn centered_vertically_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 10, 1);
        assert_eq!(centered_vertically(area, 3), area);
    }
}
