//! Settings section

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::progress::ProgressStore;
use crate::theme::Theme;

use super::layout::section_block;

pub fn draw(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let block = section_block("Settings", true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let settings = &store.state().settings;
    let on_off = |enabled: bool| if enabled { "on" } else { "off" };

    let rows: [(&str, String, &str); 4] = [
        ("Dark mode", on_off(settings.dark_mode).to_string(), ":dark"),
        ("Reminders", on_off(settings.reminder_enabled).to_string(), ":reminders on|off"),
        (
            "Reminder time",
            settings.reminder_time.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "not set".to_string()),
            ":remind-at HH:MM",
        ),
        (
            "Target date",
            settings.target_date.map(|d| d.to_string()).unwrap_or_else(|| "not set".to_string()),
            ":target YYYY-MM-DD",
        ),
    ];

    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value, command)| {
            Line::from(vec![
                Span::styled(format!("{label:<16}"), Style::default().fg(theme.fg_primary)),
                Span::styled(format!("{value:<12}"), Style::default().fg(theme.accent_primary)),
                Span::styled(command.to_string(), Style::default().fg(theme.fg_muted)),
            ])
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Data",
        Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        ":export [path]   write progress to a JSON file",
        Style::default().fg(theme.fg_muted),
    )));
    lines.push(Line::from(Span::styled(
        ":import <path>   merge progress from a JSON file",
        Style::default().fg(theme.fg_muted),
    )));
    lines.push(Line::from(Span::styled(
        ":reset           discard all progress",
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
