//! Study plan section

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::state::AppState;
use crate::catalog::CategoryId;
use crate::progress::ProgressStore;
use crate::theme::Theme;

use super::layout::{progress_color, section_block};

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, store: &ProgressStore, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    draw_focus_areas(frame, chunks[0], store, theme);
    draw_days(frame, chunks[1], state, store, theme);
}

/// The three weakest categories right now
fn draw_focus_areas(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let block = section_block("Focus Areas", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut scored: Vec<(CategoryId, u8)> = CategoryId::ALL
        .into_iter()
        .map(|id| (id, store.state().category_percentage(id)))
        .collect();
    scored.sort_by_key(|&(_, percent)| percent);

    let mut spans: Vec<Span> = scored
        .iter()
        .take(3)
        .flat_map(|&(id, percent)| {
            vec![
                Span::styled(
                    format!(" {} ", id.display_name()),
                    Style::default().fg(theme.fg_secondary),
                ),
                Span::styled(
                    format!("{percent}% "),
                    Style::default().fg(progress_color(percent, theme)),
                ),
                Span::styled("|", Style::default().fg(theme.border)),
            ]
        })
        .collect();
    spans.pop();

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_days(frame: &mut Frame, area: Rect, state: &mut AppState, store: &ProgressStore, theme: &Theme) {
    let plan = &store.state().study_plan;
    let title = match store.state().settings.target_date {
        Some(target) => format!("Study Plan (target {target})"),
        None => "Study Plan".to_string(),
    };
    let block = section_block(&title, true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if plan.is_empty() {
        let hint = Paragraph::new(
            "No plan yet. Generate one with :plan YYYY-MM-DD\n\n\
             Topics are spread across the days before your target date,\n\
             rotating between categories.",
        )
        .style(Style::default().fg(theme.fg_muted))
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, inner);
        return;
    }

    state.nav.clamp(plan.len());

    // Completion reflects today's state, not the state when the plan
    // was generated
    let mut lines: Vec<Line> = Vec::new();
    for (i, day) in plan.iter().enumerate().skip(state.nav.scroll_offset) {
        let done = day.topics.iter().filter(|t| store.state().is_topic_completed(&t.id)).count();
        let day_style = if i == state.nav.selected {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            format!("Day {} - {} ({done}/{})", i + 1, day.date, day.topics.len()),
            day_style,
        )));

        for topic in &day.topics {
            let completed = store.state().is_topic_completed(&topic.id);
            let marker = if completed { "[x] " } else { "[ ] " };
            let style = if completed {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.fg_primary)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {marker}{}", topic.name), style),
                Span::styled(
                    format!("  ({})", topic.category.display_name()),
                    Style::default().fg(theme.fg_muted),
                ),
            ]));
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
