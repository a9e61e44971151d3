//! Category sections: topic list, topic detail, and the code viewer

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::app::state::{AppState, CodeView, Pane};
use crate::catalog::Topic;
use crate::progress::{ProgressStore, recommend};
use crate::syntax;
use crate::theme::Theme;

use super::layout::section_block;

/// How many suggestions to show under the topic list
const SUGGESTION_COUNT: usize = 3;

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, store: &ProgressStore, theme: &Theme) {
    if state.pane == Pane::Code
        && let Some(code) = &state.code
    {
        draw_code(frame, area, code, theme);
        return;
    }

    let Some(category_id) = state.section.category() else { return };
    let Some(category) = store.catalog().category(category_id) else { return };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(SUGGESTION_COUNT as u16 + 2)])
        .split(chunks[0]);

    draw_list(frame, left[0], state, store, category_id, &category.topics, theme);
    draw_suggestions(frame, left[1], store, theme);

    state.nav.clamp(category.topics.len());
    if let Some(topic) = category.topics.get(state.nav.selected) {
        draw_detail(frame, chunks[1], state, store, topic, theme);
    }
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    store: &ProgressStore,
    category_id: crate::catalog::CategoryId,
    topics: &[Topic],
    theme: &Theme,
) {
    let title =
        format!("{} ({}%)", state.section.title(), store.state().category_percentage(category_id));
    let block = section_block(&title, state.pane == Pane::List, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    state.nav.clamp(topics.len());
    state.nav.ensure_visible(inner.height as usize);

    let items: Vec<ListItem> = topics
        .iter()
        .enumerate()
        .skip(state.nav.scroll_offset)
        .take(inner.height as usize)
        .map(|(i, topic)| {
            let completed = store.state().is_topic_completed(&topic.id);
            let marker = if completed { "[x] " } else { "[ ] " };
            let mut style = if completed {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.fg_primary)
            };
            if i == state.nav.selected {
                style = style.bg(theme.selection).add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(Span::styled(format!("{marker}{}", topic.name), style)))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

/// Incomplete topics with code samples, surfaced for hands-on practice
fn draw_suggestions(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let block = section_block("Try Next", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let recs = recommend::by_implementation(
        store.catalog(),
        &store.state().completed_topics,
        SUGGESTION_COUNT,
    );
    let items: Vec<ListItem> = recs
        .into_iter()
        .map(|rec| {
            ListItem::new(Line::from(vec![
                Span::styled(rec.name, Style::default().fg(theme.fg_secondary)),
                Span::styled(
                    format!("  ({})", rec.category.display_name()),
                    Style::default().fg(theme.fg_muted),
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    store: &ProgressStore,
    topic: &Topic,
    theme: &Theme,
) {
    let block = section_block(&topic.name, state.pane == Pane::Detail, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    let width = inner.width.saturating_sub(2).max(20) as usize;
    for wrapped in textwrap::wrap(&topic.description, width) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Style::default().fg(theme.fg_primary),
        )));
    }
    lines.push(Line::default());

    if store.state().is_topic_completed(&topic.id) {
        lines.push(Line::from(Span::styled(
            "Completed",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    if !topic.complexity.is_empty() {
        lines.push(Line::from(Span::styled(
            "Complexity",
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        for (operation, cost) in &topic.complexity {
            lines.push(Line::from(vec![
                Span::styled(format!("  {operation:<24}"), Style::default().fg(theme.fg_primary)),
                Span::styled(cost.clone(), Style::default().fg(theme.warning)),
            ]));
        }
        lines.push(Line::default());
    }

    if !topic.implementations.is_empty() {
        lines.push(Line::from(Span::styled(
            "Implementations (Enter to view)",
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        for (i, implementation) in topic.implementations.iter().enumerate() {
            let marker = if state.pane == Pane::Detail && i == state.selected_implementation {
                "> "
            } else {
                "  "
            };
            let style = if state.pane == Pane::Detail && i == state.selected_implementation {
                Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_primary)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}", implementation.name), style),
                Span::styled(
                    format!("  [{}]", implementation.language),
                    Style::default().fg(theme.fg_muted),
                ),
            ]));
        }
        lines.push(Line::default());
    }

    if !topic.resources.is_empty() {
        lines.push(Line::from(Span::styled(
            "Resources",
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        for resource in &topic.resources {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", resource.name), Style::default().fg(theme.fg_primary)),
                Span::styled(resource.url.clone(), Style::default().fg(theme.info)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Full-width highlighted source view
fn draw_code(frame: &mut Frame, area: Rect, code: &CodeView, theme: &Theme) {
    let block = section_block(&code.title, true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = code
        .content
        .lines()
        .skip(code.scroll)
        .take(inner.height as usize)
        .map(|line| Line::from(syntax::highlight_line(line, &code.language, theme)))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.bg_secondary)),
        inner,
    );
}
