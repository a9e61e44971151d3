//! Behavioral section: prep topics and STAR stories

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use crate::app::state::{AppState, Pane};
use crate::catalog::CategoryId;
use crate::progress::{ProgressStore, StarStory};
use crate::theme::Theme;

use super::layout::section_block;

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, store: &ProgressStore, theme: &Theme) {
    let topics = store
        .catalog()
        .category(CategoryId::Behavioral)
        .map(|c| c.topics.as_slice())
        .unwrap_or_default();
    let stories = &store.state().star_stories;
    let total = topics.len() + stories.len();

    state.nav.clamp(total);

    // A selected story opens full-screen
    if state.pane == Pane::Detail
        && state.nav.selected >= topics.len()
        && let Some(story) = stories.get(state.nav.selected - topics.len())
    {
        draw_story_detail(frame, area, story, theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(topics.len() as u16 + 2), Constraint::Min(5)])
        .split(area);

    draw_topic_list(frame, chunks[0], state, store, theme);
    draw_story_list(frame, chunks[1], state, store, topics.len(), theme);
}

fn draw_topic_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    store: &ProgressStore,
    theme: &Theme,
) {
    let block = section_block("Preparation Topics", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let topics = store
        .catalog()
        .category(CategoryId::Behavioral)
        .map(|c| c.topics.as_slice())
        .unwrap_or_default();

    let items: Vec<ListItem> = topics
        .iter()
        .enumerate()
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

fn draw_story_list(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    store: &ProgressStore,
    topic_count: usize,
    theme: &Theme,
) {
    let stories = &store.state().star_stories;
    let percent = store.state().category_percentage(CategoryId::Behavioral);
    let title = format!("STAR Stories ({} written, {percent}%)", stories.len());
    let block = section_block(&title, true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if stories.is_empty() {
        let hint = Paragraph::new(
            "No stories yet. Add one with\n:story Title | Situation | Task | Action | Result",
        )
        .style(Style::default().fg(theme.fg_muted))
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, inner);
        return;
    }

    let items: Vec<ListItem> = stories
        .iter()
        .enumerate()
        .map(|(i, story)| {
            let mut style = Style::default().fg(theme.fg_secondary);
            if topic_count + i == state.nav.selected {
                style = style.bg(theme.selection).add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(story.title.clone(), style),
                Span::styled(format!("  ({})", story.category), Style::default().fg(theme.fg_muted)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}

fn draw_story_detail(frame: &mut Frame, area: Rect, story: &StarStory, theme: &Theme) {
    let block = section_block(&story.title, true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!("Category: {}", story.category),
        Style::default().fg(theme.fg_muted),
    ))];

    for (label, text) in [
        ("Situation", &story.situation),
        ("Task", &story.task),
        ("Action", &story.action),
        ("Result", &story.result),
    ] {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(text.clone(), Style::default().fg(theme.fg_primary))));
    }

    if !story.questions.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Answers questions like",
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        for question in &story.questions {
            lines.push(Line::from(Span::styled(
                format!("  - {question}"),
                Style::default().fg(theme.fg_primary),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
