//! Dashboard: overall stats, per-category progress, and what to study next

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph},
};

use crate::catalog::CategoryId;
use crate::progress::{ProgressStore, recommend};
use crate::theme::Theme;

use super::layout::{progress_color, section_block};

pub fn draw(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(CategoryId::ALL.len() as u16 + 2),
            Constraint::Min(4),
        ])
        .split(area);

    draw_stats(frame, chunks[0], store, theme);
    draw_category_bars(frame, chunks[1], store, theme);
    draw_recommendations(frame, chunks[2], store, theme);
}

/// Completion counts and the countdown to the target date
fn draw_stats(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let state = store.state();
    let topics_done = state.completed_topics.len();
    let topics_total = store.catalog().all_topics().count();
    let problems_done = state.completed_problems.len();
    let problems_total = store.catalog().problems.len() + state.custom_problems.len();

    let countdown = match state.settings.target_date {
        Some(target) => {
            let days = (target - Local::now().date_naive()).num_days();
            if days > 0 {
                format!("{days} days until {target}")
            } else {
                "Interview day!".to_string()
            }
        }
        None => "No target date set (:plan YYYY-MM-DD)".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" Topics {topics_done}/{topics_total} "),
            Style::default().fg(theme.fg_secondary),
        ),
        Span::styled("| ", Style::default().fg(theme.border)),
        Span::styled(
            format!("Problems {problems_done}/{problems_total} "),
            Style::default().fg(theme.fg_secondary),
        ),
        Span::styled("| ", Style::default().fg(theme.border)),
        Span::styled(
            format!("Stories {} ", state.star_stories.len()),
            Style::default().fg(theme.fg_secondary),
        ),
        Span::styled("| ", Style::default().fg(theme.border)),
        Span::styled(countdown, Style::default().fg(theme.info)),
    ]);

    let block = section_block("Stats", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line), inner);
}

/// One gauge per category
fn draw_category_bars(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let block = section_block("Progress by Category", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); CategoryId::ALL.len()])
        .split(inner);

    for (row, id) in rows.iter().zip(CategoryId::ALL) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(18), Constraint::Min(10)])
            .split(*row);

        let percent = store.state().category_percentage(id);
        let label = Paragraph::new(id.display_name()).style(Style::default().fg(theme.fg_primary));
        frame.render_widget(label, columns[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(progress_color(percent, theme)).bg(theme.bg_secondary))
            .label(format!("{percent}%"))
            .percent(percent as u16);
        frame.render_widget(gauge, columns[1]);
    }
}

/// The priority-ordered shortlist of incomplete topics
fn draw_recommendations(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let block = section_block("Recommended Next", false, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let recs = recommend::by_priority(store.catalog(), &store.state().completed_topics);
    if recs.is_empty() {
        let done = Paragraph::new("All topics completed!")
            .style(Style::default().fg(theme.success).add_modifier(Modifier::BOLD));
        frame.render_widget(done, inner);
        return;
    }

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
