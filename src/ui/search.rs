//! Search results list

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::app::state::AppState;
use crate::progress::ProgressStore;
use crate::theme::Theme;

use super::layout::section_block;

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, store: &ProgressStore, theme: &Theme) {
    let Some(hits) = &state.search_results else { return };

    let title = format!("Search Results ({})", hits.len());
    let block = section_block(&title, true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if hits.is_empty() {
        let empty = Paragraph::new("No matching topics. Esc to dismiss.")
            .style(Style::default().fg(theme.fg_muted));
        frame.render_widget(empty, inner);
        return;
    }

    state.nav.clamp(hits.len());
    state.nav.ensure_visible(inner.height as usize);

    let items: Vec<ListItem> = hits
        .iter()
        .enumerate()
        .skip(state.nav.scroll_offset)
        .take(inner.height as usize)
        .map(|(i, hit)| {
            let completed = store.state().is_topic_completed(&hit.topic_id);
            let marker = if completed { "[x] " } else { "[ ] " };
            let mut style = Style::default().fg(theme.fg_primary);
            if i == state.nav.selected {
                style = style.bg(theme.selection).add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{}", hit.name), style),
                Span::styled(
                    format!("  ({})", hit.category.display_name()),
                    Style::default().fg(theme.fg_muted),
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}
