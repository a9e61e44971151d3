//! LeetCode section: the problem table and the solution view

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::app::state::{AppState, Pane};
use crate::catalog::{Difficulty, Problem};
use crate::progress::ProgressStore;
use crate::syntax;
use crate::theme::Theme;

use super::layout::section_block;

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, store: &ProgressStore, theme: &Theme) {
    let problems: Vec<&Problem> =
        store.catalog().problems.iter().chain(store.state().custom_problems.iter()).collect();

    state.nav.clamp(problems.len());

    if state.pane == Pane::Detail
        && let Some(problem) = problems.get(state.nav.selected)
    {
        draw_detail(frame, area, problem, store, theme);
        return;
    }

    draw_table(frame, area, state, store, &problems, theme);
}

fn difficulty_color(difficulty: Difficulty, theme: &Theme) -> ratatui::style::Color {
    match difficulty {
        Difficulty::Easy => theme.success,
        Difficulty::Medium => theme.warning,
        Difficulty::Hard => theme.error,
    }
}

fn draw_table(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    store: &ProgressStore,
    problems: &[&Problem],
    theme: &Theme,
) {
    let solved = store.state().completed_problems.len();
    let title = format!("LeetCode ({solved}/{} solved)", problems.len());
    let block = section_block(&title, true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Header row takes one line
    state.nav.ensure_visible(inner.height.saturating_sub(1) as usize);

    let header = Row::new(vec!["", "Problem", "Difficulty", "Tags"])
        .style(Style::default().fg(theme.fg_muted).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = problems
        .iter()
        .enumerate()
        .skip(state.nav.scroll_offset)
        .map(|(i, problem)| {
            let done = store.state().is_problem_completed(&problem.id);
            let marker = if done { "[x]" } else { "[ ]" };
            let name_style = if done {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.fg_primary)
            };

            let row = Row::new(vec![
                Cell::from(marker),
                Cell::from(problem.name.clone()).style(name_style),
                Cell::from(problem.difficulty.as_str())
                    .style(Style::default().fg(difficulty_color(problem.difficulty, theme))),
                Cell::from(problem.tags.join(", ")).style(Style::default().fg(theme.fg_muted)),
            ]);
            if i == state.nav.selected {
                row.style(Style::default().bg(theme.selection).add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Min(16),
        ],
    )
    .header(header);

    frame.render_widget(table, inner);
}

fn draw_detail(frame: &mut Frame, area: Rect, problem: &Problem, store: &ProgressStore, theme: &Theme) {
    let block = section_block(&problem.name, true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(theme.fg_muted)),
            Span::styled(
                problem.difficulty.as_str(),
                Style::default().fg(difficulty_color(problem.difficulty, theme)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Link: ", Style::default().fg(theme.fg_muted)),
            Span::styled(problem.link.clone(), Style::default().fg(theme.info)),
        ]),
    ];

    if !problem.tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags: ", Style::default().fg(theme.fg_muted)),
            Span::styled(problem.tags.join(", "), Style::default().fg(theme.fg_primary)),
        ]));
    }

    if store.state().is_problem_completed(&problem.id) {
        lines.push(Line::from(Span::styled(
            "Solved",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(notes) = &problem.notes {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Notes",
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        for note_line in notes.lines() {
            lines.push(Line::from(Span::styled(
                note_line.to_string(),
                Style::default().fg(theme.fg_primary),
            )));
        }
    }

    if let Some(solution) = &problem.solution {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Solution",
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        for code_line in solution.lines() {
            lines.push(Line::from(syntax::highlight_line(code_line, "java", theme)));
        }
    } else {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "No solution saved (:solution <id> <code>)",
            Style::default().fg(theme.fg_muted),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
