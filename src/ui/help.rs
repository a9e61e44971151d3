//! Help overlay

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::Theme;

use super::layout::{centered_rect, section_block};

const KEYS: &[(&str, &str)] = &[
    ("j/k, arrows", "move selection"),
    ("Tab / Shift-Tab", "next / previous section"),
    ("1-9", "jump to section"),
    ("Enter", "open detail / view code"),
    ("Esc", "back / dismiss"),
    ("m", "toggle completion"),
    ("/", "search topics"),
    (":", "command line"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":go <section>", "switch section"),
    (":mark / :unmark <topic>", "set topic completion"),
    (":done / :undone <problem>", "set problem completion"),
    (":plan <YYYY-MM-DD>", "generate a study plan"),
    (":target <YYYY-MM-DD>", "set the interview date"),
    (":story T | S | T | A | R", "add a STAR story"),
    (":problem id | Name | diff | url", "add a problem"),
    (":solution / :notes <id> <text>", "attach code / notes to a problem"),
    (":dark, :reminders, :remind-at", "settings"),
    (":export, :import, :reset", "manage saved progress"),
    (":q", "quit"),
];

pub fn draw(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(frame.area(), 60, 70);
    frame.render_widget(Clear, area);

    let block = section_block("Help", true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        "Keys",
        Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
    ))];
    for (key, description) in KEYS {
        lines.push(help_line(key, description, theme));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Commands",
        Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
    )));
    for (command, description) in COMMANDS {
        lines.push(help_line(command, description, theme));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn help_line(left: &str, right: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {left:<32}"), Style::default().fg(theme.accent_primary)),
        Span::styled(right.to_string(), Style::default().fg(theme.fg_primary)),
    ])
}
