//! UI rendering components

pub mod command_line;
pub mod dashboard;
pub mod help;
pub mod layout;
pub mod plan;
pub mod problems;
pub mod search;
pub mod settings;
pub mod stories;
pub mod topics;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::AppState;
use crate::progress::{ProgressStore, Section};
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, store: &ProgressStore, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    layout::draw_header(frame, chunks[0], state, store, theme);

    let body = chunks[1];
    if state.search_results.is_some() {
        search::draw(frame, body, state, store, theme);
    } else {
        match state.section {
            Section::Dashboard => dashboard::draw(frame, body, store, theme),
            Section::Leetcode => problems::draw(frame, body, state, store, theme),
            Section::Behavioral => stories::draw(frame, body, state, store, theme),
            Section::StudyPlan => plan::draw(frame, body, state, store, theme),
            Section::Settings => settings::draw(frame, body, store, theme),
            _ => topics::draw(frame, body, state, store, theme),
        }
    }

    command_line::draw(frame, chunks[2], &state.command_line, theme);

    if state.show_help {
        help::draw(frame, theme);
    }
}
