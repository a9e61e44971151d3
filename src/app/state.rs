//! Application state definitions

use crate::catalog::CategoryId;
use crate::progress::Section;

/// Selection and scroll state for a vertical list
#[derive(Debug, Clone, Copy, Default)]
pub struct ListNav {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for long lists
    pub scroll_offset: usize,
}

impl ListNav {
    pub fn move_up(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    pub fn move_down(&mut self, step: usize, len: usize) {
        if len > 0 {
            self.selected = (self.selected + step).min(len - 1);
        }
    }

    pub fn move_top(&mut self) {
        self.selected = 0;
    }

    pub fn move_bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Adjust scroll so the selection stays visible
    pub fn ensure_visible(&mut self, visible_height: usize) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
        if visible_height > 0 && self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }
}

/// Which pane of a category section is focused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    /// The item list
    #[default]
    List,
    /// The detail view for the selected item
    Detail,
    /// The loaded implementation source
    Code,
}

/// A loaded implementation source, ready to render
#[derive(Debug, Clone)]
pub struct CodeView {
    /// Title shown above the source
    pub title: String,
    /// Language tag for highlighting
    pub language: String,
    /// Source text, split on render
    pub content: String,
    /// Scroll position in lines
    pub scroll: usize,
}

/// One search hit across the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub category: CategoryId,
    pub topic_id: String,
    pub name: String,
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Command line hidden or showing a status message
    #[default]
    Normal,
    /// Accepting : commands
    Command,
    /// Accepting / search queries
    Search,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    pub mode: CommandMode,
    /// Input buffer; editing happens at the end
    pub input: String,
    /// Status/error message to display when not in input mode
    pub message: Option<String>,
    pub is_error: bool,
    /// Command history, most recent last
    pub history: Vec<String>,
    history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 200;

    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.message = None;
        self.history_index = None;
    }

    pub fn enter_search_mode(&mut self) {
        self.mode = CommandMode::Search;
        self.input.clear();
        self.message = None;
        self.history_index = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, CommandMode::Command | CommandMode::Search)
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn delete_char(&mut self) {
        self.input.pop();
    }

    /// The text to render, including the mode prefix
    pub fn display_text(&self) -> String {
        match self.mode {
            CommandMode::Normal => self.message.clone().unwrap_or_default(),
            CommandMode::Command => format!(":{}", self.input),
            CommandMode::Search => format!("/{}", self.input),
        }
    }

    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.history_index = match self.history_index {
            None => Some(self.history.len() - 1),
            Some(i) => Some(i.saturating_sub(1)),
        };
        if let Some(i) = self.history_index {
            self.input = self.history[i].clone();
        }
    }

    pub fn history_down(&mut self) {
        if let Some(i) = self.history_index {
            if i + 1 < self.history.len() {
                self.history_index = Some(i + 1);
                self.input = self.history[i + 1].clone();
            } else {
                self.history_index = None;
                self.input.clear();
            }
        }
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Which section is active
    pub section: Section,

    /// Selection in the active section's list; reset on section change
    pub nav: ListNav,

    /// Which pane of the section is focused
    pub pane: Pane,

    /// Selected implementation index in a topic detail view
    pub selected_implementation: usize,

    /// Loaded implementation source, when viewing code
    pub code: Option<CodeView>,

    /// Results from the last `/` search, shown until dismissed
    pub search_results: Option<Vec<SearchHit>>,

    /// Whether the help overlay is visible
    pub show_help: bool,

    /// Command line state
    pub command_line: CommandLineState,
}

impl AppState {
    /// Switch sections, resetting any per-section view state
    pub fn go_to(&mut self, section: Section) {
        self.section = section;
        self.nav = ListNav::default();
        self.pane = Pane::List;
        self.selected_implementation = 0;
        self.code = None;
        self.search_results = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_stays_in_bounds() {
        let mut nav = ListNav::default();
        nav.move_up(1);
        assert_eq!(nav.selected, 0);

        nav.move_down(1, 3);
        nav.move_down(10, 3);
        assert_eq!(nav.selected, 2);

        nav.move_down(1, 0);
        assert_eq!(nav.selected, 2);
        nav.clamp(0);
        assert_eq!(nav.selected, 0);
    }

    #[test]
    fn ensure_visible_scrolls_both_directions() {
        let mut nav = ListNav { selected: 12, scroll_offset: 0 };
        nav.ensure_visible(10);
        assert_eq!(nav.scroll_offset, 3);

        nav.selected = 1;
        nav.ensure_visible(10);
        assert_eq!(nav.scroll_offset, 1);
    }

    #[test]
    fn go_to_resets_view_state() {
        let mut state = AppState::default();
        state.nav.selected = 4;
        state.pane = Pane::Detail;
        state.show_help = true;

        state.go_to(Section::Algorithms);
        assert_eq!(state.nav.selected, 0);
        assert_eq!(state.pane, Pane::List);
        // Help overlay is independent of the section
        assert!(state.show_help);
    }

    #[test]
    fn history_navigates_up_and_down() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("go dashboard".into());
        cl.add_to_history("mark ds-arrays".into());
        // Duplicate of the last entry is not recorded
        cl.add_to_history("mark ds-arrays".into());
        assert_eq!(cl.history.len(), 2);

        cl.history_up();
        assert_eq!(cl.input, "mark ds-arrays");
        cl.history_up();
        assert_eq!(cl.input, "go dashboard");
        cl.history_down();
        assert_eq!(cl.input, "mark ds-arrays");
        cl.history_down();
        assert!(cl.input.is_empty());
    }

    #[test]
    fn display_text_carries_the_mode_prefix() {
        let mut cl = CommandLineState::default();
        cl.enter_command_mode();
        cl.insert_char('q');
        assert_eq!(cl.display_text(), ":q");

        cl.enter_search_mode();
        cl.insert_char('t');
        assert_eq!(cl.display_text(), "/t");

        cl.exit_input_mode();
        cl.set_message("saved");
        assert_eq!(cl.display_text(), "saved");
    }
}
