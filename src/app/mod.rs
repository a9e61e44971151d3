//! Application state and event handling

pub mod command;
pub mod input;
pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::catalog::{Problem, loader};
use crate::progress::{ProgressStore, Section, StarStory};
use crate::theme::Theme;
use crate::ui;
use command::{Command, ParseResult};
use input::Action;
use state::{AppState, CodeView, CommandMode, Pane, SearchHit};

/// The main application
pub struct App {
    /// Progress store owning catalog, state and persistence
    store: ProgressStore,

    /// Current view state
    state: AppState,

    /// Active theme, follows the dark-mode setting
    theme: Theme,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance, resuming the persisted section
    pub fn new(store: ProgressStore) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let theme = Theme::for_dark_mode(store.state().settings.dark_mode);
        let mut state = AppState::default();
        state.section = store.state().current_section;

        Ok(Self { store, state, theme, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.store, &self.theme);
            })?;

            if event::poll(std::time::Duration::from_millis(16))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match self.handle_key(key).await {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => {
                        tracing::error!("Error handling key: {e:#}");
                        self.state.command_line.set_error(format!("{e:#}"));
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if should exit
    async fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if self.state.command_line.is_input_mode() {
            return self.handle_input_key(key).await;
        }

        if self.state.show_help {
            self.state.show_help = false;
            return Ok(false);
        }

        match key.code {
            KeyCode::Char(':') => {
                self.state.command_line.enter_command_mode();
                Ok(false)
            }
            KeyCode::Char('/') => {
                self.state.command_line.enter_search_mode();
                Ok(false)
            }
            code => {
                if let Some(action) = input::key_with_modifier_to_action(code, key.modifiers) {
                    return self.handle_action(action).await;
                }
                Ok(false)
            }
        }
    }

    /// Key handling while the command line is accepting input
    async fn handle_input_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Esc => self.state.command_line.exit_input_mode(),
            KeyCode::Backspace => self.state.command_line.delete_char(),
            KeyCode::Up => self.state.command_line.history_up(),
            KeyCode::Down => self.state.command_line.history_down(),
            KeyCode::Enter => {
                let mode = self.state.command_line.mode;
                let text = self.state.command_line.input.clone();
                self.state.command_line.add_to_history(text.clone());
                self.state.command_line.exit_input_mode();
                match mode {
                    CommandMode::Command => return self.execute_line(&text),
                    CommandMode::Search => self.execute_search(&text),
                    CommandMode::Normal => {}
                }
            }
            KeyCode::Char(c) => self.state.command_line.insert_char(c),
            _ => {}
        }
        Ok(false)
    }

    /// Parse and run a : command line
    fn execute_line(&mut self, text: &str) -> Result<bool> {
        match command::parse_command(text) {
            ParseResult::Ok(cmd) => self.execute_command(cmd),
            ParseResult::UnknownCommand(cmd) => {
                self.state.command_line.set_error(format!("Unknown command: {cmd}"));
                Ok(false)
            }
            ParseResult::MissingArgument(cmd) => {
                self.state.command_line.set_error(format!("Command `{cmd}` needs an argument"));
                Ok(false)
            }
            ParseResult::InvalidArgument(msg) => {
                self.state.command_line.set_error(msg);
                Ok(false)
            }
        }
    }

    fn execute_command(&mut self, cmd: Command) -> Result<bool> {
        match cmd {
            Command::Quit => return Ok(true),
            Command::Nop => {}
            Command::Help => self.state.show_help = !self.state.show_help,
            Command::Go(section) => self.go_to(section)?,
            Command::Mark(id) => self.set_topic(&id, true)?,
            Command::Unmark(id) => self.set_topic(&id, false)?,
            Command::Done(id) => self.set_problem(&id, true)?,
            Command::Undone(id) => self.set_problem(&id, false)?,
            Command::Plan(target) => match self.store.generate_plan(target) {
                Ok(plan) => {
                    self.state.command_line.set_message(plan.message);
                    self.go_to(Section::StudyPlan)?;
                }
                Err(e) => self.state.command_line.set_error(format!("{e}")),
            },
            Command::Target(target) => {
                self.store.update_settings(|s| s.target_date = Some(target))?;
                self.state.command_line.set_message(format!("Target date set to {target}"));
            }
            Command::Dark(mode) => {
                self.store.update_settings(|s| s.dark_mode = mode.unwrap_or(!s.dark_mode))?;
                let dark = self.store.state().settings.dark_mode;
                self.theme = Theme::for_dark_mode(dark);
                self.state
                    .command_line
                    .set_message(if dark { "Dark mode on" } else { "Dark mode off" });
            }
            Command::Reminders(enabled) => {
                self.store.update_settings(|s| s.reminder_enabled = enabled)?;
                self.state
                    .command_line
                    .set_message(if enabled { "Reminders enabled" } else { "Reminders disabled" });
            }
            Command::RemindAt(time) => {
                self.store.update_settings(|s| s.reminder_time = Some(time))?;
                self.state.command_line.set_message(format!("Reminder time set to {time}"));
            }
            Command::Story(draft) => {
                let story = StarStory {
                    id: String::new(),
                    title: draft.title,
                    category: draft.category.unwrap_or_else(|| "General".to_string()),
                    situation: draft.situation,
                    task: draft.task,
                    action: draft.action,
                    result: draft.result,
                    questions: Vec::new(),
                };
                let id = self.store.add_story(story)?;
                self.state.command_line.set_message(format!("Added story {id}"));
            }
            Command::AddProblem(draft) => {
                let problem = Problem::new(draft.id, draft.name, draft.difficulty, draft.link)
                    .with_tags(draft.tags);
                match self.store.add_problem(problem) {
                    Ok(()) => self.state.command_line.set_message("Problem added"),
                    Err(e) => self.state.command_line.set_error(format!("{e}")),
                }
            }
            Command::Solution { id, text } => match self.store.save_solution(&id, text, None) {
                Ok(()) => self.state.command_line.set_message(format!("Solution saved for {id}")),
                Err(e) => self.state.command_line.set_error(format!("{e}")),
            },
            Command::Notes { id, text } => match self.store.save_notes(&id, text) {
                Ok(()) => self.state.command_line.set_message(format!("Notes saved for {id}")),
                Err(e) => self.state.command_line.set_error(format!("{e}")),
            },
            Command::Export(path) => {
                let snapshot = self.store.export_snapshot()?;
                crate::storage::write_export(&path, &snapshot)?;
                self.state
                    .command_line
                    .set_message(format!("Exported progress to {}", path.display()));
            }
            Command::Import(path) => {
                let text = crate::storage::read_import(&path)?;
                match self.store.import_snapshot(&text) {
                    Ok(()) => self
                        .state
                        .command_line
                        .set_message(format!("Imported progress from {}", path.display())),
                    Err(e) => self.state.command_line.set_error(format!("{e:#}")),
                }
            }
            Command::Reset => {
                self.store.reset()?;
                self.go_to(Section::Dashboard)?;
                self.state.command_line.set_message("All progress reset");
            }
            Command::Search(query) => self.execute_search(&query),
        }
        Ok(false)
    }

    /// Search topic names and descriptions across the catalog
    fn execute_search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.state.search_results = None;
            return;
        }
        let hits: Vec<SearchHit> = self
            .store
            .catalog()
            .search(query)
            .into_iter()
            .map(|(category, topic)| SearchHit {
                category,
                topic_id: topic.id.clone(),
                name: topic.name.clone(),
            })
            .collect();

        self.state.command_line.set_message(format!("{} matches for `{query}`", hits.len()));
        self.state.nav = state::ListNav::default();
        self.state.search_results = Some(hits);
    }

    fn go_to(&mut self, section: Section) -> Result<()> {
        self.state.go_to(section);
        self.store.set_current_section(section)
    }

    fn set_topic(&mut self, id: &str, completed: bool) -> Result<()> {
        if self.store.catalog().find_topic(id).is_none() {
            self.state.command_line.set_error(format!("Unknown topic id: {id}"));
            return Ok(());
        }
        self.store.set_topic_completed(id, completed)?;
        self.state
            .command_line
            .set_message(format!("{} {id}", if completed { "Completed" } else { "Uncompleted" }));
        Ok(())
    }

    fn set_problem(&mut self, id: &str, completed: bool) -> Result<()> {
        let known = self.store.catalog().find_problem(id).is_some()
            || self.store.state().custom_problems.iter().any(|p| p.id == id);
        if !known {
            self.state.command_line.set_error(format!("Unknown problem id: {id}"));
            return Ok(());
        }
        self.store.set_problem_completed(id, completed)?;
        self.state
            .command_line
            .set_message(format!("{} {id}", if completed { "Solved" } else { "Unsolved" }));
        Ok(())
    }

    /// Number of rows in the active section's navigable list
    fn active_list_len(&self) -> usize {
        if let Some(hits) = &self.state.search_results {
            return hits.len();
        }
        match self.state.section {
            Section::Leetcode => {
                self.store.catalog().problems.len() + self.store.state().custom_problems.len()
            }
            Section::Behavioral => {
                let topics = self
                    .store
                    .catalog()
                    .category(crate::catalog::CategoryId::Behavioral)
                    .map(|c| c.topics.len())
                    .unwrap_or(0);
                topics + self.store.state().star_stories.len()
            }
            Section::StudyPlan => self.store.state().study_plan.len(),
            other => other
                .category()
                .and_then(|id| self.store.catalog().category(id))
                .map(|c| c.topics.len())
                .unwrap_or(0),
        }
    }

    async fn handle_action(&mut self, action: Action) -> Result<bool> {
        let len = self.active_list_len();
        match action {
            Action::Up => self.move_selection(-1, len),
            Action::Down => self.move_selection(1, len),
            Action::Top => {
                if self.state.pane == Pane::Code {
                    if let Some(code) = &mut self.state.code {
                        code.scroll = 0;
                    }
                } else {
                    self.state.nav.move_top();
                }
            }
            Action::Bottom => self.state.nav.move_bottom(len),
            Action::PageUp => self.move_selection(-10, len),
            Action::PageDown => self.move_selection(10, len),
            Action::NextSection => {
                let next = section_offset(self.state.section, 1);
                self.go_to(next)?;
            }
            Action::PrevSection => {
                let prev = section_offset(self.state.section, -1);
                self.go_to(prev)?;
            }
            Action::GoSection(section) => self.go_to(section)?,
            Action::Select => return self.handle_select().await.map(|_| false),
            Action::Back => self.handle_back(),
            Action::ToggleComplete => self.toggle_selected()?,
            Action::Search => self.state.command_line.enter_search_mode(),
            Action::Help => self.state.show_help = !self.state.show_help,
        }
        Ok(false)
    }

    fn move_selection(&mut self, delta: isize, len: usize) {
        match self.state.pane {
            Pane::Code => {
                if let Some(code) = &mut self.state.code {
                    code.scroll =
                        code.scroll.saturating_add_signed(delta).min(code.content.lines().count());
                }
            }
            Pane::Detail => {
                let impls = self.selected_topic_implementation_count();
                if impls > 0 {
                    let next = self.state.selected_implementation.saturating_add_signed(delta);
                    self.state.selected_implementation = next.min(impls - 1);
                }
            }
            Pane::List => {
                if delta < 0 {
                    self.state.nav.move_up(delta.unsigned_abs());
                } else {
                    self.state.nav.move_down(delta as usize, len);
                }
            }
        }
    }

    fn selected_topic_implementation_count(&self) -> usize {
        self.selected_topic_id()
            .and_then(|id| self.store.catalog().find_topic(&id))
            .map(|(_, topic)| topic.implementations.len())
            .unwrap_or(0)
    }

    /// The topic id under the cursor, in a category section or search list
    fn selected_topic_id(&self) -> Option<String> {
        if let Some(hits) = &self.state.search_results {
            return hits.get(self.state.nav.selected).map(|h| h.topic_id.clone());
        }
        let category = self.state.section.category()?;
        let topics = &self.store.catalog().category(category)?.topics;
        topics.get(self.state.nav.selected).map(|t| t.id.clone())
    }

    /// The problem id under the cursor in the problem list
    fn selected_problem_id(&self) -> Option<String> {
        let catalog_problems = &self.store.catalog().problems;
        let index = self.state.nav.selected;
        if index < catalog_problems.len() {
            return Some(catalog_problems[index].id.clone());
        }
        self.store
            .state()
            .custom_problems
            .get(index - catalog_problems.len())
            .map(|p| p.id.clone())
    }

    async fn handle_select(&mut self) -> Result<()> {
        // Jump to a search hit's home section
        if self.state.search_results.is_some() {
            let hit = self
                .state
                .search_results
                .as_ref()
                .and_then(|hits| hits.get(self.state.nav.selected))
                .map(|hit| (hit.category, hit.topic_id.clone()));
            if let Some((category, topic_id)) = hit {
                let section = Section::from(category);
                self.go_to(section)?;
                if let Some(cat) = self.store.catalog().category(category)
                    && let Some(index) = cat.topics.iter().position(|t| t.id == topic_id)
                {
                    self.state.nav.selected = index;
                }
            }
            return Ok(());
        }

        match self.state.pane {
            Pane::List if self.state.section.category().is_some() => {
                if self.state.section == Section::Leetcode
                    || self.state.section == Section::Behavioral
                {
                    self.state.pane = Pane::Detail;
                } else if self.selected_topic_id().is_some() {
                    self.state.pane = Pane::Detail;
                    self.state.selected_implementation = 0;
                }
            }
            Pane::Detail => self.load_selected_implementation().await,
            _ => {}
        }
        Ok(())
    }

    /// Load the highlighted implementation's source into the code view
    async fn load_selected_implementation(&mut self) {
        let Some(topic_id) = self.selected_topic_id() else { return };
        let Some((_, topic)) = self.store.catalog().find_topic(&topic_id) else { return };
        let Some(implementation) = topic.implementations.get(self.state.selected_implementation)
        else {
            return;
        };

        let title = format!("{} - {}", topic.name, implementation.name);
        let language = implementation.language.clone();
        let content = match loader::load_source(implementation).await {
            Ok(content) => content,
            Err(error) => loader::fallback_text(&implementation.path, &error),
        };

        self.state.code = Some(CodeView { title, language, content, scroll: 0 });
        self.state.pane = Pane::Code;
    }

    fn handle_back(&mut self) {
        if self.state.search_results.take().is_some() {
            return;
        }
        match self.state.pane {
            Pane::Code => {
                self.state.code = None;
                self.state.pane = Pane::Detail;
            }
            Pane::Detail => self.state.pane = Pane::List,
            Pane::List => {}
        }
    }

    /// Toggle completion for the item under the cursor
    fn toggle_selected(&mut self) -> Result<()> {
        if self.state.section == Section::Leetcode {
            if let Some(id) = self.selected_problem_id() {
                let done = self.store.state().is_problem_completed(&id);
                return self.set_problem(&id, !done);
            }
            return Ok(());
        }
        if let Some(id) = self.selected_topic_id() {
            let done = self.store.state().is_topic_completed(&id);
            self.set_topic(&id, !done)?;
        }
        Ok(())
    }
}

/// Step through sections with wrap-around
fn section_offset(current: Section, delta: isize) -> Section {
    let len = Section::ALL.len() as isize;
    let index = Section::ALL.iter().position(|&s| s == current).unwrap_or(0) as isize;
    let next = (index + delta).rem_euclid(len);
    Section::ALL[next as usize]
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_offset_wraps_both_ways() {
        assert_eq!(section_offset(Section::Dashboard, 1), Section::DataStructures);
        assert_eq!(section_offset(Section::Dashboard, -1), Section::Settings);
        assert_eq!(section_offset(Section::Settings, 1), Section::Dashboard);
    }
}
