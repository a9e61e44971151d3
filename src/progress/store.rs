//! The state holder
//!
//! [`ProgressStore`] owns the catalog, the mutable [`ProgressState`], and
//! the on-disk snapshot. Every mutation recomputes the affected derived
//! percentages and writes through to disk, so the file is always current.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::catalog::{Catalog, CategoryId, Problem};
use crate::storage::StateFile;

use super::calc;
use super::plan::{self, StudyPlan};
use super::state::{ProgressState, Section, Settings, StarStory};

pub struct ProgressStore {
    catalog: Catalog,
    state: ProgressState,
    file: StateFile,
}

impl ProgressStore {
    /// Open the store, loading any persisted snapshot.
    ///
    /// An unreadable snapshot is logged and discarded rather than
    /// blocking startup. Percentages are always recomputed from the
    /// completion sets, never trusted from the file.
    pub fn open(catalog: Catalog, file: StateFile) -> Result<Self> {
        let state = match file.load()? {
            Some(text) => match ProgressState::from_snapshot(&text) {
                Ok(state) => state,
                Err(error) => {
                    tracing::warn!("stored state is unreadable, starting fresh: {error}");
                    ProgressState::default()
                }
            },
            None => ProgressState::default(),
        };

        let mut store = Self { catalog, state, file };
        store.recompute_all();
        tracing::debug!(path = ?store.file.path(), "opened progress store");
        Ok(store)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Overall preparedness across all six categories
    pub fn overall_percentage(&self) -> u8 {
        calc::overall_percentage(&self.state.progress)
    }

    /// Mark or unmark a topic. Idempotent; unknown ids are logged and
    /// leave the percentages untouched but are still persisted, so a
    /// snapshot from a newer catalog survives a round trip.
    pub fn set_topic_completed(&mut self, topic_id: &str, completed: bool) -> Result<()> {
        if completed {
            self.state.completed_topics.insert(topic_id.to_string());
        } else {
            self.state.completed_topics.remove(topic_id);
        }

        match self.catalog.find_topic(topic_id).map(|(category, _)| category) {
            Some(category) => self.recompute_category(category),
            None => tracing::warn!("topic id `{topic_id}` is not in the catalog"),
        }
        self.flush()
    }

    /// Mark or unmark a problem, recomputing the problem-list percentage
    pub fn set_problem_completed(&mut self, problem_id: &str, completed: bool) -> Result<()> {
        if completed {
            self.state.completed_problems.insert(problem_id.to_string());
        } else {
            self.state.completed_problems.remove(problem_id);
        }
        self.recompute_category(CategoryId::Leetcode);
        self.flush()
    }

    /// Add a STAR story and return its minted id
    pub fn add_story(&mut self, mut story: StarStory) -> Result<String> {
        let millis = chrono::Utc::now().timestamp_millis();
        let mut candidate = millis;
        story.id = format!("story-{candidate}");
        while self.state.star_stories.iter().any(|s| s.id == story.id) {
            candidate += 1;
            story.id = format!("story-{candidate}");
        }

        let id = story.id.clone();
        self.state.star_stories.push(story);
        self.recompute_category(CategoryId::Behavioral);
        self.flush()?;
        Ok(id)
    }

    /// Add a user problem to the problem list. The denominator grows, so
    /// the percentage can drop.
    pub fn add_problem(&mut self, problem: Problem) -> Result<()> {
        if self.catalog.find_problem(&problem.id).is_some()
            || self.state.custom_problems.iter().any(|p| p.id == problem.id)
        {
            bail!("a problem with id `{}` already exists", problem.id);
        }
        self.state.custom_problems.push(problem);
        self.recompute_category(CategoryId::Leetcode);
        self.flush()
    }

    /// Attach solution text, and optionally notes, to a user-added
    /// problem. Built-in problems are read-only. `None` leaves any
    /// existing notes in place.
    pub fn save_solution(
        &mut self,
        problem_id: &str,
        solution: String,
        notes: Option<String>,
    ) -> Result<()> {
        let problem = self.custom_problem_mut(problem_id)?;
        problem.solution = Some(solution);
        if notes.is_some() {
            problem.notes = notes;
        }
        self.flush()
    }

    /// Attach notes to a user-added problem without touching its solution
    pub fn save_notes(&mut self, problem_id: &str, notes: String) -> Result<()> {
        self.custom_problem_mut(problem_id)?.notes = Some(notes);
        self.flush()
    }

    fn custom_problem_mut(&mut self, problem_id: &str) -> Result<&mut Problem> {
        match self.state.custom_problems.iter_mut().find(|p| p.id == problem_id) {
            Some(problem) => Ok(problem),
            None => bail!("no user-added problem with id `{problem_id}`"),
        }
    }

    /// Remember which view is active so the next launch resumes there
    pub fn set_current_section(&mut self, section: Section) -> Result<()> {
        self.state.current_section = section;
        self.flush()
    }

    /// Apply a settings change and persist it
    pub fn update_settings(&mut self, apply: impl FnOnce(&mut Settings)) -> Result<()> {
        apply(&mut self.state.settings);
        self.flush()
    }

    /// Generate and store a study plan targeting the given date.
    ///
    /// The plan replaces any previous one and the target date is
    /// remembered in settings.
    pub fn generate_plan(&mut self, target: NaiveDate) -> Result<StudyPlan> {
        self.generate_plan_from(target, Local::now().date_naive())
    }

    pub fn generate_plan_from(&mut self, target: NaiveDate, today: NaiveDate) -> Result<StudyPlan> {
        let plan = plan::generate(&self.catalog, &self.state.completed_topics, target, today)?;
        self.state.study_plan = plan.days.clone();
        self.state.settings.target_date = Some(target);
        self.flush()?;
        Ok(plan)
    }

    /// Serialize the current state for export
    pub fn export_snapshot(&self) -> Result<String> {
        self.state.to_snapshot().context("Failed to serialize state for export")
    }

    /// Merge an exported document over the current state.
    ///
    /// Fields are validated independently; a mistyped field is dropped
    /// with a warning while the rest of the document applies. Percentages
    /// are recomputed from the merged completion sets.
    pub fn import_snapshot(&mut self, text: &str) -> Result<()> {
        let value: Value =
            serde_json::from_str(text).context("Failed to parse import document")?;
        self.state.merge_value(value)?;
        self.recompute_all();
        self.flush()
    }

    /// Discard all progress and remove the snapshot file
    pub fn reset(&mut self) -> Result<()> {
        self.state = ProgressState::default();
        self.file.clear()
    }

    fn recompute_category(&mut self, id: CategoryId) {
        let percentage = calc::category_percentage(&self.catalog, &self.state, id);
        self.state.progress.insert(id, percentage);
    }

    fn recompute_all(&mut self) {
        for id in CategoryId::ALL {
            self.recompute_category(id);
        }
    }

    fn flush(&self) -> Result<()> {
        let snapshot = self.state.to_snapshot().context("Failed to serialize state")?;
        self.file.save(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Difficulty, Topic};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn small_catalog() -> Catalog {
        let mut ds = Category::new(CategoryId::DataStructures, "");
        for i in 0..4 {
            ds.topics.push(Topic::new(format!("ds-{i}"), format!("DS {i}"), ""));
        }
        let mut algo = Category::new(CategoryId::Algorithms, "");
        algo.topics.push(Topic::new("algo-0", "Algo 0", ""));

        Catalog {
            categories: vec![ds, algo],
            problems: vec![Problem::new(
                "lc-1",
                "Two Sum",
                Difficulty::Easy,
                "https://leetcode.com/problems/two-sum/",
            )],
        }
    }

    fn open_store(dir: &TempDir) -> ProgressStore {
        ProgressStore::open(small_catalog(), StateFile::at(dir.path().join("state.json")))
            .unwrap()
    }

    fn story(title: &str) -> StarStory {
        StarStory {
            id: String::new(),
            title: title.into(),
            category: "Leadership".into(),
            situation: "s".into(),
            task: "t".into(),
            action: "a".into(),
            result: "r".into(),
            questions: Vec::new(),
        }
    }

    #[test]
    fn marking_topics_walks_the_percentage() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.set_topic_completed("ds-0", true).unwrap();
        assert_eq!(store.state().category_percentage(CategoryId::DataStructures), 25);

        for id in ["ds-1", "ds-2", "ds-3"] {
            store.set_topic_completed(id, true).unwrap();
        }
        assert_eq!(store.state().category_percentage(CategoryId::DataStructures), 100);

        store.set_topic_completed("ds-0", false).unwrap();
        assert_eq!(store.state().category_percentage(CategoryId::DataStructures), 75);
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.set_topic_completed("ds-0", true).unwrap();
        store.set_topic_completed("ds-0", true).unwrap();
        assert_eq!(store.state().category_percentage(CategoryId::DataStructures), 25);
        assert_eq!(store.state().completed_topics.len(), 1);
    }

    #[test]
    fn unknown_topic_is_persisted_without_affecting_percentages() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.set_topic_completed("from-a-newer-catalog", true).unwrap();
        assert!(store.state().progress.values().all(|&p| p == 0));

        // The id survives a reload
        let store = open_store(&dir);
        assert!(store.state().is_topic_completed("from-a-newer-catalog"));
    }

    #[test]
    fn problem_percentage_counts_custom_problems_in_the_denominator() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.set_problem_completed("lc-1", true).unwrap();
        assert_eq!(store.state().category_percentage(CategoryId::Leetcode), 100);

        store
            .add_problem(Problem::new("lc-mine", "Mine", Difficulty::Hard, "https://example.com"))
            .unwrap();
        assert_eq!(store.state().category_percentage(CategoryId::Leetcode), 50);
    }

    #[test]
    fn stale_problem_ids_do_not_inflate_the_percentage() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.set_problem_completed("lc-1", true).unwrap();
        store.set_problem_completed("lc-gone", true).unwrap();
        assert_eq!(store.state().category_percentage(CategoryId::Leetcode), 100);

        // Same through an imported document with ids the catalog has
        // never heard of
        let doc = r#"{"completedProblems": ["lc-1", "old-a", "old-b", "old-c"]}"#;
        store.import_snapshot(doc).unwrap();
        assert_eq!(store.state().category_percentage(CategoryId::Leetcode), 100);
    }

    #[test]
    fn duplicate_problem_ids_are_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let duplicate = Problem::new("lc-1", "Again", Difficulty::Easy, "https://example.com");
        assert!(store.add_problem(duplicate).is_err());
    }

    #[test]
    fn stories_drive_behavioral_progress() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let id = store.add_story(story("Outage")).unwrap();
        assert!(id.starts_with("story-"));
        assert_eq!(store.state().category_percentage(CategoryId::Behavioral), 10);

        store.add_story(story("Deadline")).unwrap();
        assert_eq!(store.state().category_percentage(CategoryId::Behavioral), 20);
    }

    #[test]
    fn story_ids_are_unique_even_in_the_same_millisecond() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let a = store.add_story(story("A")).unwrap();
        let b = store.add_story(story("B")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn solutions_attach_to_custom_problems_only() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store
            .add_problem(Problem::new("lc-mine", "Mine", Difficulty::Easy, "https://example.com"))
            .unwrap();
        store.save_solution("lc-mine", "class Solution {}".into(), None).unwrap();
        assert_eq!(
            store.state().custom_problems[0].solution.as_deref(),
            Some("class Solution {}")
        );

        assert!(store.save_solution("lc-1", "nope".into(), None).is_err());
        assert!(store.save_notes("lc-1", "nope".into()).is_err());
    }

    #[test]
    fn notes_persist_alongside_the_solution() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store
            .add_problem(Problem::new("lc-mine", "Mine", Difficulty::Easy, "https://example.com"))
            .unwrap();

        store
            .save_solution("lc-mine", "class A {}".into(), Some("two pointers".into()))
            .unwrap();
        assert_eq!(store.state().custom_problems[0].notes.as_deref(), Some("two pointers"));

        // Re-saving the solution without notes keeps the old notes
        store.save_solution("lc-mine", "class B {}".into(), None).unwrap();
        assert_eq!(store.state().custom_problems[0].solution.as_deref(), Some("class B {}"));
        assert_eq!(store.state().custom_problems[0].notes.as_deref(), Some("two pointers"));

        store.save_notes("lc-mine", "sliding window".into()).unwrap();
        assert_eq!(store.state().custom_problems[0].notes.as_deref(), Some("sliding window"));
    }

    #[test]
    fn state_survives_reopening() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open_store(&dir);
            store.set_topic_completed("ds-0", true).unwrap();
            store.set_current_section(Section::Algorithms).unwrap();
            store.update_settings(|s| s.dark_mode = true).unwrap();
        }

        let store = open_store(&dir);
        assert!(store.state().is_topic_completed("ds-0"));
        assert_eq!(store.state().current_section, Section::Algorithms);
        assert!(store.state().settings.dark_mode);
        assert_eq!(store.state().category_percentage(CategoryId::DataStructures), 25);
    }

    #[test]
    fn generate_plan_stores_days_and_target() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let target = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        let plan = store.generate_plan_from(target, today).unwrap();

        assert_eq!(plan.message, "Created study plan with 2 days");
        assert_eq!(store.state().study_plan, plan.days);
        assert_eq!(store.state().settings.target_date, Some(target));
    }

    #[test]
    fn import_recomputes_percentages_instead_of_trusting_them() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let doc = r#"{
            "completedTopics": ["ds-0", "ds-1"],
            "progress": {"data-structures": 99, "algorithms": 99}
        }"#;
        store.import_snapshot(doc).unwrap();

        assert_eq!(store.state().category_percentage(CategoryId::DataStructures), 50);
        assert_eq!(store.state().category_percentage(CategoryId::Algorithms), 0);
    }

    #[test]
    fn export_import_round_trips_through_text() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set_topic_completed("ds-0", true).unwrap();
        store.add_story(story("Outage")).unwrap();
        let exported = store.export_snapshot().unwrap();

        let other_dir = TempDir::new().unwrap();
        let mut other = open_store(&other_dir);
        other.import_snapshot(&exported).unwrap();
        assert_eq!(other.state(), store.state());
    }

    #[test]
    fn reset_returns_to_defaults_and_clears_the_file() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.set_topic_completed("ds-0", true).unwrap();

        store.reset().unwrap();
        assert_eq!(store.state(), &ProgressState::default());

        let reopened = open_store(&dir);
        assert_eq!(reopened.state(), &ProgressState::default());
    }

    #[test]
    fn malformed_snapshot_on_disk_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::at(dir.path().join("state.json"));
        file.save("not json at all").unwrap();

        let store = ProgressStore::open(small_catalog(), file).unwrap();
        assert_eq!(store.state(), &ProgressState::default());
    }
}
