//! The mutable progress aggregate
//!
//! [`ProgressState`] is the one thing the app persists: completion sets,
//! derived percentages, the generated study plan, STAR stories, user-added
//! problems, and settings. It round-trips losslessly through JSON using
//! the original tracker's camelCase key names, so exports from older
//! versions import cleanly.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::catalog::{CategoryId, Problem};

/// Which view is active; persisted so the app reopens where it left off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Dashboard,
    DataStructures,
    Algorithms,
    JavaConcepts,
    SystemDesign,
    Behavioral,
    Leetcode,
    StudyPlan,
    Settings,
}

impl Section {
    /// All sections in navigation order
    pub const ALL: [Section; 9] = [
        Section::Dashboard,
        Section::DataStructures,
        Section::Algorithms,
        Section::JavaConcepts,
        Section::SystemDesign,
        Section::Behavioral,
        Section::Leetcode,
        Section::StudyPlan,
        Section::Settings,
    ];

    /// Stable identifier used in snapshots and `:go` commands
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::DataStructures => "data-structures",
            Section::Algorithms => "algorithms",
            Section::JavaConcepts => "java-concepts",
            Section::SystemDesign => "system-design",
            Section::Behavioral => "behavioral",
            Section::Leetcode => "leetcode",
            Section::StudyPlan => "study-plan",
            Section::Settings => "settings",
        }
    }

    /// Human-readable title
    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::StudyPlan => "Study Plan",
            Section::Settings => "Settings",
            other => other
                .category()
                .map(CategoryId::display_name)
                .unwrap_or("Dashboard"),
        }
    }

    /// The category this section browses, if it is a category section
    pub fn category(self) -> Option<CategoryId> {
        match self {
            Section::DataStructures => Some(CategoryId::DataStructures),
            Section::Algorithms => Some(CategoryId::Algorithms),
            Section::JavaConcepts => Some(CategoryId::JavaConcepts),
            Section::SystemDesign => Some(CategoryId::SystemDesign),
            Section::Behavioral => Some(CategoryId::Behavioral),
            Section::Leetcode => Some(CategoryId::Leetcode),
            _ => None,
        }
    }
}

impl From<CategoryId> for Section {
    fn from(id: CategoryId) -> Self {
        match id {
            CategoryId::DataStructures => Section::DataStructures,
            CategoryId::Algorithms => Section::Algorithms,
            CategoryId::JavaConcepts => Section::JavaConcepts,
            CategoryId::SystemDesign => Section::SystemDesign,
            CategoryId::Behavioral => Section::Behavioral,
            CategoryId::Leetcode => Section::Leetcode,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}

/// A topic scheduled into a plan day, denormalized so old plans render
/// even if the catalog changes underneath them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTopic {
    pub id: String,
    pub name: String,
    pub category: CategoryId,
}

/// One day of the generated study plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub date: NaiveDate,
    pub topics: Vec<PlanTopic>,
}

/// A behavioral-prep story in STAR form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarStory {
    pub id: String,
    pub title: String,
    /// Free-form grouping label, e.g. "Leadership"
    pub category: String,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
    /// Interview questions this story answers
    #[serde(default)]
    pub questions: Vec<String>,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub dark_mode: bool,
    pub reminder_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reminder_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target_date: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { dark_mode: false, reminder_enabled: true, reminder_time: None, target_date: None }
    }
}

/// The full mutable aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub current_section: Section,
    /// Derived percentages per category; recomputed, never set directly
    pub progress: BTreeMap<CategoryId, u8>,
    pub completed_topics: BTreeSet<String>,
    pub completed_problems: BTreeSet<String>,
    pub study_plan: Vec<PlanDay>,
    pub star_stories: Vec<StarStory>,
    /// User-added LeetCode problems and saved solutions
    pub custom_problems: Vec<Problem>,
    pub settings: Settings,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            current_section: Section::Dashboard,
            progress: CategoryId::ALL.into_iter().map(|id| (id, 0)).collect(),
            completed_topics: BTreeSet::new(),
            completed_problems: BTreeSet::new(),
            study_plan: Vec::new(),
            star_stories: Vec::new(),
            custom_problems: Vec::new(),
            settings: Settings::default(),
        }
    }
}

/// Errors from parsing a persisted or imported snapshot
#[derive(Debug, Error)]
pub enum StateError {
    /// The document is not valid JSON or not a JSON object
    #[error("malformed state document: {0}")]
    Malformed(String),
}

impl ProgressState {
    /// Parse a snapshot document, field-merging it over defaults.
    ///
    /// Mistyped fields are dropped individually (with a warning) while
    /// valid sibling fields are kept.
    pub fn from_snapshot(text: &str) -> Result<Self, StateError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| StateError::Malformed(e.to_string()))?;
        let mut state = Self::default();
        state.merge_value(value)?;
        Ok(state)
    }

    /// Merge a JSON document over the current state, field by field.
    ///
    /// Each known key is validated independently against the schema;
    /// unknown keys are ignored. Percentages are not trusted from the
    /// document; callers recompute them afterwards.
    pub fn merge_value(&mut self, value: Value) -> Result<(), StateError> {
        let Value::Object(mut map) = value else {
            return Err(StateError::Malformed("expected a JSON object".into()));
        };

        merge_field(&mut map, "currentSection", &mut self.current_section);
        merge_field(&mut map, "progress", &mut self.progress);
        merge_field(&mut map, "completedTopics", &mut self.completed_topics);
        merge_field(&mut map, "completedProblems", &mut self.completed_problems);
        merge_field(&mut map, "studyPlan", &mut self.study_plan);
        merge_field(&mut map, "starStories", &mut self.star_stories);
        merge_field(&mut map, "customProblems", &mut self.custom_problems);
        merge_field(&mut map, "settings", &mut self.settings);

        Ok(())
    }

    /// Serialize to the snapshot document format
    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether a topic id is marked complete
    pub fn is_topic_completed(&self, topic_id: &str) -> bool {
        self.completed_topics.contains(topic_id)
    }

    /// Whether a problem id is marked complete
    pub fn is_problem_completed(&self, problem_id: &str) -> bool {
        self.completed_problems.contains(problem_id)
    }

    /// Percentage for one category, 0 if never computed
    pub fn category_percentage(&self, id: CategoryId) -> u8 {
        self.progress.get(&id).copied().unwrap_or(0)
    }
}

/// Replace `slot` with the validated value of `key`, keeping the current
/// value when the field is missing or mistyped
fn merge_field<T: DeserializeOwned>(
    map: &mut serde_json::Map<String, Value>,
    key: &str,
    slot: &mut T,
) {
    let Some(raw) = map.remove(key) else {
        return;
    };
    match serde_json::from_value(raw) {
        Ok(parsed) => *slot = parsed,
        Err(error) => {
            tracing::warn!("ignoring malformed field `{key}` in state document: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_state_has_all_categories_at_zero() {
        let state = ProgressState::default();
        assert_eq!(state.progress.len(), 6);
        assert!(state.progress.values().all(|&p| p == 0));
        assert!(state.settings.reminder_enabled);
        assert!(!state.settings.dark_mode);
    }

    #[test]
    fn snapshot_round_trips_every_field() {
        let mut state = ProgressState::default();
        state.current_section = Section::StudyPlan;
        state.completed_topics.insert("ds-arrays".into());
        state.completed_problems.insert("lc-two-sum".into());
        state.progress.insert(CategoryId::DataStructures, 25);
        state.study_plan.push(PlanDay {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            topics: vec![PlanTopic {
                id: "ds-heaps".into(),
                name: "Heaps".into(),
                category: CategoryId::DataStructures,
            }],
        });
        state.star_stories.push(StarStory {
            id: "story-1".into(),
            title: "Outage".into(),
            category: "Conflict".into(),
            situation: "s".into(),
            task: "t".into(),
            action: "a".into(),
            result: "r".into(),
            questions: vec!["Tell me about a time...".into()],
        });
        state.settings.dark_mode = true;
        state.settings.target_date = NaiveDate::from_ymd_opt(2025, 9, 1);
        state.settings.reminder_time = NaiveTime::from_hms_opt(9, 0, 0);

        let text = state.to_snapshot().unwrap();
        let restored = ProgressState::from_snapshot(&text).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let state = ProgressState::default();
        let text = state.to_snapshot().unwrap();
        assert!(text.contains("\"currentSection\""));
        assert!(text.contains("\"completedTopics\""));
        assert!(text.contains("\"starStories\""));
        assert!(text.contains("\"data-structures\""));
    }

    #[test]
    fn mistyped_field_is_dropped_but_siblings_survive() {
        let doc = r#"{
            "completedTopics": "not-an-array",
            "completedProblems": ["lc-two-sum"],
            "settings": {"darkMode": true, "reminderEnabled": false}
        }"#;

        let state = ProgressState::from_snapshot(doc).unwrap();
        assert!(state.completed_topics.is_empty());
        assert!(state.is_problem_completed("lc-two-sum"));
        assert!(state.settings.dark_mode);
        assert!(!state.settings.reminder_enabled);
    }

    #[test]
    fn non_object_document_is_malformed() {
        assert!(matches!(
            ProgressState::from_snapshot("[1, 2, 3]"),
            Err(StateError::Malformed(_))
        ));
        assert!(matches!(
            ProgressState::from_snapshot("{{{"),
            Err(StateError::Malformed(_))
        ));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let state = ProgressState::from_snapshot(r#"{"somethingElse": 42}"#).unwrap();
        assert_eq!(state, ProgressState::default());
    }

    #[test]
    fn section_parses_from_snapshot_identifier() {
        assert_eq!("study-plan".parse::<Section>(), Ok(Section::StudyPlan));
        assert_eq!("data-structures".parse::<Section>(), Ok(Section::DataStructures));
        assert!("nope".parse::<Section>().is_err());
    }
}
