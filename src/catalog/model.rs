//! Content model for the study catalog
//!
//! The catalog is a fixed tree of categories holding topics (or, for the
//! LeetCode category, a flat problem list). It is read-only: all mutable
//! state lives in [`crate::progress`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six fixed subject areas
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    DataStructures,
    Algorithms,
    JavaConcepts,
    SystemDesign,
    Behavioral,
    Leetcode,
}

impl CategoryId {
    /// All categories in display order
    pub const ALL: [CategoryId; 6] = [
        CategoryId::DataStructures,
        CategoryId::Algorithms,
        CategoryId::JavaConcepts,
        CategoryId::SystemDesign,
        CategoryId::Behavioral,
        CategoryId::Leetcode,
    ];

    /// Stable identifier used in snapshots and commands
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::DataStructures => "data-structures",
            CategoryId::Algorithms => "algorithms",
            CategoryId::JavaConcepts => "java-concepts",
            CategoryId::SystemDesign => "system-design",
            CategoryId::Behavioral => "behavioral",
            CategoryId::Leetcode => "leetcode",
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            CategoryId::DataStructures => "Data Structures",
            CategoryId::Algorithms => "Algorithms",
            CategoryId::JavaConcepts => "Java Concepts",
            CategoryId::SystemDesign => "System Design",
            CategoryId::Behavioral => "Behavioral",
            CategoryId::Leetcode => "LeetCode",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// A reference to illustrative source material for a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implementation {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Source location (opaque; resolved by the code-content loader)
    pub path: String,
    /// Language tag for syntax highlighting
    pub language: String,
}

impl Implementation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), name: name.into(), path: path.into(), language: language.into() }
    }
}

/// An external reference link for a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

impl Resource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }
}

/// A studyable unit within a category, the primary unit of completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Operation-name to complexity-string rows, display order preserved
    pub complexity: Vec<(String, String)>,
    /// Implementation references, in study order
    pub implementations: Vec<Implementation>,
    /// External resource links
    pub resources: Vec<Resource>,
    /// Study priority, lower sorts sooner; absent means 5
    pub priority: Option<u8>,
}

/// Default priority for topics that do not declare one
pub const DEFAULT_PRIORITY: u8 = 5;

impl Topic {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            complexity: Vec::new(),
            implementations: Vec::new(),
            resources: Vec::new(),
            priority: None,
        }
    }

    /// Add complexity rows
    pub fn with_complexity<I, K, V>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.complexity.extend(rows.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add an implementation reference
    pub fn with_implementation(mut self, implementation: Implementation) -> Self {
        self.implementations.push(implementation);
        self
    }

    /// Add a resource link
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Set an explicit study priority
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Effective priority used for ranking
    pub fn effective_priority(&self) -> u8 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }

    /// Whether this topic has at least one implementation reference
    pub fn has_implementation(&self) -> bool {
        !self.implementations.is_empty()
    }
}

/// LeetCode problem difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A LeetCode-style coding problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// External problem link
    pub link: String,
    /// Tag strings for filtering
    pub tags: Vec<String>,
    /// The user's saved solution, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub solution: Option<String>,
    /// The user's notes on the solution
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl Problem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        difficulty: Difficulty,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            difficulty,
            link: link.into(),
            tags: Vec::new(),
            solution: None,
            notes: None,
        }
    }

    /// Add tag strings
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

/// A topic-bearing category section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    /// Topics in study order
    pub topics: Vec<Topic>,
}

impl Category {
    pub fn new(id: CategoryId, description: impl Into<String>) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            description: description.into(),
            topics: Vec::new(),
        }
    }
}

/// The complete static content tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Topic-bearing categories in display order
    pub categories: Vec<Category>,
    /// The LeetCode problem list
    pub problems: Vec<Problem>,
}

impl Catalog {
    /// Look up a topic-bearing category
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All topics across all categories, decorated with their category,
    /// in catalog order
    pub fn all_topics(&self) -> impl Iterator<Item = (CategoryId, &Topic)> {
        self.categories.iter().flat_map(|c| c.topics.iter().map(move |t| (c.id, t)))
    }

    /// Find a topic and its owning category by id
    pub fn find_topic(&self, topic_id: &str) -> Option<(CategoryId, &Topic)> {
        self.all_topics().find(|(_, t)| t.id == topic_id)
    }

    /// Find an implementation, with its topic and category, by id
    pub fn find_implementation(
        &self,
        impl_id: &str,
    ) -> Option<(CategoryId, &Topic, &Implementation)> {
        self.all_topics().find_map(|(cat, topic)| {
            topic.implementations.iter().find(|i| i.id == impl_id).map(|i| (cat, topic, i))
        })
    }

    /// Find a catalog problem by id
    pub fn find_problem(&self, problem_id: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == problem_id)
    }

    /// Number of topics in a category (0 for LeetCode)
    pub fn topic_count(&self, id: CategoryId) -> usize {
        self.category(id).map_or(0, |c| c.topics.len())
    }

    /// Case-insensitive substring search over topic names and descriptions
    pub fn search(&self, query: &str) -> Vec<(CategoryId, &Topic)> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.all_topics()
            .filter(|(_, t)| {
                t.name.to_lowercase().contains(&query)
                    || t.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        let mut ds = Category::new(CategoryId::DataStructures, "Core structures");
        ds.topics.push(
            Topic::new("ds-arrays", "Arrays", "Contiguous storage").with_implementation(
                Implementation::new("impl-arrays", "Basic Arrays", "arrays/Basic.java", "java"),
            ),
        );
        ds.topics.push(Topic::new("ds-heaps", "Heaps", "Priority structure"));

        let mut algo = Category::new(CategoryId::Algorithms, "Core algorithms");
        algo.topics.push(Topic::new("algo-sorting", "Sorting", "Ordering elements"));

        Catalog {
            categories: vec![ds, algo],
            problems: vec![
                Problem::new(
                    "lc-two-sum",
                    "Two Sum",
                    Difficulty::Easy,
                    "https://leetcode.com/problems/two-sum/",
                )
                .with_tags(["Array"]),
            ],
        }
    }

    #[test]
    fn category_id_round_trips_as_kebab_case() {
        for id in CategoryId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
            let back: CategoryId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
    }

    #[test]
    fn category_id_parses_from_str() {
        assert_eq!("java-concepts".parse::<CategoryId>(), Ok(CategoryId::JavaConcepts));
        assert!("not-a-category".parse::<CategoryId>().is_err());
    }

    #[test]
    fn find_topic_returns_owning_category() {
        let catalog = small_catalog();
        let (cat, topic) = catalog.find_topic("algo-sorting").unwrap();
        assert_eq!(cat, CategoryId::Algorithms);
        assert_eq!(topic.name, "Sorting");
        assert!(catalog.find_topic("nonexistent").is_none());
    }

    #[test]
    fn find_implementation_resolves_topic_and_category() {
        let catalog = small_catalog();
        let (cat, topic, implementation) = catalog.find_implementation("impl-arrays").unwrap();
        assert_eq!(cat, CategoryId::DataStructures);
        assert_eq!(topic.id, "ds-arrays");
        assert_eq!(implementation.language, "java");
    }

    #[test]
    fn all_topics_preserves_catalog_order() {
        let catalog = small_catalog();
        let ids: Vec<&str> = catalog.all_topics().map(|(_, t)| t.id.as_str()).collect();
        assert_eq!(ids, vec!["ds-arrays", "ds-heaps", "algo-sorting"]);
    }

    #[test]
    fn search_matches_name_and_description() {
        let catalog = small_catalog();
        assert_eq!(catalog.search("ARRAY").len(), 1);
        assert_eq!(catalog.search("priority").len(), 1);
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn effective_priority_defaults_to_five() {
        let topic = Topic::new("t", "T", "");
        assert_eq!(topic.effective_priority(), 5);
        assert_eq!(topic.with_priority(2).effective_priority(), 2);
    }
}
