//! Pure progress derivation
//!
//! Three category rules plus the overall mean. Behavioral progress is
//! intentionally driven by authored STAR stories rather than topic
//! completion; ten stories count as fully prepared.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Catalog, CategoryId};

use super::state::ProgressState;

/// Stories needed for 100% behavioral progress
const STORIES_FOR_FULL_CREDIT: usize = 10;

/// Percentage for a topic-counted category:
/// `floor(100 * completed-in-category / total)`, 0 when the category is empty
pub fn topic_percentage(catalog: &Catalog, completed: &BTreeSet<String>, id: CategoryId) -> u8 {
    let Some(category) = catalog.category(id) else {
        return 0;
    };
    let total = category.topics.len();
    if total == 0 {
        return 0;
    }
    let done = category.topics.iter().filter(|t| completed.contains(&t.id)).count();
    (done * 100 / total) as u8
}

/// Percentage for the behavioral category, driven by story count and
/// capped at [`STORIES_FOR_FULL_CREDIT`]
pub fn story_percentage(story_count: usize) -> u8 {
    (story_count * 100 / STORIES_FOR_FULL_CREDIT).min(100) as u8
}

/// Percentage for the problem list, 0 when the list is empty
pub fn problem_percentage(completed_count: usize, total_count: usize) -> u8 {
    if total_count == 0 {
        return 0;
    }
    (completed_count * 100 / total_count) as u8
}

/// Percentage for any category, dispatching on its rule
pub fn category_percentage(catalog: &Catalog, state: &ProgressState, id: CategoryId) -> u8 {
    match id {
        CategoryId::Behavioral => story_percentage(state.star_stories.len()),
        CategoryId::Leetcode => {
            let total = catalog.problems.len() + state.custom_problems.len();
            // Only ids that resolve to a known problem count; stale ids
            // from an older catalog stay in the set without inflating
            // the numerator past the denominator
            let done = state
                .completed_problems
                .iter()
                .filter(|id| {
                    catalog.find_problem(id.as_str()).is_some()
                        || state.custom_problems.iter().any(|p| &p.id == *id)
                })
                .count();
            problem_percentage(done, total)
        }
        CategoryId::DataStructures
        | CategoryId::Algorithms
        | CategoryId::JavaConcepts
        | CategoryId::SystemDesign => topic_percentage(catalog, &state.completed_topics, id),
    }
}

/// Overall progress: `round(mean over the six category keys)`.
/// Categories missing from the map count as 0.
pub fn overall_percentage(progress: &BTreeMap<CategoryId, u8>) -> u8 {
    let sum: u32 = CategoryId::ALL
        .into_iter()
        .map(|id| progress.get(&id).copied().unwrap_or(0) as u32)
        .sum();
    ((sum as f64 / CategoryId::ALL.len() as f64).round()) as u8
}
