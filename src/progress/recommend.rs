//! Topic recommendations
//!
//! Two strategies: the topics view surfaces incomplete topics that ship
//! with code implementations first, shuffled within each group so the
//! suggestions rotate between visits; the dashboard surfaces a stable
//! priority-ordered shortlist.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;

use crate::catalog::{Catalog, CategoryId, Topic};

/// Shortlist length both recommenders default to
pub const DEFAULT_COUNT: usize = 5;

/// A recommended topic with the category it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub category: CategoryId,
    pub id: String,
    pub name: String,
}

impl Recommendation {
    fn from_topic(category: CategoryId, topic: &Topic) -> Self {
        Self { category, id: topic.id.clone(), name: topic.name.clone() }
    }
}

/// Up to `count` incomplete topics, those with implementations first.
/// Order within each group is randomized.
pub fn by_implementation(
    catalog: &Catalog,
    completed: &BTreeSet<String>,
    count: usize,
) -> Vec<Recommendation> {
    let mut with_code = Vec::new();
    let mut without_code = Vec::new();

    for (category, topic) in catalog.all_topics() {
        if completed.contains(&topic.id) {
            continue;
        }
        let rec = Recommendation::from_topic(category, topic);
        if topic.has_implementation() {
            with_code.push(rec);
        } else {
            without_code.push(rec);
        }
    }

    let mut rng = rand::rng();
    with_code.shuffle(&mut rng);
    without_code.shuffle(&mut rng);

    with_code.extend(without_code);
    with_code.truncate(count);
    with_code
}

/// The five highest-priority incomplete topics, in priority order.
/// Ties keep catalog order, so the shortlist is stable between calls.
pub fn by_priority(catalog: &Catalog, completed: &BTreeSet<String>) -> Vec<Recommendation> {
    let mut incomplete: Vec<(u8, Recommendation)> = catalog
        .all_topics()
        .filter(|(_, topic)| !completed.contains(&topic.id))
        .map(|(category, topic)| {
            (topic.effective_priority(), Recommendation::from_topic(category, topic))
        })
        .collect();

    incomplete.sort_by_key(|(priority, _)| *priority);
    incomplete.into_iter().take(DEFAULT_COUNT).map(|(_, rec)| rec).collect()
}

/// [`by_implementation`] with the standard shortlist length
pub fn next_up(catalog: &Catalog, completed: &BTreeSet<String>) -> Vec<Recommendation> {
    by_implementation(catalog, completed, DEFAULT_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Implementation};

    fn topic(id: &str, priority: Option<u8>, with_impl: bool) -> Topic {
        let mut topic = Topic::new(id, id.to_uppercase(), "");
        if let Some(p) = priority {
            topic = topic.with_priority(p);
        }
        if with_impl {
            topic = topic.with_implementation(Implementation::new(
                format!("impl-{id}"),
                "Code",
                format!("src/{id}.java"),
                "java",
            ));
        }
        topic
    }

    fn catalog(topics: Vec<Topic>) -> Catalog {
        let mut category = Category::new(CategoryId::Algorithms, "");
        category.topics = topics;
        Catalog { categories: vec![category], problems: Vec::new() }
    }

    #[test]
    fn implemented_topics_come_first() {
        let catalog = catalog(vec![
            topic("a", None, false),
            topic("b", None, true),
            topic("c", None, false),
            topic("d", None, true),
        ]);

        let recs = by_implementation(&catalog, &BTreeSet::new(), 10);
        assert_eq!(recs.len(), 4);
        let first_two: BTreeSet<&str> = recs[..2].iter().map(|r| r.id.as_str()).collect();
        assert_eq!(first_two, BTreeSet::from(["b", "d"]));
    }

    #[test]
    fn completed_topics_are_never_recommended() {
        let catalog = catalog(vec![topic("a", None, true), topic("b", None, false)]);
        let completed: BTreeSet<String> = ["a".to_string()].into();

        let recs = by_implementation(&catalog, &completed, 10);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, "b");

        let recs = by_priority(&catalog, &completed);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, "b");
    }

    #[test]
    fn count_truncates_the_list() {
        let catalog = catalog(vec![
            topic("a", None, false),
            topic("b", None, false),
            topic("c", None, false),
        ]);
        assert_eq!(by_implementation(&catalog, &BTreeSet::new(), 2).len(), 2);
    }

    #[test]
    fn priority_sort_is_stable_with_default_fill() {
        // b has no explicit priority and defaults to 5, sorting after
        // c (1) and a (3) but keeping catalog order among equals
        let catalog = catalog(vec![
            topic("a", Some(3), false),
            topic("b", None, false),
            topic("c", Some(1), false),
            topic("d", Some(5), false),
        ]);

        let recs = by_priority(&catalog, &BTreeSet::new());
        let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn priority_shortlist_caps_at_five() {
        let topics = (0..8).map(|i| topic(&format!("t{i}"), Some(i), false)).collect();
        let recs = by_priority(&catalog(topics), &BTreeSet::new());
        assert_eq!(recs.len(), DEFAULT_COUNT);
        assert_eq!(recs[0].id, "t0");
        assert_eq!(recs[4].id, "t4");
    }

    #[test]
    fn next_up_uses_the_default_shortlist_length() {
        let topics = (0..8).map(|i| topic(&format!("t{i}"), None, i % 2 == 0)).collect();
        let recs = next_up(&catalog(topics), &BTreeSet::new());
        assert_eq!(recs.len(), DEFAULT_COUNT);
    }
}
