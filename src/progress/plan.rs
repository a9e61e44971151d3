//! Study plan generation
//!
//! Distributes incomplete topics across the days remaining before the
//! target date, round-robining across categories so each day mixes
//! subjects instead of exhausting one category before the next. `ceil`
//! on both the day count and the per-day quota guarantees every topic
//! lands on or before the target date.

use std::collections::VecDeque;

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::catalog::{Catalog, CategoryId};

use super::state::{PlanDay, PlanTopic};

/// Shown when there is nothing left to schedule
pub const ALL_COMPLETE_MESSAGE: &str = "All topics completed! You're ready for your interview.";

/// A generated plan plus its summary message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyPlan {
    pub message: String,
    pub days: Vec<PlanDay>,
}

/// Errors from plan generation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Target date must be in the future")]
    TargetDateNotFuture,
}

/// Generate a day-by-day plan covering every incomplete topic.
///
/// `today` is injected rather than read from the clock so callers (and
/// tests) control the calendar; the store passes the local date.
pub fn generate(
    catalog: &Catalog,
    completed: &std::collections::BTreeSet<String>,
    target: NaiveDate,
    today: NaiveDate,
) -> Result<StudyPlan, PlanError> {
    let days_until_target = (target - today).num_days();
    if days_until_target <= 0 {
        return Err(PlanError::TargetDateNotFuture);
    }

    let incomplete: Vec<(CategoryId, PlanTopic)> = catalog
        .all_topics()
        .filter(|(_, topic)| !completed.contains(&topic.id))
        .map(|(category, topic)| {
            (category, PlanTopic { id: topic.id.clone(), name: topic.name.clone(), category })
        })
        .collect();

    if incomplete.is_empty() {
        return Ok(StudyPlan { message: ALL_COMPLETE_MESSAGE.to_string(), days: Vec::new() });
    }

    let topics_per_day = incomplete.len().div_ceil(days_until_target as usize);

    // Per-category queues keyed by first appearance, which is catalog order
    let mut order: Vec<CategoryId> = Vec::new();
    let mut queues: Vec<VecDeque<PlanTopic>> = Vec::new();
    for (category, topic) in incomplete {
        match order.iter().position(|&c| c == category) {
            Some(i) => queues[i].push_back(topic),
            None => {
                order.push(category);
                queues.push(VecDeque::from([topic]));
            }
        }
    }

    let mut days = Vec::new();
    let mut date = today;

    while queues.iter().any(|q| !q.is_empty()) {
        // Drop exhausted categories from the rotation so short days still
        // make progress
        let keep: Vec<usize> = (0..queues.len()).filter(|&i| !queues[i].is_empty()).collect();
        queues = keep.iter().map(|&i| std::mem::take(&mut queues[i])).collect();

        let mut topics = Vec::new();
        let rotation = queues.len();
        for i in 0..topics_per_day {
            if let Some(topic) = queues[i % rotation].pop_front() {
                topics.push(topic);
            }
        }

        if !topics.is_empty() {
            days.push(PlanDay { date, topics });
        }
        date = date + Days::new(1);
    }

    let message = format!("Created study plan with {} days", days.len());
    Ok(StudyPlan { message, days })
}
