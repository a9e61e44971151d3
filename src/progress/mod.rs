//! Progress tracking: the persistent state aggregate, derived
//! percentages, study-plan generation, and topic recommendations.

pub mod calc;
pub mod plan;
pub mod recommend;
pub mod state;
pub mod store;

pub use plan::{PlanError, StudyPlan};
pub use recommend::Recommendation;
pub use state::{PlanDay, PlanTopic, ProgressState, Section, Settings, StarStory, StateError};
pub use store::ProgressStore;
