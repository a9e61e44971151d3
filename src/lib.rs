//! Dojo - a terminal dojo for technical interview preparation
//!
//! Tracks study progress across data structures, algorithms, Java,
//! system design, behavioral prep and LeetCode problems, generates a
//! day-by-day study plan for an interview date, and persists everything
//! to a local JSON snapshot.

pub mod app;
pub mod catalog;
pub mod progress;
pub mod storage;
pub mod syntax;
pub mod theme;
pub mod ui;

pub use app::App;
pub use catalog::Catalog;
pub use progress::ProgressStore;
pub use theme::Theme;
