//! Static study content: the category/topic tree, the built-in catalog
//! data, and the code-content loader.

pub mod builtin;
pub mod loader;
pub mod model;

pub use model::{Catalog, Category, CategoryId, Difficulty, Implementation, Problem, Resource, Topic};
