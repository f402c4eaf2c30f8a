//! Catalog module - the read-only question set.
//!
//! - `Category` - named question grouping
//! - `Question` - immutable scored prompt
//! - `QuestionCatalog` - ordered set with category partitioning
//! - `default_catalog` - the built-in fifteen-question catalog

mod category;
mod defaults;
mod question;
mod question_catalog;

pub use category::{Category, KNOWN_CATEGORIES};
pub use defaults::default_catalog;
pub use question::Question;
pub use question_catalog::{CategorySection, QuestionCatalog};
