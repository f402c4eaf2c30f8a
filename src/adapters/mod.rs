//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory repository and question reader
//! - `storage` - JSON file assessment repository
//! - `catalog` - YAML question catalog

pub mod catalog;
pub mod memory;
pub mod storage;

pub use catalog::YamlQuestionReader;
pub use memory::{InMemoryAssessmentRepository, InMemoryQuestionReader};
pub use storage::FileAssessmentRepository;
