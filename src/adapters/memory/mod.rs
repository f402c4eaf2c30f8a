//! In-memory adapters
//!
//! Port implementations backed by process memory. Used for tests, local
//! development, and the `memory` storage backend.

mod in_memory_assessment_repository;
mod in_memory_question_reader;

pub use in_memory_assessment_repository::InMemoryAssessmentRepository;
pub use in_memory_question_reader::InMemoryQuestionReader;
