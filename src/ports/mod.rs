//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentRepository` - Assessment persistence (get/create/update/delete)
//! - `QuestionReader` - Read-only question catalog
//! - `StoreError` - Failures shared by both

mod assessment_repository;
mod question_reader;
mod store_error;

pub use assessment_repository::AssessmentRepository;
pub use question_reader::QuestionReader;
pub use store_error::StoreError;
