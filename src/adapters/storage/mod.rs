//! Storage Adapters
//!
//! Durable implementations of the AssessmentRepository port.
//!
//! ## Available Adapters
//!
//! - **FileAssessmentRepository** - Stores assessments as a JSON document on disk
//!
//! For tests and development see `adapters::memory::InMemoryAssessmentRepository`.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::FileAssessmentRepository;
//!
//! let repo = FileAssessmentRepository::new("./data");
//! ```

mod file_assessment_repository;

pub use file_assessment_repository::FileAssessmentRepository;
