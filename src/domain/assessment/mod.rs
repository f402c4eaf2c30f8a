//! Assessment module - a single run of the questionnaire.
//!
//! - `Assessment` - persisted aggregate (in-progress or completed)
//! - `Navigator` - answer-before-advance question state machine
//! - `ResponseSet` - at most one answer per question

mod aggregate;
mod errors;
mod navigator;
mod response;

pub use aggregate::{Assessment, AssessmentPatch, NewAssessment};
pub use errors::{AssessmentError, NavigationError};
pub use navigator::{CategoryProgress, CategoryStatus, Cursor, NavigationProgress, Navigator};
pub use response::{Response, ResponseSet, ResponseValue, MAX_RESPONSE_VALUE, MIN_RESPONSE_VALUE};
