//! Assessment command and query handlers.

mod complete_assessment;
mod get_results;
mod start_assessment;

pub use complete_assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
};
pub use get_results::{GetResultsHandler, GetResultsQuery, ResultsOutcome};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult};
