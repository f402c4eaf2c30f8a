//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
mod load_state;
mod session;

pub use handlers::{
    // Assessment handlers
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
    GetResultsHandler, GetResultsQuery, ResultsOutcome,
    StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult,
    // Dashboard handlers
    GetDashboardSummaryHandler, GetDashboardSummaryQuery,
};
pub use load_state::{LoadState, LoadTracker, RequestTicket};
pub use session::AssessmentSession;
