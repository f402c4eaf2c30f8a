//! GetDashboardSummaryHandler - Query handler for the assessment history view.
//!
//! Returns the completed count, latest score, recent list, category averages
//! and trend series across all stored assessments.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::handlers::read_failure;
use crate::domain::assessment::AssessmentError;
use crate::domain::dashboard::{AggregationEngine, DashboardSummary, DEFAULT_TREND_WINDOW};
use crate::ports::{AssessmentRepository, QuestionReader};

/// Query for the dashboard summary.
#[derive(Debug, Clone)]
pub struct GetDashboardSummaryQuery {
    /// Number of points in the trend series.
    pub trend_window: usize,
}

impl Default for GetDashboardSummaryQuery {
    fn default() -> Self {
        Self {
            trend_window: DEFAULT_TREND_WINDOW,
        }
    }
}

/// Handler for the dashboard summary.
pub struct GetDashboardSummaryHandler {
    repository: Arc<dyn AssessmentRepository>,
    questions: Arc<dyn QuestionReader>,
}

impl GetDashboardSummaryHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>, questions: Arc<dyn QuestionReader>) -> Self {
        Self {
            repository,
            questions,
        }
    }

    pub async fn handle(&self, query: GetDashboardSummaryQuery) -> Result<DashboardSummary, AssessmentError> {
        let assessments = self.repository.get_all().await.map_err(read_failure)?;
        // An empty catalog is allowed here; it only leaves the averages empty.
        let catalog = self.questions.load_catalog().await.map_err(|e| {
            warn!(error = %e, "failed to load question catalog");
            AssessmentError::catalog_unavailable(e.to_string())
        })?;

        let summary = AggregationEngine::summarize(&assessments, &catalog, query.trend_window);
        debug!(
            stored = assessments.len(),
            completed = summary.total_assessments,
            trend_points = summary.trend.len(),
            "dashboard summary built"
        );
        Ok(summary)
    }
}
