//! Dashboard view models: summary, snapshots, averages and trend points.

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregation::{assessment_percentage, display_score};
use crate::domain::analysis::ScoreInconsistency;
use crate::domain::assessment::Assessment;
use crate::domain::catalog::Category;
use crate::domain::foundation::{AssessmentId, Percentage, Timestamp};

/// The dashboard view across all completed assessments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_assessments: usize,
    pub latest: Option<AssessmentSnapshot>,
    /// Newest first.
    pub recent: Vec<AssessmentSnapshot>,
    pub category_averages: Vec<CategoryAverage>,
    /// Oldest first.
    pub trend: Vec<TrendPoint>,
    /// A single point is not a trend.
    pub show_trend: bool,
}

impl DashboardSummary {
    pub fn is_empty(&self) -> bool {
        self.total_assessments == 0
    }
}

/// One completed assessment in the recent list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSnapshot {
    pub id: AssessmentId,
    pub name: String,
    pub completed_at: Option<Timestamp>,
    pub percentage: Percentage,
}

impl AssessmentSnapshot {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id(),
            name: assessment.name().to_string(),
            completed_at: assessment.completed_at().copied(),
            percentage: assessment_percentage(assessment).0,
        }
    }
}

/// Mean response value for one category across assessments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAverage {
    pub category: Category,
    pub total: u64,
    pub count: u64,
    /// Mean on the 1-5 response scale.
    pub average: f64,
    /// Mean projected onto 0-100.
    pub display_score: Percentage,
}

impl CategoryAverage {
    /// `count` must be non-zero for a meaningful average; zero yields 0.
    pub fn new(category: Category, total: u64, count: u64) -> Self {
        let average = if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        };
        Self {
            category,
            total,
            count,
            average,
            display_score: display_score(total, count),
        }
    }
}

/// One point of the trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub assessment_id: AssessmentId,
    pub date: Option<NaiveDate>,
    pub completed_at: Option<Timestamp>,
    pub percentage: Percentage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inconsistency: Option<ScoreInconsistency>,
}

impl TrendPoint {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let (percentage, inconsistency) = assessment_percentage(assessment);
        Self {
            assessment_id: assessment.id(),
            date: assessment.completed_at().map(Timestamp::date),
            completed_at: assessment.completed_at().copied(),
            percentage,
            inconsistency,
        }
    }
}
