//! Results - the derived report for one assessment.
//!
//! Always recomputed from an assessment plus the catalog; never stored.

use serde::Serialize;

use super::{
    CategoryScore, PerformanceTier, Recommendation, RecommendationGenerator, ScoreInconsistency,
    ScoringEngine,
};
use crate::domain::assessment::{Assessment, ResponseSet};
use crate::domain::catalog::{Category, QuestionCatalog};
use crate::domain::foundation::{AssessmentId, Percentage, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub assessment_id: Option<AssessmentId>,
    pub completed_at: Option<Timestamp>,
    pub overall_score: u64,
    pub overall_max_score: u64,
    pub overall_percentage: Percentage,
    /// Categories with at least one question, in catalog order.
    pub category_scores: Vec<CategoryScore>,
    pub performance_tier: PerformanceTier,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inconsistency: Option<ScoreInconsistency>,
}

impl Results {
    /// Computes results for a stored assessment.
    pub fn for_assessment(assessment: &Assessment, catalog: &QuestionCatalog) -> Self {
        let mut results = Self::from_responses(assessment.responses(), catalog);
        results.assessment_id = Some(assessment.id());
        results.completed_at = assessment.completed_at().copied();
        results
    }

    /// Computes results for a bare response set.
    pub fn from_responses(responses: &ResponseSet, catalog: &QuestionCatalog) -> Self {
        let category_scores = ScoringEngine::category_scores(responses, catalog);
        let overall = ScoringEngine::overall_from_categories(&category_scores);
        let recommendations = RecommendationGenerator::generate(&category_scores, catalog);

        Self {
            assessment_id: None,
            completed_at: None,
            overall_score: overall.score,
            overall_max_score: overall.max_score,
            overall_percentage: overall.percentage,
            performance_tier: overall.tier(),
            category_scores,
            recommendations,
            inconsistency: overall.inconsistency,
        }
    }

    pub fn category_score(&self, category: &Category) -> Option<&CategoryScore> {
        self.category_scores.iter().find(|s| &s.category == category)
    }

    pub fn is_consistent(&self) -> bool {
        self.inconsistency.is_none()
    }
}
