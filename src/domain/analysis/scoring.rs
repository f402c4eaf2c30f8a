//! Scoring Engine - category and overall scores from a response set.

use serde::{Deserialize, Serialize};

use super::PerformanceTier;
use crate::domain::assessment::{ResponseSet, MAX_RESPONSE_VALUE};
use crate::domain::catalog::{Category, QuestionCatalog};
use crate::domain::foundation::Percentage;

/// Score ceiling per question.
pub const MAX_SCORE_PER_QUESTION: u64 = MAX_RESPONSE_VALUE as u64;

/// Flag attached to a score whose inputs did not line up with the catalog.
///
/// A flagged score still carries a numeric percentage (0% when there was no
/// denominator) so callers never see an undefined value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScoreInconsistency {
    /// Max score was zero: the category (or catalog) has no questions.
    NoQuestions,
    /// A response set with no responses at all.
    NoResponses,
    /// Fewer answers than questions.
    #[serde(rename_all = "camelCase")]
    Incomplete { answered: usize, expected: usize },
}

/// Score for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: Category,
    pub score: u64,
    pub max_score: u64,
    pub percentage: Percentage,
    pub question_count: usize,
    pub answered: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inconsistency: Option<ScoreInconsistency>,
}

impl CategoryScore {
    pub fn is_consistent(&self) -> bool {
        self.inconsistency.is_none()
    }
}

/// Score across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub score: u64,
    pub max_score: u64,
    pub percentage: Percentage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inconsistency: Option<ScoreInconsistency>,
}

impl OverallScore {
    pub fn is_consistent(&self) -> bool {
        self.inconsistency.is_none()
    }

    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::classify(self.percentage)
    }
}

/// Stateless scoring functions.
///
/// Category membership always comes from the catalog; responses to
/// questions the catalog does not know are ignored.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Scores one category.
    ///
    /// # Edge Cases
    /// - Category with no questions: 0% flagged `NoQuestions`
    /// - Unanswered questions: scored as missing, flagged `Incomplete`
    pub fn category_score(
        category: &Category,
        responses: &ResponseSet,
        catalog: &QuestionCatalog,
    ) -> CategoryScore {
        let question_count = catalog.question_count_in(category);
        let max_score = question_count as u64 * MAX_SCORE_PER_QUESTION;

        let (score, answered) = responses
            .iter()
            .filter(|r| catalog.category_of(r.question_id) == Some(category))
            .fold((0u64, 0usize), |(sum, n), r| (sum + u64::from(r.value.value()), n + 1));

        let (percentage, inconsistency) = guarded_percentage(score, max_score, answered, question_count);

        CategoryScore {
            category: category.clone(),
            score,
            max_score,
            percentage,
            question_count,
            answered,
            inconsistency,
        }
    }

    /// Scores every category that has at least one question, in catalog order.
    pub fn category_scores(responses: &ResponseSet, catalog: &QuestionCatalog) -> Vec<CategoryScore> {
        catalog
            .categories()
            .iter()
            .filter(|c| catalog.question_count_in(c) > 0)
            .map(|c| Self::category_score(c, responses, catalog))
            .collect()
    }

    /// Scores the whole catalog as the sum of its categories.
    pub fn overall_score(responses: &ResponseSet, catalog: &QuestionCatalog) -> OverallScore {
        Self::overall_from_categories(&Self::category_scores(responses, catalog))
    }

    /// Sums precomputed category scores.
    pub fn overall_from_categories(categories: &[CategoryScore]) -> OverallScore {
        let score = categories.iter().map(|c| c.score).sum();
        let max_score = categories.iter().map(|c| c.max_score).sum();
        let answered = categories.iter().map(|c| c.answered).sum();
        let expected = categories.iter().map(|c| c.question_count).sum();

        let (percentage, inconsistency) = guarded_percentage(score, max_score, answered, expected);
        OverallScore {
            score,
            max_score,
            percentage,
            inconsistency,
        }
    }

    /// Percentage of a single assessment without reference to a catalog:
    /// `round(sum / (count * 5) * 100)`.
    pub fn response_percentage(responses: &ResponseSet) -> (Percentage, Option<ScoreInconsistency>) {
        let max_score = responses.len() as u64 * MAX_SCORE_PER_QUESTION;
        match Percentage::from_ratio(responses.total(), max_score) {
            Some(p) => (p, None),
            None => (Percentage::ZERO, Some(ScoreInconsistency::NoResponses)),
        }
    }

    pub fn classify_performance(percentage: Percentage) -> PerformanceTier {
        PerformanceTier::classify(percentage)
    }
}

fn guarded_percentage(
    score: u64,
    max_score: u64,
    answered: usize,
    expected: usize,
) -> (Percentage, Option<ScoreInconsistency>) {
    match Percentage::from_ratio(score, max_score) {
        None => (Percentage::ZERO, Some(ScoreInconsistency::NoQuestions)),
        Some(p) if answered != expected => (p, Some(ScoreInconsistency::Incomplete { answered, expected })),
        Some(p) => (p, None),
    }
}
