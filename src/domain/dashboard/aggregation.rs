//! Aggregation Engine - summaries across many completed assessments.
//!
//! Every selection works on a copied, sorted view of the input; the caller's
//! slice is never reordered.

use std::collections::HashMap;

use super::{AssessmentSnapshot, CategoryAverage, DashboardSummary, TrendPoint};
use crate::domain::analysis::{ScoreInconsistency, ScoringEngine};
use crate::domain::assessment::Assessment;
use crate::domain::catalog::{Category, QuestionCatalog};
use crate::domain::foundation::Percentage;

/// Default number of points in the trend series.
pub const DEFAULT_TREND_WINDOW: usize = 5;

/// Number of assessments in the "recent" list.
pub const RECENT_LIMIT: usize = 5;

/// Multiplier projecting a 1-5 average onto 0-100 (5 x 20 = 100).
pub const DISPLAY_SCALE: u64 = 20;

pub struct AggregationEngine;

impl AggregationEngine {
    /// Completed assessments, newest first.
    ///
    /// Ordered by completion time, ties broken by the larger id.
    pub fn completed_newest_first(assessments: &[Assessment]) -> Vec<&Assessment> {
        let mut completed: Vec<&Assessment> = assessments.iter().filter(|a| a.is_completed()).collect();
        completed.sort_by(|a, b| {
            b.completed_at()
                .cmp(&a.completed_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        completed
    }

    /// Average response value per category over every completed assessment.
    ///
    /// Membership is looked up in `catalog`; responses to unknown questions
    /// are ignored and categories without any responses are omitted.
    pub fn average_by_category(assessments: &[Assessment], catalog: &QuestionCatalog) -> Vec<CategoryAverage> {
        let mut totals: HashMap<&Category, (u64, u64)> = HashMap::new();

        for assessment in assessments.iter().filter(|a| a.is_completed()) {
            for response in assessment.responses() {
                if let Some(category) = catalog.category_of(response.question_id) {
                    let entry = totals.entry(category).or_insert((0, 0));
                    entry.0 += u64::from(response.value.value());
                    entry.1 += 1;
                }
            }
        }

        catalog
            .categories()
            .into_iter()
            .filter_map(|category| {
                let &(total, count) = totals.get(&category)?;
                Some(CategoryAverage::new(category, total, count))
            })
            .collect()
    }

    /// The most recently completed assessment.
    pub fn latest(assessments: &[Assessment]) -> Option<&Assessment> {
        Self::completed_newest_first(assessments).into_iter().next()
    }

    /// Up to `limit` completed assessments, newest first.
    pub fn recent(assessments: &[Assessment], limit: usize) -> Vec<AssessmentSnapshot> {
        Self::completed_newest_first(assessments)
            .into_iter()
            .take(limit)
            .map(AssessmentSnapshot::from_assessment)
            .collect()
    }

    /// Percentages of the `window` most recent completed assessments, oldest
    /// first.
    pub fn trend(assessments: &[Assessment], window: usize) -> Vec<TrendPoint> {
        let mut points: Vec<TrendPoint> = Self::completed_newest_first(assessments)
            .into_iter()
            .take(window)
            .map(TrendPoint::from_assessment)
            .collect();
        points.reverse();
        points
    }

    /// Builds the full dashboard summary.
    pub fn summarize(assessments: &[Assessment], catalog: &QuestionCatalog, trend_window: usize) -> DashboardSummary {
        let trend = Self::trend(assessments, trend_window);
        DashboardSummary {
            total_assessments: assessments.iter().filter(|a| a.is_completed()).count(),
            latest: Self::latest(assessments).map(AssessmentSnapshot::from_assessment),
            recent: Self::recent(assessments, RECENT_LIMIT),
            category_averages: Self::average_by_category(assessments, catalog),
            show_trend: trend.len() > 1,
            trend,
        }
    }
}

/// `round(total / count * 20)` with halves rounded up, in integers.
pub(super) fn display_score(total: u64, count: u64) -> Percentage {
    Percentage::from_ratio(total * DISPLAY_SCALE, count * 100).unwrap_or(Percentage::ZERO)
}

/// Overall percentage of one assessment, catalog-free.
pub(super) fn assessment_percentage(assessment: &Assessment) -> (Percentage, Option<ScoreInconsistency>) {
    ScoringEngine::response_percentage(assessment.responses())
}

#[cfg(test)]
#[path = "aggregation_test.rs"]
mod aggregation_test;
