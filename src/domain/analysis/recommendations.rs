//! Recommendation Generator - ranked advice for weak categories.

use serde::{Deserialize, Serialize};

use super::CategoryScore;
use crate::domain::catalog::{Category, QuestionCatalog};
use crate::domain::foundation::Percentage;

/// Categories scoring strictly below this percentage get a recommendation.
pub const RECOMMENDATION_THRESHOLD: u8 = 70;

const GENERIC_ADVICE: &str = "Review and improve processes in this area.";

/// Advice for one under-performing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: Category,
    pub percentage: Percentage,
    pub advice: String,
}

pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Builds recommendations, worst category first.
    ///
    /// Ties keep catalog category order. Scores flagged as having no
    /// questions are skipped.
    pub fn generate(scores: &[CategoryScore], catalog: &QuestionCatalog) -> Vec<Recommendation> {
        let mut ranked: Vec<(&CategoryScore, usize)> = scores
            .iter()
            .filter(|s| s.max_score > 0 && s.percentage.value() < RECOMMENDATION_THRESHOLD)
            .map(|s| (s, catalog.category_rank(&s.category)))
            .collect();

        ranked.sort_by_key(|(s, rank)| (s.percentage, *rank));

        ranked
            .into_iter()
            .map(|(s, _)| Recommendation {
                category: s.category.clone(),
                percentage: s.percentage,
                advice: Self::advice_for(&s.category).to_string(),
            })
            .collect()
    }

    /// Canned advice for a category.
    pub fn advice_for(category: &Category) -> &'static str {
        match category {
            Category::ProcessEfficiency => {
                "Focus on streamlining workflows, implementing standard operating procedures, and identifying automation opportunities."
            }
            Category::TechnologySystems => {
                "Invest in upgrading technology infrastructure, improving system integration, and adopting digital tools for better efficiency."
            }
            Category::TeamPerformance => {
                "Enhance team communication, provide skills training, and implement performance management systems."
            }
            Category::Other(_) => GENERIC_ADVICE,
        }
    }
}
