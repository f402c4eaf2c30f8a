//! Analysis Module - Pure domain services for scoring assessments.
//!
//! # Components
//!
//! - `ScoringEngine` - category and overall scores with guarded percentages
//! - `PerformanceTier` - named bands over the overall percentage
//! - `RecommendationGenerator` - ranked advice for categories below 70%
//! - `Results` - the full derived report for one assessment
//!
//! All functions are pure and stateless. They take domain objects as input
//! and return computed results; no ports are involved.

mod performance_tier;
mod recommendations;
mod results;
mod scoring;

pub use performance_tier::PerformanceTier;
pub use recommendations::{Recommendation, RecommendationGenerator, RECOMMENDATION_THRESHOLD};
pub use results::Results;
pub use scoring::{CategoryScore, OverallScore, ScoreInconsistency, ScoringEngine, MAX_SCORE_PER_QUESTION};
