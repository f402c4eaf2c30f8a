//! Performance tiers over the 0-100 overall percentage.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Named band of overall performance. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Fair")]
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl PerformanceTier {
    /// All tiers, best first.
    pub const ALL: [PerformanceTier; 5] = [
        PerformanceTier::Excellent,
        PerformanceTier::VeryGood,
        PerformanceTier::Good,
        PerformanceTier::Fair,
        PerformanceTier::NeedsImprovement,
    ];

    pub fn classify(percentage: Percentage) -> Self {
        match percentage.value() {
            90..=u8::MAX => PerformanceTier::Excellent,
            80..=89 => PerformanceTier::VeryGood,
            70..=79 => PerformanceTier::Good,
            60..=69 => PerformanceTier::Fair,
            _ => PerformanceTier::NeedsImprovement,
        }
    }

    /// Inclusive lower bound of the tier.
    pub fn min_percentage(&self) -> u8 {
        match self {
            PerformanceTier::Excellent => 90,
            PerformanceTier::VeryGood => 80,
            PerformanceTier::Good => 70,
            PerformanceTier::Fair => 60,
            PerformanceTier::NeedsImprovement => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::VeryGood => "Very Good",
            PerformanceTier::Good => "Good",
            PerformanceTier::Fair => "Fair",
            PerformanceTier::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
