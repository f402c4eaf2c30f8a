//! Category - named grouping of assessment questions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three categories the questionnaire is designed around, in catalog order.
pub static KNOWN_CATEGORIES: [Category; 3] = [
    Category::ProcessEfficiency,
    Category::TechnologySystems,
    Category::TeamPerformance,
];

/// A question category.
///
/// Catalogs may declare categories outside the known set; those are kept
/// as `Other` (trimmed) and sort after the known ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    ProcessEfficiency,
    TechnologySystems,
    TeamPerformance,
    Other(String),
}

impl Category {
    /// Returns the known categories in their fixed order.
    pub fn known() -> &'static [Category] {
        &KNOWN_CATEGORIES
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        match self {
            Category::ProcessEfficiency => "Process Efficiency",
            Category::TechnologySystems => "Technology & Systems",
            Category::TeamPerformance => "Team Performance",
            Category::Other(name) => name,
        }
    }

    /// Returns true for one of the known categories.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.trim() {
            "Process Efficiency" => Category::ProcessEfficiency,
            "Technology & Systems" => Category::TechnologySystems,
            "Team Performance" => Category::TeamPerformance,
            trimmed => Category::Other(trimmed.to_string()),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s))
    }
}
