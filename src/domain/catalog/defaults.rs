//! Built-in operations assessment catalog.
//!
//! Fifteen questions, five per known category, numbered 1-15 in order.

use once_cell::sync::Lazy;

use super::{Category, Question, QuestionCatalog};
use crate::domain::foundation::QuestionId;

const DEFAULT_QUESTIONS: &[(u32, &str, &str)] = &[
    (1, "Process Efficiency", "How well documented and standardized are your core operational processes?"),
    (2, "Process Efficiency", "How effectively does your organization identify and eliminate bottlenecks?"),
    (3, "Process Efficiency", "How consistently are workflows measured against defined performance targets?"),
    (4, "Process Efficiency", "How quickly can your processes adapt to changes in demand or priorities?"),
    (5, "Process Efficiency", "How much of your repetitive manual work has been automated?"),
    (6, "Technology & Systems", "How well do your business systems integrate and share data with each other?"),
    (7, "Technology & Systems", "How reliable and available are the systems your operations depend on?"),
    (8, "Technology & Systems", "How accessible is accurate, real-time operational data to decision makers?"),
    (9, "Technology & Systems", "How current is your technology stack relative to your operational needs?"),
    (10, "Technology & Systems", "How effectively are digital tools adopted across teams?"),
    (11, "Team Performance", "How clearly are roles, responsibilities, and expectations defined?"),
    (12, "Team Performance", "How effective is communication within and between teams?"),
    (13, "Team Performance", "How well are team members trained for the work they perform?"),
    (14, "Team Performance", "How regularly is performance reviewed and feedback acted upon?"),
    (15, "Team Performance", "How engaged and accountable are team members in improving operations?"),
];

static DEFAULT_CATALOG: Lazy<QuestionCatalog> = Lazy::new(|| {
    let questions = DEFAULT_QUESTIONS
        .iter()
        .filter_map(|&(id, category, text)| {
            Question::new(QuestionId::new(id), Category::from(category), text, id).ok()
        })
        .collect();
    QuestionCatalog::new(questions).unwrap_or_default()
});

/// Returns the built-in catalog.
pub fn default_catalog() -> &'static QuestionCatalog {
    &DEFAULT_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_fifteen_questions() {
        assert_eq!(default_catalog().len(), 15);
    }

    #[test]
    fn default_catalog_has_five_per_known_category() {
        let catalog = default_catalog();
        for category in Category::known() {
            assert_eq!(catalog.question_count_in(category), 5, "{}", category);
        }
    }

    #[test]
    fn default_catalog_ids_follow_category_blocks() {
        let catalog = default_catalog();
        assert_eq!(
            catalog.category_of(QuestionId::new(6)),
            Some(&Category::TechnologySystems)
        );
        assert_eq!(
            catalog.category_of(QuestionId::new(15)),
            Some(&Category::TeamPerformance)
        );
    }
}
