//! Question entity - a single scored prompt in the catalog.

use serde::{Deserialize, Serialize};

use super::Category;
use crate::domain::foundation::{QuestionId, ValidationError};

/// An immutable catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    category: Category,
    text: String,
    /// Sort key within the catalog.
    order: u32,
    /// Carried for catalog fidelity; scoring sums raw values.
    #[serde(default = "default_weight")]
    weight: u32,
}

fn default_weight() -> u32 {
    1
}

impl Question {
    /// Creates a question with the default weight.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is blank
    pub fn new(
        id: QuestionId,
        category: Category,
        text: impl Into<String>,
        order: u32,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            id,
            category,
            text,
            order,
            weight: default_weight(),
        })
    }

    /// Returns a copy with the given weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_has_default_weight() {
        let q = Question::new(QuestionId::new(1), Category::ProcessEfficiency, "How?", 1).unwrap();
        assert_eq!(q.weight(), 1);
        assert_eq!(q.text(), "How?");
    }

    #[test]
    fn blank_text_is_rejected() {
        let result = Question::new(QuestionId::new(1), Category::ProcessEfficiency, "  ", 1);
        assert_eq!(result, Err(ValidationError::empty_field("text")));
    }

    #[test]
    fn deserializes_without_weight() {
        let json = r#"{"id":3,"category":"Team Performance","text":"Q","order":3}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.category(), &Category::TeamPerformance);
        assert_eq!(q.weight(), 1);
    }
}
