//! QuestionCatalog - ordered, category-partitioned question set.
//!
//! The catalog is the single source of truth for which category a question
//! belongs to. Scoring and aggregation look membership up here rather than
//! trusting anything embedded in a persisted assessment.

use std::collections::{HashMap, HashSet};

use super::{Category, Question};
use crate::domain::foundation::{QuestionId, ValidationError};

/// Questions of one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub category: Category,
    pub questions: Vec<Question>,
}

impl CategorySection {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// Read-only catalog of questions sorted by `order`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<QuestionId, usize>,
}

impl QuestionCatalog {
    /// Builds a catalog, sorting by `order` (then id).
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if two questions share an id
    pub fn new(mut questions: Vec<Question>) -> Result<Self, ValidationError> {
        questions.sort_by_key(|q| (q.order(), q.id()));

        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if index.insert(question.id(), position).is_some() {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("duplicate question id {}", question.id()),
                ));
            }
        }

        Ok(Self { questions, index })
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All questions sorted by order ascending.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Looks up a question by id.
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.index.get(&id).map(|&i| &self.questions[i])
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns the category a question belongs to.
    pub fn category_of(&self, id: QuestionId) -> Option<&Category> {
        self.get(id).map(Question::category)
    }

    /// Questions of one category, in order.
    pub fn questions_in<'a>(&'a self, category: &'a Category) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions.iter().filter(move |q| q.category() == category)
    }

    /// Number of questions in one category.
    pub fn question_count_in(&self, category: &Category) -> usize {
        self.questions_in(category).count()
    }

    /// Category order: the known categories first (even when empty), then any
    /// other categories in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Category::known().to_vec();
        let mut seen: HashSet<Category> = categories.iter().cloned().collect();
        for question in &self.questions {
            if seen.insert(question.category().clone()) {
                categories.push(question.category().clone());
            }
        }
        categories
    }

    /// Position of a category in catalog category order.
    pub fn category_rank(&self, category: &Category) -> usize {
        self.categories()
            .iter()
            .position(|c| c == category)
            .unwrap_or(usize::MAX)
    }

    /// Partitions the catalog by category, in category order.
    ///
    /// Every question appears in exactly one section; sections may be empty.
    pub fn sections(&self) -> Vec<CategorySection> {
        self.categories()
            .into_iter()
            .map(|category| {
                let questions = self.questions_in(&category).cloned().collect();
                CategorySection { category, questions }
            })
            .collect()
    }
}
