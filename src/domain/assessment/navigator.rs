//! Navigator - the question-by-question state machine.
//!
//! Walks a category-partitioned catalog one question at a time. The pointer
//! is `(category_index, question_index)` over the catalog sections, and
//! advancing past an unanswered question is refused.
//!
//! # Invariants
//!
//! - The cursor only ever rests on a question (empty sections are skipped)
//! - An empty catalog has no current question: `Cursor::EmptyCatalog`
//! - Responses only ever reference catalog questions

use serde::Serialize;

use super::{NavigationError, Response, ResponseSet, ResponseValue};
use crate::domain::catalog::{Category, CategorySection, Question, QuestionCatalog};
use crate::domain::foundation::{Percentage, Timestamp};

/// Where the navigator is pointing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// The catalog has no questions; there is nothing to point at.
    EmptyCatalog,
    At {
        category_index: usize,
        question_index: usize,
    },
}

/// Status of one category in the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category: Category,
    pub status: CategoryStatus,
}

/// Snapshot of how far through the catalog the session is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationProgress {
    pub answered: usize,
    pub total: usize,
    pub percent: Percentage,
    /// 1-based position within the current category; 0 for an empty catalog.
    pub question_number: usize,
    pub questions_in_category: usize,
    pub categories: Vec<CategoryProgress>,
}

/// Navigation state over a fixed catalog plus the collected responses.
#[derive(Debug, Clone)]
pub struct Navigator {
    sections: Vec<CategorySection>,
    cursor: Cursor,
    responses: ResponseSet,
    total: usize,
}

impl Navigator {
    /// Starts at the first question of the first non-empty category.
    pub fn new(catalog: &QuestionCatalog) -> Self {
        Self::with_responses(catalog, ResponseSet::new())
    }

    /// Resumes with previously collected responses.
    ///
    /// Responses to questions the catalog does not contain are dropped.
    pub fn with_responses(catalog: &QuestionCatalog, mut responses: ResponseSet) -> Self {
        responses.retain(|r| catalog.contains(r.question_id));
        let sections = catalog.sections();
        let cursor = first_position(&sections);
        Self {
            sections,
            cursor,
            responses,
            total: catalog.len(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The question under the cursor.
    ///
    /// # Errors
    ///
    /// - `EmptyCatalog` if there are no questions
    pub fn current_question(&self) -> Result<&Question, NavigationError> {
        match self.cursor {
            Cursor::EmptyCatalog => Err(NavigationError::EmptyCatalog),
            Cursor::At {
                category_index,
                question_index,
            } => self
                .sections
                .get(category_index)
                .and_then(|s| s.questions.get(question_index))
                .ok_or(NavigationError::EmptyCatalog),
        }
    }

    pub fn current_category(&self) -> Option<&Category> {
        match self.cursor {
            Cursor::EmptyCatalog => None,
            Cursor::At { category_index, .. } => {
                self.sections.get(category_index).map(|s| &s.category)
            }
        }
    }

    /// The recorded answer for the current question, if any.
    pub fn current_response(&self) -> Option<&Response> {
        let question = self.current_question().ok()?;
        self.responses.get(question.id())
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn into_responses(self) -> ResponseSet {
        self.responses
    }

    pub fn total_questions(&self) -> usize {
        self.total
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// True iff every catalog question has a response. An empty catalog is
    /// never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.responses.len() == self.total
    }

    pub fn can_submit(&self) -> bool {
        self.is_complete()
    }

    pub fn is_at_start(&self) -> bool {
        match self.cursor {
            Cursor::EmptyCatalog => true,
            Cursor::At {
                category_index,
                question_index,
            } => prev_position(&self.sections, category_index, question_index).is_none(),
        }
    }

    pub fn is_at_end(&self) -> bool {
        match self.cursor {
            Cursor::EmptyCatalog => true,
            Cursor::At {
                category_index,
                question_index,
            } => next_position(&self.sections, category_index, question_index).is_none(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Records (or overwrites) the answer to the current question.
    ///
    /// Does not move the cursor.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if `value` is outside 1-5
    /// - `EmptyCatalog` if there is no current question
    pub fn submit_answer(&mut self, value: i32) -> Result<(), NavigationError> {
        self.submit_answer_at(value, Timestamp::now())
    }

    /// As `submit_answer`, with an explicit answer time.
    pub fn submit_answer_at(&mut self, value: i32, answered_at: Timestamp) -> Result<(), NavigationError> {
        let value = ResponseValue::try_new(value)?;
        let question_id = self.current_question()?.id();
        self.responses
            .record(Response::new(question_id, value, answered_at));
        Ok(())
    }

    /// Moves to the next question, crossing into the next non-empty category
    /// when needed.
    ///
    /// Returns `Ok(false)` at the last question.
    ///
    /// # Errors
    ///
    /// - `EmptyCatalog` if there are no questions
    /// - `AnswerRequired` if the current question is unanswered
    pub fn advance(&mut self) -> Result<bool, NavigationError> {
        let Cursor::At {
            category_index,
            question_index,
        } = self.cursor
        else {
            return Err(NavigationError::EmptyCatalog);
        };

        let Some(next) = next_position(&self.sections, category_index, question_index) else {
            return Ok(false);
        };

        let question_id = self.current_question()?.id();
        if !self.responses.contains(question_id) {
            return Err(NavigationError::AnswerRequired { question_id });
        }

        self.cursor = next;
        Ok(true)
    }

    /// Moves back one question. Returns `false` at the first question or for
    /// an empty catalog.
    pub fn retreat(&mut self) -> bool {
        let Cursor::At {
            category_index,
            question_index,
        } = self.cursor
        else {
            return false;
        };

        match prev_position(&self.sections, category_index, question_index) {
            Some(prev) => {
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    /// Progress summary for display.
    pub fn progress(&self) -> NavigationProgress {
        let answered = self.responses.len();
        let current_index = match self.cursor {
            Cursor::At { category_index, .. } => Some(category_index),
            Cursor::EmptyCatalog => None,
        };

        let categories = self
            .sections
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_empty())
            .map(|(i, s)| {
                let status = match current_index {
                    Some(current) if i < current => CategoryStatus::Completed,
                    Some(current) if i == current => CategoryStatus::Current,
                    _ => CategoryStatus::Upcoming,
                };
                CategoryProgress {
                    category: s.category.clone(),
                    status,
                }
            })
            .collect();

        let (question_number, questions_in_category) = match self.cursor {
            Cursor::At {
                category_index,
                question_index,
            } => (
                question_index + 1,
                self.sections.get(category_index).map_or(0, CategorySection::len),
            ),
            Cursor::EmptyCatalog => (0, 0),
        };

        NavigationProgress {
            answered,
            total: self.total,
            percent: Percentage::from_ratio(answered as u64, self.total as u64)
                .unwrap_or(Percentage::ZERO),
            question_number,
            questions_in_category,
            categories,
        }
    }
}

fn first_position(sections: &[CategorySection]) -> Cursor {
    sections
        .iter()
        .position(|s| !s.is_empty())
        .map_or(Cursor::EmptyCatalog, |category_index| Cursor::At {
            category_index,
            question_index: 0,
        })
}

fn next_position(sections: &[CategorySection], category_index: usize, question_index: usize) -> Option<Cursor> {
    let current_len = sections.get(category_index).map_or(0, CategorySection::len);
    if question_index + 1 < current_len {
        return Some(Cursor::At {
            category_index,
            question_index: question_index + 1,
        });
    }
    sections
        .iter()
        .enumerate()
        .skip(category_index + 1)
        .find(|(_, s)| !s.is_empty())
        .map(|(i, _)| Cursor::At {
            category_index: i,
            question_index: 0,
        })
}

fn prev_position(sections: &[CategorySection], category_index: usize, question_index: usize) -> Option<Cursor> {
    if question_index > 0 {
        return Some(Cursor::At {
            category_index,
            question_index: question_index - 1,
        });
    }
    sections
        .iter()
        .enumerate()
        .take(category_index)
        .rev()
        .find(|(_, s)| !s.is_empty())
        .map(|(i, s)| Cursor::At {
            category_index: i,
            question_index: s.len() - 1,
        })
}
