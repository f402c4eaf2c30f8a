//! Strongly-typed identifier value objects.
//!
//! Identifiers are numeric because the store assigns them: questions are
//! numbered by the catalog, assessments by the repository on creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a catalog question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Creates a QuestionId from its numeric value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u32> for QuestionId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Identifier of a persisted assessment, assigned by the repository.
///
/// The default (zero) is never assigned; the first stored id is 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(u64);

impl AssessmentId {
    /// Creates an AssessmentId from its numeric value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssessmentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u64> for AssessmentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_displays_numeric_value() {
        assert_eq!(QuestionId::new(7).to_string(), "7");
    }

    #[test]
    fn question_id_parses_from_string() {
        let id: QuestionId = "12".parse().unwrap();
        assert_eq!(id, QuestionId::new(12));
    }

    #[test]
    fn question_id_rejects_non_numeric() {
        assert!("abc".parse::<QuestionId>().is_err());
    }

    #[test]
    fn question_id_serializes_transparently() {
        let json = serde_json::to_string(&QuestionId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn assessment_id_next_increments() {
        assert_eq!(AssessmentId::new(4).next(), AssessmentId::new(5));
    }

    #[test]
    fn assessment_id_next_saturates() {
        let max = AssessmentId::new(u64::MAX);
        assert_eq!(max.next(), max);
    }

    #[test]
    fn assessment_id_parses_with_whitespace() {
        let id: AssessmentId = " 42 ".parse().unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn assessment_id_ordering_follows_value() {
        assert!(AssessmentId::new(1) < AssessmentId::new(2));
    }

    #[test]
    fn assessment_id_deserializes_from_number() {
        let id: AssessmentId = serde_json::from_str("9").unwrap();
        assert_eq!(id, AssessmentId::new(9));
    }
}
