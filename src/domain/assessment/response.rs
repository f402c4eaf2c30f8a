//! Responses - recorded 1-5 answers and the per-assessment response set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{QuestionId, Timestamp, ValidationError};

/// Highest value a single answer can take; also the per-question score ceiling.
pub const MAX_RESPONSE_VALUE: u8 = 5;

/// Lowest value a single answer can take.
pub const MIN_RESPONSE_VALUE: u8 = 1;

/// An answer on the 1 (poor) to 5 (excellent) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ResponseValue(u8);

impl ResponseValue {
    /// Creates a ResponseValue, returning error if outside 1-5.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if value < i32::from(MIN_RESPONSE_VALUE) || value > i32::from(MAX_RESPONSE_VALUE) {
            return Err(ValidationError::out_of_range(
                "value",
                i32::from(MIN_RESPONSE_VALUE),
                i32::from(MAX_RESPONSE_VALUE),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// All valid values, lowest first.
    pub fn all() -> impl Iterator<Item = ResponseValue> {
        (MIN_RESPONSE_VALUE..=MAX_RESPONSE_VALUE).map(ResponseValue)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the short label shown next to the option.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Poor",
            2 => "Fair",
            3 => "Good",
            4 => "Very Good",
            _ => "Excellent",
        }
    }

    /// Returns the longer option description.
    pub fn description(&self) -> &'static str {
        match self.0 {
            1 => "Significant issues, needs immediate attention",
            2 => "Below average, room for improvement",
            3 => "Adequate performance, meeting basic requirements",
            4 => "Above average, performing well",
            _ => "Outstanding performance, best in class",
        }
    }
}

impl TryFrom<u8> for ResponseValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(i32::from(value))
    }
}

impl From<ResponseValue> for u8 {
    fn from(value: ResponseValue) -> Self {
        value.0
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded answer to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: QuestionId,
    pub value: ResponseValue,
    pub answered_at: Timestamp,
}

impl Response {
    pub fn new(question_id: QuestionId, value: ResponseValue, answered_at: Timestamp) -> Self {
        Self {
            question_id,
            value,
            answered_at,
        }
    }
}

/// Ordered responses, at most one per question.
///
/// Re-answering a question replaces its response in place, so the set keeps
/// the order in which questions were first answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Response>", into = "Vec<Response>")]
pub struct ResponseSet {
    responses: Vec<Response>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a response, returning the one it replaced.
    pub fn record(&mut self, response: Response) -> Option<Response> {
        match self
            .responses
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            Some(existing) => Some(std::mem::replace(existing, response)),
            None => {
                self.responses.push(response);
                None
            }
        }
    }

    pub fn get(&self, question_id: QuestionId) -> Option<&Response> {
        self.responses.iter().find(|r| r.question_id == question_id)
    }

    pub fn contains(&self, question_id: QuestionId) -> bool {
        self.get(question_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Response> {
        self.responses.iter()
    }

    pub fn as_slice(&self) -> &[Response] {
        &self.responses
    }

    /// Sum of all response values.
    pub fn total(&self) -> u64 {
        self.responses.iter().map(|r| u64::from(r.value.value())).sum()
    }

    /// Keeps only responses matching the predicate.
    pub fn retain(&mut self, keep: impl FnMut(&Response) -> bool) {
        self.responses.retain(keep);
    }
}

impl From<Vec<Response>> for ResponseSet {
    fn from(responses: Vec<Response>) -> Self {
        let mut set = ResponseSet::new();
        for response in responses {
            set.record(response);
        }
        set
    }
}

impl From<ResponseSet> for Vec<Response> {
    fn from(set: ResponseSet) -> Self {
        set.responses
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = &'a Response;
    type IntoIter = std::slice::Iter<'a, Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(id: u32, value: i32) -> Response {
        Response::new(
            QuestionId::new(id),
            ResponseValue::try_new(value).unwrap(),
            Timestamp::from_unix_secs(1_700_000_000),
        )
    }

    #[test]
    fn value_accepts_one_through_five() {
        for v in 1..=5 {
            assert_eq!(ResponseValue::try_new(v).unwrap().value(), v as u8);
        }
    }

    #[test]
    fn value_rejects_out_of_range() {
        assert_eq!(
            ResponseValue::try_new(0),
            Err(ValidationError::out_of_range("value", 1, 5, 0))
        );
        assert!(ResponseValue::try_new(6).is_err());
        assert!(ResponseValue::try_new(-3).is_err());
    }

    #[test]
    fn value_labels_match_scale() {
        let labels: Vec<&str> = ResponseValue::all().map(|v| v.label()).collect();
        assert_eq!(labels, vec!["Poor", "Fair", "Good", "Very Good", "Excellent"]);
    }

    #[test]
    fn value_deserialization_is_validated() {
        assert!(serde_json::from_str::<ResponseValue>("4").is_ok());
        assert!(serde_json::from_str::<ResponseValue>("9").is_err());
    }

    #[test]
    fn response_serializes_camel_case() {
        let json = serde_json::to_string(&response(2, 3)).unwrap();
        assert!(json.contains("\"questionId\":2"));
        assert!(json.contains("\"value\":3"));
        assert!(json.contains("\"answeredAt\""));
    }

    #[test]
    fn record_replaces_existing_in_place() {
        let mut set = ResponseSet::new();
        set.record(response(1, 2));
        set.record(response(2, 4));
        let previous = set.record(response(1, 5));

        assert_eq!(previous.map(|r| r.value.value()), Some(2));
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].question_id, QuestionId::new(1));
        assert_eq!(set.as_slice()[0].value.value(), 5);
        assert_eq!(set.total(), 9);
    }

    #[test]
    fn from_vec_collapses_duplicates_keeping_last() {
        let set = ResponseSet::from(vec![response(1, 1), response(1, 3)]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(QuestionId::new(1)).unwrap().value.value(), 3);
    }

    #[test]
    fn serializes_as_plain_sequence() {
        let set = ResponseSet::from(vec![response(1, 1)]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with('['));
        let back: ResponseSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
