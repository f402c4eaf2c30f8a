//! AssessmentStatus enum for tracking the lifecycle of an assessment run.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentStatus {
    #[default]
    InProgress,
    Completed,
}

impl AssessmentStatus {
    /// Returns true if responses may still be recorded.
    pub fn is_mutable(&self) -> bool {
        matches!(self, AssessmentStatus::InProgress)
    }

    /// Returns true if the assessment has been finalized.
    pub fn is_completed(&self) -> bool {
        matches!(self, AssessmentStatus::Completed)
    }
}

impl StateMachine for AssessmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStatus::*;
        matches!((self, target), (InProgress, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            AssessmentStatus::InProgress => vec![AssessmentStatus::Completed],
            AssessmentStatus::Completed => vec![],
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentStatus::InProgress => "In Progress",
            AssessmentStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
