//! RecordKind enum naming the two interview record shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which interview record a value is meant to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Question,
    Feedback,
}

impl RecordKind {
    /// Returns all record kinds.
    pub fn all() -> &'static [RecordKind] {
        &[RecordKind::Question, RecordKind::Feedback]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordKind::Question => "InterviewQuestion",
            RecordKind::Feedback => "InterviewFeedback",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
