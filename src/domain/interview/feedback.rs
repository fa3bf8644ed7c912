//! InterviewFeedback value object and its score triple.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Score, ValidationError};

/// The three numeric sub-scores of a feedback record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScoresRecord")]
pub struct FeedbackScores {
    relevance: Score,
    clarity: Score,
    depth: Score,
}

/// Unvalidated wire shape of the score triple.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScoresRecord {
    pub relevance: f64,
    pub clarity: f64,
    pub depth: f64,
}

impl FeedbackScores {
    /// Creates a score triple. Each value must be finite.
    pub fn new(relevance: f64, clarity: f64, depth: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            relevance: Score::try_new("scores.relevance", relevance)?,
            clarity: Score::try_new("scores.clarity", clarity)?,
            depth: Score::try_new("scores.depth", depth)?,
        })
    }

    pub fn relevance(&self) -> Score {
        self.relevance
    }

    pub fn clarity(&self) -> Score {
        self.clarity
    }

    pub fn depth(&self) -> Score {
        self.depth
    }
}

impl TryFrom<ScoresRecord> for FeedbackScores {
    type Error = ValidationError;

    fn try_from(record: ScoresRecord) -> Result<Self, Self::Error> {
        FeedbackScores::new(record.relevance, record.clarity, record.depth)
    }
}

/// Qualitative feedback on an interview response plus its sub-scores.
///
/// All fields are mandatory. Narratives may be empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FeedbackRecord")]
pub struct InterviewFeedback {
    strengths: String,
    improvements: String,
    suggestions: String,
    scores: FeedbackScores,
}

/// Unvalidated wire shape of a feedback record.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRecord {
    pub strengths: String,
    pub improvements: String,
    pub suggestions: String,
    pub scores: ScoresRecord,
}

impl InterviewFeedback {
    pub fn new(
        strengths: impl Into<String>,
        improvements: impl Into<String>,
        suggestions: impl Into<String>,
        scores: FeedbackScores,
    ) -> Self {
        Self {
            strengths: strengths.into(),
            improvements: improvements.into(),
            suggestions: suggestions.into(),
            scores,
        }
    }

    pub fn strengths(&self) -> &str {
        &self.strengths
    }

    pub fn improvements(&self) -> &str {
        &self.improvements
    }

    pub fn suggestions(&self) -> &str {
        &self.suggestions
    }

    pub fn scores(&self) -> &FeedbackScores {
        &self.scores
    }
}

impl TryFrom<FeedbackRecord> for InterviewFeedback {
    type Error = ValidationError;

    fn try_from(record: FeedbackRecord) -> Result<Self, Self::Error> {
        Ok(InterviewFeedback::new(
            record.strengths,
            record.improvements,
            record.suggestions,
            FeedbackScores::try_from(record.scores)?,
        ))
    }
}
