//! Interview records: questions and feedback.
//!
//! JSON Schemas describing the wire shape of each record live in
//! `schemas/` and are embedded by the validation adapter.

mod feedback;
mod question;

pub use feedback::{FeedbackRecord, FeedbackScores, InterviewFeedback, ScoresRecord};
pub use question::{InterviewQuestion, QuestionRecord};
