//! Domain layer containing the interview record types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (question category, score, errors)
//! - `interview` - InterviewQuestion and InterviewFeedback value objects

pub mod foundation;
pub mod interview;
