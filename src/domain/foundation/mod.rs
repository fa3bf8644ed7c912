//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the interview records.

mod errors;
mod question_type;
mod record_kind;
mod score;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use question_type::QuestionType;
pub use record_kind::RecordKind;
pub use score::Score;
