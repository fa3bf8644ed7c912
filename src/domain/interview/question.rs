//! InterviewQuestion value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionType, ValidationError};

/// A categorized interview question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct InterviewQuestion {
    #[serde(rename = "type")]
    question_type: QuestionType,
    question: String,
}

/// Unvalidated wire shape of a question, only used on the way in.
///
/// The category stays a plain string so that an unknown literal surfaces
/// as a typed `ValidationError` from the constructor.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "type")]
    pub question_type: String,
    pub question: String,
}

impl InterviewQuestion {
    /// Creates a question. Blank question text is rejected.
    pub fn new(
        question_type: QuestionType,
        question: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }

        Ok(Self {
            question_type,
            question,
        })
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

impl TryFrom<QuestionRecord> for InterviewQuestion {
    type Error = ValidationError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let question_type = record.question_type.parse::<QuestionType>()?;
        InterviewQuestion::new(question_type, record.question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_accepts_each_category() {
        for t in QuestionType::all() {
            let q = InterviewQuestion::new(*t, "Tell me about yourself.").unwrap();
            assert_eq!(q.question_type(), *t);
            assert_eq!(q.question(), "Tell me about yourself.");
        }
    }

    #[test]
    fn new_rejects_empty_question() {
        let result = InterviewQuestion::new(QuestionType::Technical, "");
        assert_eq!(result, Err(ValidationError::empty_field("question")));
    }

    #[test]
    fn new_rejects_whitespace_question() {
        assert!(InterviewQuestion::new(QuestionType::Hr, "  \n\t").is_err());
    }

    #[test]
    fn new_keeps_text_verbatim() {
        let q = InterviewQuestion::new(QuestionType::Behavioral, "  Why us?  ").unwrap();
        assert_eq!(q.question(), "  Why us?  ");
    }

    #[test]
    fn serializes_with_type_field_name() {
        let q = InterviewQuestion::new(
            QuestionType::Technical,
            "Explain how a hash map resolves collisions.",
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({
                "type": "Technical",
                "question": "Explain how a hash map resolves collisions."
            })
        );
    }

    #[test]
    fn deserializes_valid_question() {
        let q: InterviewQuestion = serde_json::from_value(json!({
            "type": "HR",
            "question": "Where do you see yourself in five years?"
        }))
        .unwrap();

        assert_eq!(q.question_type(), QuestionType::Hr);
    }

    #[test]
    fn deserialize_rejects_unknown_type() {
        let result = serde_json::from_value::<InterviewQuestion>(json!({
            "type": "Coding",
            "question": "Reverse a linked list."
        }));
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_missing_fields() {
        assert!(serde_json::from_value::<InterviewQuestion>(json!({ "type": "HR" })).is_err());
        assert!(
            serde_json::from_value::<InterviewQuestion>(json!({ "question": "Why?" })).is_err()
        );
    }

    #[test]
    fn try_from_record_reports_unknown_type() {
        let record = QuestionRecord {
            question_type: "technical".to_string(),
            question: "Reverse a linked list.".to_string(),
        };

        assert_eq!(
            InterviewQuestion::try_from(record),
            Err(ValidationError::unknown_variant(
                "type",
                "technical",
                &QuestionType::LITERALS
            ))
        );
    }

    #[test]
    fn deserialize_routes_through_constructor() {
        let err = serde_json::from_value::<InterviewQuestion>(json!({
            "type": "Technical",
            "question": ""
        }))
        .unwrap_err();

        assert!(err.to_string().contains("Field 'question' cannot be empty"));
    }
}
