//! JSON Schema Validator - Implementation of RecordSchemaValidator.
//!
//! Uses manual validation against embedded JSON Schema definitions.
//! Validates record values without external schema validation dependencies.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::domain::foundation::{QuestionType, RecordKind};
use crate::ports::{RecordSchemaValidator, SchemaValidationError};

const QUESTION_FIELDS: &[&str] = &["type", "question"];
const FEEDBACK_NARRATIVES: &[&str] = &["strengths", "improvements", "suggestions"];
const FEEDBACK_FIELDS: &[&str] = &["strengths", "improvements", "suggestions", "scores"];
const SCORE_FIELDS: &[&str] = &["relevance", "clarity", "depth"];

/// JSON Schema-based validator implementation.
///
/// Schemas are embedded in the binary via `include_str!`.
///
/// # Thread Safety
///
/// This struct is `Send + Sync` and can be shared across threads.
#[derive(Debug, Clone)]
pub struct JsonSchemaValidator {
    reject_unknown_fields: bool,
}

impl Default for JsonSchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSchemaValidator {
    /// Create a strict validator that rejects fields outside the schema.
    pub fn new() -> Self {
        Self {
            reject_unknown_fields: true,
        }
    }

    /// Create a validator that tolerates extra fields.
    pub fn lenient() -> Self {
        Self {
            reject_unknown_fields: false,
        }
    }

    pub fn with_reject_unknown_fields(mut self, reject: bool) -> Self {
        self.reject_unknown_fields = reject;
        self
    }

    pub fn rejects_unknown_fields(&self) -> bool {
        self.reject_unknown_fields
    }

    /// Load raw schema JSON for a record kind.
    fn load_raw_schema(kind: RecordKind) -> Value {
        let schema_str = match kind {
            RecordKind::Question => {
                include_str!("../../domain/interview/schemas/interview_question.json")
            }
            RecordKind::Feedback => {
                include_str!("../../domain/interview/schemas/interview_feedback.json")
            }
        };

        serde_json::from_str(schema_str)
            .unwrap_or_else(|e| panic!("Failed to parse schema for {:?}: {}", kind, e))
    }

    // =========================================================================
    // Record-specific validators
    // =========================================================================

    fn validate_question(&self, value: &Value) -> Result<(), SchemaValidationError> {
        let obj = Self::require_object(value, "root")?;
        let mut errors = Vec::new();

        self.check_unknown_fields(obj, QUESTION_FIELDS, "root", &mut errors);

        if let Some(t) = Self::require_string(obj, "type", "root", &mut errors) {
            if !QuestionType::LITERALS.contains(&t) {
                errors.push(SchemaValidationError::UnknownVariant {
                    field: "type".to_string(),
                    value: t.to_string(),
                    allowed: QuestionType::LITERALS.iter().map(|s| s.to_string()).collect(),
                });
            }
        }

        if let Some(text) = Self::require_string(obj, "question", "root", &mut errors) {
            if text.trim().is_empty() {
                errors.push(SchemaValidationError::EmptyValue {
                    field: "question".to_string(),
                });
            }
        }

        Self::finish(errors)
    }

    fn validate_feedback(&self, value: &Value) -> Result<(), SchemaValidationError> {
        let obj = Self::require_object(value, "root")?;
        let mut errors = Vec::new();

        self.check_unknown_fields(obj, FEEDBACK_FIELDS, "root", &mut errors);

        for field in FEEDBACK_NARRATIVES {
            Self::require_string(obj, field, "root", &mut errors);
        }

        match obj.get("scores") {
            None => errors.push(SchemaValidationError::MissingRequired {
                field: "scores".to_string(),
            }),
            Some(scores) => match Self::require_object(scores, "scores") {
                Err(e) => errors.push(e),
                Ok(scores) => {
                    self.check_unknown_fields(scores, SCORE_FIELDS, "scores", &mut errors);
                    for field in SCORE_FIELDS {
                        Self::require_number(scores, field, "scores", &mut errors);
                    }
                }
            },
        }

        Self::finish(errors)
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn require_object<'a>(
        value: &'a Value,
        path: &str,
    ) -> Result<&'a Map<String, Value>, SchemaValidationError> {
        value.as_object().ok_or_else(|| SchemaValidationError::InvalidType {
            field: path.to_string(),
            expected: "object".to_string(),
            actual: Self::type_name(value),
        })
    }

    fn path(parent: &str, field: &str) -> String {
        if parent == "root" {
            field.to_string()
        } else {
            format!("{}.{}", parent, field)
        }
    }

    fn require_string<'a>(
        obj: &'a Map<String, Value>,
        field: &str,
        parent: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) -> Option<&'a str> {
        match obj.get(field) {
            None => {
                errors.push(SchemaValidationError::MissingRequired {
                    field: Self::path(parent, field),
                });
                None
            }
            Some(Value::String(s)) => Some(s.as_str()),
            Some(other) => {
                errors.push(SchemaValidationError::InvalidType {
                    field: Self::path(parent, field),
                    expected: "string".to_string(),
                    actual: Self::type_name(other),
                });
                None
            }
        }
    }

    fn require_number(
        obj: &Map<String, Value>,
        field: &str,
        parent: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        match obj.get(field) {
            None => errors.push(SchemaValidationError::MissingRequired {
                field: Self::path(parent, field),
            }),
            Some(Value::Number(_)) => {}
            Some(other) => errors.push(SchemaValidationError::InvalidType {
                field: Self::path(parent, field),
                expected: "number".to_string(),
                actual: Self::type_name(other),
            }),
        }
    }

    fn check_unknown_fields(
        &self,
        obj: &Map<String, Value>,
        known: &[&str],
        parent: &str,
        errors: &mut Vec<SchemaValidationError>,
    ) {
        if !self.reject_unknown_fields {
            return;
        }
        for key in obj.keys() {
            if !known.contains(&key.as_str()) {
                errors.push(SchemaValidationError::UnknownField {
                    field: Self::path(parent, key),
                });
            }
        }
    }

    fn type_name(value: &Value) -> String {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
        .to_string()
    }

    fn finish(mut errors: Vec<SchemaValidationError>) -> Result<(), SchemaValidationError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(SchemaValidationError::Multiple(errors)),
        }
    }
}

/// Static storage for raw schemas (for `schema_for` method).
static RAW_SCHEMAS: Lazy<HashMap<RecordKind, Value>> = Lazy::new(|| {
    RecordKind::all()
        .iter()
        .map(|kind| (*kind, JsonSchemaValidator::load_raw_schema(*kind)))
        .collect()
});

impl RecordSchemaValidator for JsonSchemaValidator {
    fn validate(&self, kind: RecordKind, value: &Value) -> Result<(), SchemaValidationError> {
        match kind {
            RecordKind::Question => self.validate_question(value),
            RecordKind::Feedback => self.validate_feedback(value),
        }
    }

    fn schema_for(&self, kind: RecordKind) -> &Value {
        RAW_SCHEMAS
            .get(&kind)
            .expect("Schema must exist for all record kinds")
    }
}
