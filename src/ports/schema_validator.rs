//! Schema Validator Port - Structural validation of untyped record values.
//!
//! This port defines the contract for checking that an untyped JSON value
//! has the shape of an interview record before it is turned into a domain
//! value. The application layer depends on this trait, while adapters (like
//! JsonSchemaValidator) provide the implementation.

use serde_json::Value;
use thiserror::Error;

use crate::domain::foundation::RecordKind;

/// Port for validating untyped values against a record's schema.
///
/// # Contract
///
/// Implementations must:
/// - Know the JSON Schema for both record kinds
/// - Report every missing or mistyped field, not just the first
/// - Reject `type` literals outside the closed category set
/// - Provide schema access for introspection
///
/// # Usage
///
/// ```rust,ignore
/// let validator: &dyn RecordSchemaValidator = get_validator();
///
/// validator.validate(RecordKind::Question, &value)?;
///
/// // Raw schema for client-side validation
/// let schema = validator.schema_for(RecordKind::Feedback);
/// ```
pub trait RecordSchemaValidator: Send + Sync {
    /// Validate a value against the record kind's schema.
    ///
    /// Returns `Ok(())` if valid, `Err` with validation errors if not.
    fn validate(&self, kind: RecordKind, value: &Value) -> Result<(), SchemaValidationError>;

    /// Get the JSON Schema for a record kind.
    ///
    /// Schemas are public and safe to expose.
    fn schema_for(&self, kind: RecordKind) -> &Value;
}

/// Errors that can occur during schema validation.
///
/// # Security
///
/// These errors contain detailed information for debugging. When returning
/// errors to clients, use `to_client_message()` to get sanitized versions.
#[derive(Debug, Clone, Error)]
pub enum SchemaValidationError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid value for field {field}: '{value}' is not one of {allowed:?}")]
    UnknownVariant {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Field {field} must not be empty")]
    EmptyValue { field: String },

    #[error("Validation errors: {0:?}")]
    Multiple(Vec<SchemaValidationError>),
}

impl SchemaValidationError {
    /// Convert to client-safe error message.
    ///
    /// Hides actual types and values.
    pub fn to_client_message(&self) -> String {
        match self {
            SchemaValidationError::MissingRequired { field } => {
                format!("Missing required field: {}", field)
            }
            SchemaValidationError::InvalidType { field, expected, .. } => {
                format!("Invalid type for field '{}': expected {}", field, expected)
            }
            SchemaValidationError::UnknownVariant { field, allowed, .. } => {
                format!("Field '{}' must be one of: {}", field, allowed.join(", "))
            }
            SchemaValidationError::UnknownField { field } => {
                format!("Unknown field: {}", field)
            }
            SchemaValidationError::EmptyValue { field } => {
                format!("Field '{}' must not be empty", field)
            }
            SchemaValidationError::Multiple(errors) => errors
                .first()
                .map(|e| e.to_client_message())
                .unwrap_or_else(|| "Validation failed".to_string()),
        }
    }

    /// Returns true if this error contains multiple validation failures.
    pub fn is_multiple(&self) -> bool {
        matches!(self, SchemaValidationError::Multiple(_))
    }

    /// Get the count of validation errors.
    pub fn error_count(&self) -> usize {
        match self {
            SchemaValidationError::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }

    /// Flattened list of individual failures.
    pub fn errors(&self) -> Vec<&SchemaValidationError> {
        match self {
            SchemaValidationError::Multiple(errors) => errors.iter().collect(),
            single => vec![single],
        }
    }
}

impl PartialEq for SchemaValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
