//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be one of {expected:?}, got '{value}'")]
    UnknownVariant {
        field: String,
        value: String,
        expected: Vec<String>,
    },

    #[error("Field '{field}' must be a finite number")]
    NonFinite { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an unknown variant error listing the accepted literals.
    pub fn unknown_variant(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        ValidationError::UnknownVariant {
            field: field.into(),
            value: value.into(),
            expected: expected.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates a non-finite number error.
    pub fn non_finite(field: impl Into<String>) -> Self {
        ValidationError::NonFinite { field: field.into() }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::UnknownVariant { field, .. }
            | ValidationError::NonFinite { field } => field,
        }
    }

    /// Error code matching this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::UnknownVariant { .. } => ErrorCode::UnknownVariant,
            ValidationError::NonFinite { .. } => ErrorCode::NonFiniteNumber,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    UnknownVariant,
    NonFiniteNumber,

    // Boundary errors
    ParseFailed,
    SchemaViolation,
    EncodeFailed,

    // Infrastructure errors
    IoError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::UnknownVariant => "UNKNOWN_VARIANT",
            ErrorCode::NonFiniteNumber => "NON_FINITE_NUMBER",
            ErrorCode::ParseFailed => "PARSE_FAILED",
            ErrorCode::SchemaViolation => "SCHEMA_VIOLATION",
            ErrorCode::EncodeFailed => "ENCODE_FAILED",
            ErrorCode::IoError => "IO_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string()).with_detail("field", err.field())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
