//! RecordCodec - decode and encode interview records at the text boundary.
//!
//! Decoding runs three steps: parse the text into an untyped value, check
//! the value against the record schema, then construct the domain value.
//! A value that fails any step is never handed to the caller.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, ErrorCode, RecordKind, ValidationError};
use crate::domain::interview::{FeedbackRecord, InterviewFeedback, InterviewQuestion, QuestionRecord};
use crate::ports::{RecordSchemaValidator, SchemaValidationError};

/// Text format of a record document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    #[default]
    Json,
    Yaml,
}

impl RecordFormat {
    /// Infers the format from a file extension, if it is a known one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(RecordFormat::Json),
            "yaml" | "yml" => Some(RecordFormat::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFormat::Json => write!(f, "json"),
            RecordFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// A domain record the codec can handle.
///
/// `Wire` is the unvalidated shape read from text; `from_wire` runs the
/// domain constructor on it.
pub trait InterviewRecord: Serialize + DeserializeOwned {
    const KIND: RecordKind;
    type Wire: DeserializeOwned;

    fn from_wire(wire: Self::Wire) -> Result<Self, ValidationError>;
}

impl InterviewRecord for InterviewQuestion {
    const KIND: RecordKind = RecordKind::Question;
    type Wire = QuestionRecord;

    fn from_wire(wire: QuestionRecord) -> Result<Self, ValidationError> {
        InterviewQuestion::try_from(wire)
    }
}

impl InterviewRecord for InterviewFeedback {
    const KIND: RecordKind = RecordKind::Feedback;
    type Wire = FeedbackRecord;

    fn from_wire(wire: FeedbackRecord) -> Result<Self, ValidationError> {
        InterviewFeedback::try_from(wire)
    }
}

/// Errors raised while decoding or encoding records.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to parse {format} input: {message}")]
    Syntax { format: RecordFormat, message: String },

    #[error("{kind} failed schema validation: {source}")]
    Schema {
        kind: RecordKind,
        #[source]
        source: SchemaValidationError,
    },

    #[error("{kind} does not match its wire shape: {message}")]
    Shape { kind: RecordKind, message: String },

    #[error("Could not construct {kind}: {source}")]
    Construction {
        kind: RecordKind,
        #[source]
        source: ValidationError,
    },

    #[error("Failed to encode {format} output: {message}")]
    Encode { format: RecordFormat, message: String },

    #[error("Expected a top-level array of records, got {actual}")]
    NotABatch { actual: String },

    #[error("Record {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Error code for the caller-facing envelope.
    pub fn code(&self) -> ErrorCode {
        match self {
            CodecError::Syntax { .. } | CodecError::NotABatch { .. } => ErrorCode::ParseFailed,
            CodecError::Schema { .. } => ErrorCode::SchemaViolation,
            CodecError::Shape { .. } => ErrorCode::ValidationFailed,
            CodecError::Construction { source, .. } => source.code(),
            CodecError::Encode { .. } => ErrorCode::EncodeFailed,
            CodecError::AtIndex { source, .. } => source.code(),
        }
    }
}

impl From<CodecError> for DomainError {
    fn from(err: CodecError) -> Self {
        let code = err.code();
        let mut domain = DomainError::new(code, err.to_string());
        let mut current = &err;
        while let CodecError::AtIndex { index, source } = current {
            domain = domain.with_detail("index", index.to_string());
            current = source.as_ref();
        }
        match current {
            CodecError::Schema { kind, source } => domain
                .with_detail("kind", kind.display_name())
                .with_detail("violations", source.error_count().to_string()),
            CodecError::Construction { kind, source } => domain
                .with_detail("kind", kind.display_name())
                .with_detail("field", source.field()),
            CodecError::Shape { kind, .. } => domain.with_detail("kind", kind.display_name()),
            CodecError::Syntax { format, .. } | CodecError::Encode { format, .. } => {
                domain.with_detail("format", format.to_string())
            }
            _ => domain,
        }
    }
}

/// Decodes and encodes interview records through a schema validator.
#[derive(Clone)]
pub struct RecordCodec {
    validator: Arc<dyn RecordSchemaValidator>,
}

impl RecordCodec {
    pub fn new(validator: Arc<dyn RecordSchemaValidator>) -> Self {
        Self { validator }
    }

    /// Decode a single record from text.
    pub fn decode<R: InterviewRecord>(
        &self,
        input: &str,
        format: RecordFormat,
    ) -> Result<R, CodecError> {
        let kind = R::KIND;
        debug!(%kind, %format, "Decoding record");
        let value = Self::parse(input, format)?;
        self.decode_value(value)
    }

    /// Decode a top-level array of records. Fails on the first bad element.
    pub fn decode_batch<R: InterviewRecord>(
        &self,
        input: &str,
        format: RecordFormat,
    ) -> Result<Vec<R>, CodecError> {
        let value = Self::parse(input, format)?;
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(CodecError::NotABatch {
                    actual: json_type_name(&other).to_string(),
                })
            }
        };

        let kind = R::KIND;
        debug!(%kind, %format, count = items.len(), "Decoding record batch");
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                self.decode_value(item).map_err(|e| CodecError::AtIndex {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }

    /// Validate and construct a record from an already-parsed value.
    pub fn decode_value<R: InterviewRecord>(&self, value: Value) -> Result<R, CodecError> {
        let kind = R::KIND;
        if let Err(source) = self.validator.validate(kind, &value) {
            warn!(
                %kind,
                violations = source.error_count(),
                "Record rejected by schema: {}",
                source
            );
            return Err(CodecError::Schema { kind, source });
        }

        let wire: R::Wire = serde_json::from_value(value).map_err(|e| {
            warn!(%kind, "Record does not match wire shape: {}", e);
            CodecError::Shape {
                kind,
                message: e.to_string(),
            }
        })?;

        R::from_wire(wire).map_err(|source| {
            warn!(%kind, field = source.field(), "Record construction failed: {}", source);
            CodecError::Construction { kind, source }
        })
    }

    /// Encode a single record.
    pub fn encode<R: InterviewRecord>(
        &self,
        record: &R,
        format: RecordFormat,
    ) -> Result<String, CodecError> {
        Self::render(record, format)
    }

    /// Encode a list of records as a top-level array.
    pub fn encode_batch<R: InterviewRecord>(
        &self,
        records: &[R],
        format: RecordFormat,
    ) -> Result<String, CodecError> {
        Self::render(&records, format)
    }

    /// Schema of a record kind, for introspection.
    pub fn schema_for(&self, kind: RecordKind) -> &Value {
        self.validator.schema_for(kind)
    }

    fn parse(input: &str, format: RecordFormat) -> Result<Value, CodecError> {
        let parsed: Result<Value, String> = match format {
            RecordFormat::Json => serde_json::from_str(input).map_err(|e| e.to_string()),
            RecordFormat::Yaml => serde_yaml::from_str(input).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| CodecError::Syntax { format, message })
    }

    fn render<T: Serialize + ?Sized>(value: &T, format: RecordFormat) -> Result<String, CodecError> {
        let rendered: Result<String, String> = match format {
            RecordFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            RecordFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| CodecError::Encode { format, message })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
