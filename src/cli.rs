//! Command line surface: validate record files and print schemas.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::adapters::JsonSchemaValidator;
use crate::application::{CodecError, InterviewRecord, RecordCodec, RecordFormat};
use crate::config::AppConfig;
use crate::domain::foundation::{DomainError, ErrorCode, RecordKind};
use crate::domain::interview::{InterviewFeedback, InterviewQuestion};

#[derive(Debug, Parser)]
#[command(name = "interview-records")]
#[command(about = "Validate interview question and feedback records")]
pub struct InterviewRecordsCli {
    #[command(subcommand)]
    pub command: RecordCommand,
}

#[derive(Debug, Subcommand)]
pub enum RecordCommand {
    /// Validate a record file and print the normalized record(s)
    Validate {
        kind: KindArg,
        /// File to read, or `-` for stdin
        path: PathBuf,
        /// Expect a top-level array of records
        #[arg(long)]
        batch: bool,
        /// Input format; inferred from the file extension when omitted
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Accept fields outside the record schema
        #[arg(long)]
        allow_unknown_fields: bool,
    },
    /// Print the JSON Schema of a record kind
    Schema { kind: KindArg },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Question,
    Feedback,
}

impl From<KindArg> for RecordKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Question => RecordKind::Question,
            KindArg::Feedback => RecordKind::Feedback,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for RecordFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => RecordFormat::Json,
            FormatArg::Yaml => RecordFormat::Yaml,
        }
    }
}

/// Runs a command and returns the text to print on stdout.
pub fn handle_command(cli: InterviewRecordsCli, config: &AppConfig) -> Result<String, DomainError> {
    match cli.command {
        RecordCommand::Validate {
            kind,
            path,
            batch,
            format,
            allow_unknown_fields,
        } => {
            let format = resolve_format(format, &path, config);
            let input = read_input(&path)?;
            let validator = JsonSchemaValidator::new().with_reject_unknown_fields(
                config.validation.reject_unknown_fields && !allow_unknown_fields,
            );
            let codec = RecordCodec::new(Arc::new(validator));

            let record_kind = RecordKind::from(kind);
            let (output, count) = match record_kind {
                RecordKind::Question => {
                    normalize::<InterviewQuestion>(&codec, &input, format, batch)?
                }
                RecordKind::Feedback => {
                    normalize::<InterviewFeedback>(&codec, &input, format, batch)?
                }
            };
            info!(kind = %record_kind, count, path = %path.display(), "Records valid");
            Ok(output)
        }
        RecordCommand::Schema { kind } => {
            let codec = RecordCodec::new(Arc::new(JsonSchemaValidator::new()));
            serde_json::to_string_pretty(codec.schema_for(kind.into()))
                .map_err(|e| DomainError::new(ErrorCode::EncodeFailed, e.to_string()))
        }
    }
}

fn resolve_format(explicit: Option<FormatArg>, path: &Path, config: &AppConfig) -> RecordFormat {
    explicit
        .map(RecordFormat::from)
        .or_else(|| RecordFormat::from_path(path))
        .unwrap_or(config.validation.default_format)
}

fn read_input(path: &Path) -> Result<String, DomainError> {
    let result = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };

    result.map_err(|e| {
        DomainError::new(
            ErrorCode::IoError,
            format!("Failed to read {}: {}", path.display(), e),
        )
        .with_detail("path", path.display().to_string())
    })
}

fn normalize<R: InterviewRecord>(
    codec: &RecordCodec,
    input: &str,
    format: RecordFormat,
    batch: bool,
) -> Result<(String, usize), CodecError> {
    if batch {
        let records: Vec<R> = codec.decode_batch(input, format)?;
        Ok((codec.encode_batch(&records, format)?, records.len()))
    } else {
        let record: R = codec.decode(input, format)?;
        Ok((codec.encode(&record, format)?, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn validate(kind: KindArg, path: &Path, batch: bool) -> RecordCommand {
        RecordCommand::Validate {
            kind,
            path: path.to_path_buf(),
            batch,
            format: None,
            allow_unknown_fields: false,
        }
    }

    fn run(command: RecordCommand) -> Result<String, DomainError> {
        handle_command(InterviewRecordsCli { command }, &AppConfig::default())
    }

    #[test]
    fn cli_parses_validate_arguments() {
        let cli = InterviewRecordsCli::try_parse_from([
            "interview-records",
            "validate",
            "feedback",
            "fb.yaml",
            "--batch",
            "--format",
            "yaml",
        ])
        .unwrap();

        match cli.command {
            RecordCommand::Validate { kind, batch, format, .. } => {
                assert_eq!(kind, KindArg::Feedback);
                assert!(batch);
                assert_eq!(format, Some(FormatArg::Yaml));
            }
            other => panic!("Expected Validate, got {:?}", other),
        }
    }

    #[test]
    fn cli_rejects_unknown_kind() {
        assert!(InterviewRecordsCli::try_parse_from(["interview-records", "schema", "answer"]).is_err());
    }

    #[test]
    fn resolve_format_prefers_flag_then_extension_then_config() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_format(Some(FormatArg::Yaml), Path::new("a.json"), &config),
            RecordFormat::Yaml
        );
        assert_eq!(resolve_format(None, Path::new("a.yml"), &config), RecordFormat::Yaml);
        assert_eq!(resolve_format(None, Path::new("a.txt"), &config), RecordFormat::Json);
    }

    #[test]
    fn validate_question_file_prints_normalized_json() {
        let file = write_temp(
            ".json",
            r#"{"question": "Explain how a hash map resolves collisions.", "type": "Technical"}"#,
        );

        let output = run(validate(KindArg::Question, file.path(), false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["type"], "Technical");
    }

    #[test]
    fn validate_feedback_batch_from_yaml() {
        let file = write_temp(
            ".yaml",
            "- strengths: Clear structure\n  improvements: Needs more depth\n  suggestions: Add examples\n  scores: { relevance: 8, clarity: 7, depth: 6 }\n",
        );

        let output = run(validate(KindArg::Feedback, file.path(), true)).unwrap();
        assert!(output.contains("strengths: Clear structure"));
    }

    #[test]
    fn validate_reports_schema_violation() {
        let file = write_temp(".json", r#"{"type": "Coding", "question": "Reverse a list."}"#);

        let err = run(validate(KindArg::Question, file.path(), false)).unwrap_err();
        assert_eq!(err.code, ErrorCode::SchemaViolation);
    }

    #[test]
    fn validate_unknown_fields_follow_flag() {
        let file = write_temp(".json", r#"{"type": "HR", "question": "Why us?", "id": 3}"#);

        assert!(run(validate(KindArg::Question, file.path(), false)).is_err());
        let lenient = RecordCommand::Validate {
            kind: KindArg::Question,
            path: file.path().to_path_buf(),
            batch: false,
            format: None,
            allow_unknown_fields: true,
        };
        let output = run(lenient).unwrap();
        assert!(!output.contains("\"id\""));
    }

    #[test]
    fn validate_missing_file_is_io_error() {
        let err = run(validate(
            KindArg::Question,
            Path::new("/nonexistent/interview-question.json"),
            false,
        ))
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::IoError);
    }

    #[test]
    fn schema_command_prints_record_schema() {
        let output = run(RecordCommand::Schema {
            kind: KindArg::Feedback,
        })
        .unwrap();
        let schema: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(schema["title"], "InterviewFeedback");
    }
}
