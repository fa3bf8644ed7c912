//! Validation Adapters - Schema validation implementations.
//!
//! Contains adapters for validating interview record values against JSON Schemas.

mod json_schema_validator;

pub use json_schema_validator::JsonSchemaValidator;
