//! Ports - interfaces the application layer depends on.
//!
//! Adapters in `crate::adapters` provide the implementations.

mod schema_validator;

pub use schema_validator::{RecordSchemaValidator, SchemaValidationError};
