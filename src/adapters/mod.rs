//! Adapters - Implementations of port interfaces.
//!
//! - `validation` - Schema validation of untyped record values

pub mod validation;

pub use validation::JsonSchemaValidator;
