//! Core contracts for Datasmith.
//!
//! This crate defines the field schema consumed by the generation engine, the
//! request envelope, and the upstream validator that checks a schema before
//! any rows are produced.

pub mod error;
pub mod field;
pub mod request;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use field::{FieldDefinition, FieldKind, FieldOptions};
pub use request::{GenerationRequest, SeedInput};
pub use schema::request_json_schema;
pub use validation::{
    IssueSeverity, ValidationIssue, ValidationReport, validate_fields, validate_request_json,
};
