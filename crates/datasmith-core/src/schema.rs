use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::request::GenerationRequest;

/// Emit the JSON Schema for request documents.
pub fn request_json_schema() -> RootSchema {
    schema_for!(GenerationRequest)
}
