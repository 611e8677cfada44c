use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::field::FieldDefinition;

/// Caller-supplied seed; numbers are coerced to their decimal string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SeedInput {
    Text(String),
    Number(serde_json::Number),
}

impl SeedInput {
    /// Seed as the string every derived key is built from.
    pub fn as_seed_string(&self) -> String {
        match self {
            SeedInput::Text(value) => value.clone(),
            SeedInput::Number(value) => value.to_string(),
        }
    }
}

impl From<&str> for SeedInput {
    fn from(value: &str) -> Self {
        SeedInput::Text(value.to_string())
    }
}

impl From<String> for SeedInput {
    fn from(value: String) -> Self {
        SeedInput::Text(value)
    }
}

impl From<u64> for SeedInput {
    fn from(value: u64) -> Self {
        SeedInput::Number(value.into())
    }
}

impl fmt::Display for SeedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_seed_string())
    }
}

/// A single generation call: ordered fields, row count and optional seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// Ordered field schema.
    pub fields: Vec<FieldDefinition>,
    /// Number of rows to generate.
    pub count: u64,
    /// Seed for reproducibility; omitted means a fresh random seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedInput>,
}

impl GenerationRequest {
    pub fn new(fields: Vec<FieldDefinition>, count: u64) -> Self {
        Self {
            fields,
            count,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<SeedInput>) -> Self {
        self.seed = Some(seed.into());
        self
    }
}
