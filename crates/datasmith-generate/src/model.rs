use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default upper bound on rows per call.
pub const DEFAULT_MAX_ROWS: u64 = 100_000;

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Largest accepted `count`.
    pub max_rows: u64,
    /// Validate the field schema first and reject dangling references.
    pub strict_references: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            strict_references: false,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    /// Base seed actually used; persist it to reproduce an unseeded call.
    pub seed: String,
    /// False when the seed was generated because the caller omitted it.
    pub seeded: bool,
    pub rows_requested: u64,
    pub rows_generated: u64,
    /// Field count per kind tag.
    pub generator_usage: BTreeMap<String, u64>,
    pub fallback_fields: Vec<String>,
    pub unresolved_references: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: String, seeded: bool) -> Self {
        Self {
            run_id,
            seed,
            seeded,
            rows_requested: 0,
            rows_generated: 0,
            generator_usage: BTreeMap::new(),
            fallback_fields: Vec::new(),
            unresolved_references: 0,
            duration_ms: 0,
        }
    }

    pub fn record_generator_usage(&mut self, tag: &str) {
        *self.generator_usage.entry(tag.to_string()).or_insert(0) += 1;
    }

    pub fn record_fallback(&mut self, field_name: &str) {
        self.fallback_fields.push(field_name.to_string());
    }
}
