//! Seed derivation.
//!
//! Every draw is keyed by `"{base}:{field_id}:{row_index}"`, optionally
//! suffixed with `":{variant}"` when one field needs several independent
//! draws. Keys depend on the row index and never on the requested row
//! count, so a longer generation always starts with the rows of a shorter
//! one.

use std::fmt;

use datasmith_core::SeedInput;

const ANCHOR_SLOT: &str = "anchor";

/// Fully derived key handed to the seeded-value provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeedKey(String);

impl SeedKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-field, per-row seed coordinates, passed by value into generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedContext<'a> {
    pub base: &'a str,
    pub field_id: &'a str,
    pub row_index: u64,
}

impl<'a> SeedContext<'a> {
    pub fn new(base: &'a str, field_id: &'a str, row_index: u64) -> Self {
        Self {
            base,
            field_id,
            row_index,
        }
    }

    /// Primary key for this field and row.
    pub fn key(&self) -> SeedKey {
        SeedKey(format!("{}:{}:{}", self.base, self.field_id, self.row_index))
    }

    /// Independent key for an additional draw within the same field and row.
    pub fn variant(&self, variant: &str) -> SeedKey {
        SeedKey(format!(
            "{}:{}:{}:{variant}",
            self.base, self.field_id, self.row_index
        ))
    }
}

/// Row-independent key used once per field to derive its date anchor.
pub fn anchor_key(base: &str, field_id: &str) -> SeedKey {
    SeedKey(format!("{base}:{field_id}:{ANCHOR_SLOT}"))
}

/// Resolve the base seed for a call.
///
/// Without a caller seed a fresh UUID is used, which makes the call
/// intentionally non-reproducible.
pub fn resolve_base_seed(seed: Option<&SeedInput>) -> String {
    match seed {
        Some(seed) => seed.as_seed_string(),
        None => uuid::Uuid::new_v4().to_string(),
    }
}
