use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use datasmith_core::{FieldDefinition, GenerationRequest, SeedInput, validate_fields};

use crate::errors::GenerationError;
use crate::generators::{Generator, ResolvedGenerator};
use crate::model::{GenerateOptions, GenerationReport};
use crate::provider::{FakerValues, SeededValues};
use crate::references::{ReferenceSlot, resolve_references};
use crate::row::Row;
use crate::seed::{SeedContext, resolve_base_seed};

/// Result of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub rows: Vec<Row>,
    #[serde(rename = "usedFallback")]
    pub used_fallback: bool,
    #[serde(skip)]
    pub report: GenerationReport,
}

/// Entry point for generating rows from a field schema.
#[derive(Debug, Clone)]
pub struct GenerationEngine<P = FakerValues> {
    options: GenerateOptions,
    provider: P,
}

impl GenerationEngine<FakerValues> {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            provider: FakerValues::new(),
        }
    }
}

impl Default for GenerationEngine<FakerValues> {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}

impl<P: SeededValues> GenerationEngine<P> {
    pub fn with_provider(options: GenerateOptions, provider: P) -> Self {
        Self { options, provider }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        self.generate_rows(&request.fields, request.count, request.seed.as_ref())
    }

    /// Generate `count` rows.
    ///
    /// Row `i` depends only on the fields, the base seed and `i`, so a larger
    /// `count` extends a smaller one without changing its rows.
    pub fn generate_rows(
        &self,
        fields: &[FieldDefinition],
        count: u64,
        seed: Option<&SeedInput>,
    ) -> Result<GenerationResult, GenerationError> {
        self.check_request(fields, count)?;

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let base_seed = resolve_base_seed(seed);
        let mut report = GenerationReport::new(run_id.clone(), base_seed.clone(), seed.is_some());
        report.rows_requested = count;

        info!(
            run_id = %run_id,
            fields = fields.len(),
            rows = count,
            seeded = seed.is_some(),
            strict_references = self.options.strict_references,
            "generation started"
        );

        let resolved: Vec<ResolvedGenerator> = fields
            .iter()
            .map(|field| Generator::resolve(field, &self.provider, &base_seed))
            .collect();

        let mut used_fallback = false;
        let mut slots = Vec::new();
        for (field, resolved) in fields.iter().zip(&resolved) {
            report.record_generator_usage(field.field_kind().as_tag());
            if resolved.requires_fallback {
                used_fallback = true;
                report.record_fallback(&field.name);
                warn!(
                    field = %field.name,
                    kind = %field.kind,
                    "no deterministic generator; using fallback"
                );
            }
            if let Generator::Reference { source } = &resolved.generator {
                slots.push(ReferenceSlot {
                    name: field.name.as_str(),
                    source: source.as_deref(),
                });
            }
        }

        let capacity = usize::try_from(count).unwrap_or(0);
        let mut rows = Vec::with_capacity(capacity);
        for row_index in 0..count {
            let mut row = Row::with_capacity(fields.len());
            for (field, resolved) in fields.iter().zip(&resolved) {
                let ctx = SeedContext::new(&base_seed, &field.id, row_index);
                row.insert(field.name.as_str(), resolved.generator.generate(&self.provider, ctx));
            }
            report.unresolved_references += resolve_references(&mut row, &slots);
            rows.push(row);
        }

        if report.unresolved_references > 0 {
            warn!(
                run_id = %run_id,
                unresolved = report.unresolved_references,
                "reference fields without a resolvable source were set to null"
            );
        }

        report.rows_generated = rows.len() as u64;
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            run_id = %run_id,
            rows = report.rows_generated,
            used_fallback,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            rows,
            used_fallback,
            report,
        })
    }

    fn check_request(&self, fields: &[FieldDefinition], count: u64) -> Result<(), GenerationError> {
        if fields.is_empty() {
            return Err(GenerationError::InvalidRequest(
                "at least one field is required".to_string(),
            ));
        }
        if count == 0 {
            return Err(GenerationError::InvalidRequest(
                "count must be at least 1".to_string(),
            ));
        }
        if count > self.options.max_rows {
            return Err(GenerationError::InvalidRequest(format!(
                "count {count} exceeds the limit of {} rows",
                self.options.max_rows
            )));
        }
        if self.options.strict_references {
            let warnings = validate_fields(fields).into_result()?;
            for issue in &warnings {
                debug!(code = %issue.code, path = %issue.path, "{}", issue.message);
            }
        }
        Ok(())
    }
}
