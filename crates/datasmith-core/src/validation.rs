use std::collections::{BTreeMap, BTreeSet};

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::field::{FieldDefinition, FieldKind};

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with location and hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
    pub hint: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue.
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
            hint,
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Collapse errors into a single [`Error::InvalidSchema`], if any.
    pub fn into_result(self) -> Result<Vec<ValidationIssue>> {
        if self.is_ok() {
            return Ok(self.warnings);
        }
        let message = self
            .errors
            .iter()
            .map(|issue| format!("{} ({})", issue.message, issue.path))
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::InvalidSchema(message))
    }
}

/// Validate a request document against the request JSON Schema.
pub fn validate_request_json(request_json: &Value, request_schema: &Value) -> Result<ValidationReport> {
    let compiled =
        JSONSchema::compile(request_schema).map_err(|err| Error::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(request_json) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                path,
                error.to_string(),
                None,
            ));
        }
    }

    Ok(report)
}

/// Validate a field schema before generation.
///
/// Errors:
/// - empty or duplicate field ids and names
/// - reference fields without a source, pointing at themselves, or at a
///   field that does not exist
///
/// Warnings cover inputs the engine tolerates but probably did not intend:
/// unknown kinds, inverted ranges and empty custom lists.
pub fn validate_fields(fields: &[FieldDefinition]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut ids = BTreeSet::new();
    let mut names: BTreeMap<&str, usize> = BTreeMap::new();

    for (idx, field) in fields.iter().enumerate() {
        if field.id.trim().is_empty() {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "empty_field_id",
                format!("/fields/{idx}/id"),
                "field id must not be empty",
                Some("ids drive seed derivation; keep them stable".to_string()),
            ));
        } else if !ids.insert(field.id.as_str()) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "duplicate_field_id",
                format!("/fields/{idx}/id"),
                format!("duplicate field id '{}'", field.id),
                None,
            ));
        }

        if field.name.trim().is_empty() {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "empty_field_name",
                format!("/fields/{idx}/name"),
                "field name must not be empty",
                None,
            ));
        } else if let Some(first) = names.insert(field.name.as_str(), idx) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "duplicate_field_name",
                format!("/fields/{idx}/name"),
                format!(
                    "field name '{}' already used by /fields/{first}",
                    field.name
                ),
                None,
            ));
        }
    }

    for (idx, field) in fields.iter().enumerate() {
        let kind = field.field_kind();
        match &kind {
            FieldKind::Reference => validate_reference(idx, field, fields, &mut report),
            FieldKind::Unknown(tag) => report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "unknown_kind",
                format!("/fields/{idx}/type"),
                format!("unknown field type '{tag}'; values will use the fallback generator"),
                None,
            )),
            FieldKind::AiGenerated => report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "fallback_kind",
                format!("/fields/{idx}/type"),
                format!("field '{}' has no deterministic generator", field.name),
                Some("provide options.examples to keep values on-topic".to_string()),
            )),
            FieldKind::CustomList
                if list_is_empty(field.option_entry("values"))
                    && list_is_empty(field.option_entry("list")) =>
            {
                report.push_warning(ValidationIssue::new(
                    IssueSeverity::Warning,
                    "empty_custom_list",
                    format!("/fields/{idx}/options/values"),
                    format!("custom list for '{}' has no usable entries", field.name),
                    None,
                ))
            }
            _ => {}
        }

        for (min_key, max_key) in RANGE_KEYS {
            check_range(idx, field, min_key, max_key, &mut report);
        }
    }

    report
}

const RANGE_KEYS: &[(&str, &str)] = &[("min", "max"), ("minAge", "maxAge")];

fn validate_reference(
    idx: usize,
    field: &FieldDefinition,
    fields: &[FieldDefinition],
    report: &mut ValidationReport,
) {
    let path = format!("/fields/{idx}/options/sourceField");
    let Some(source) = field.reference_source() else {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "reference_missing_source",
            path,
            format!("reference field '{}' has no sourceField", field.name),
            None,
        ));
        return;
    };

    if source == field.name {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "reference_self",
            path,
            format!("reference field '{}' points at itself", field.name),
            None,
        ));
        return;
    }

    match fields.iter().position(|candidate| candidate.name == source) {
        None => report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "reference_source_not_found",
            path,
            format!(
                "reference field '{}' points at unknown field '{source}'",
                field.name
            ),
            None,
        )),
        Some(source_idx) => {
            if fields[source_idx].field_kind().is_reference() && source_idx > idx {
                report.push_warning(ValidationIssue::new(
                    IssueSeverity::Warning,
                    "reference_forward_chain",
                    path,
                    format!(
                        "reference field '{}' reads reference '{source}' declared after it",
                        field.name
                    ),
                    Some("declare chained references in dependency order".to_string()),
                ));
            }
        }
    }
}

fn check_range(
    idx: usize,
    field: &FieldDefinition,
    min_key: &str,
    max_key: &str,
    report: &mut ValidationReport,
) {
    let (Some((min_key, min)), Some((max_key, max))) =
        (field.option_entry(min_key), field.option_entry(max_key))
    else {
        return;
    };
    let inverted = match (as_number(min), as_number(max)) {
        (Some(min), Some(max)) => min > max,
        _ => match (min.as_str(), max.as_str()) {
            (Some(min), Some(max)) => !min.is_empty() && !max.is_empty() && min > max,
            _ => false,
        },
    };
    if inverted {
        report.push_warning(ValidationIssue::new(
            IssueSeverity::Warning,
            "inverted_range",
            format!("/fields/{idx}/options/{min_key}"),
            format!(
                "field '{}' has {min_key} > {max_key}; the bounds will be swapped",
                field.name
            ),
            None,
        ));
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn list_is_empty(entry: Option<(&str, &Value)>) -> bool {
    match entry.map(|(_, value)| value) {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.split(',').all(|item| item.trim().is_empty()),
        Some(Value::Array(items)) => items.iter().all(|item| match item {
            Value::String(text) => text.trim().is_empty(),
            Value::Null => true,
            _ => false,
        }),
        Some(_) => false,
    }
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
