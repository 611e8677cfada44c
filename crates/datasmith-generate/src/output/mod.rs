//! Export formatters for generated rows.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use datasmith_core::FieldDefinition;

use crate::errors::GenerationError;
use crate::row::Row;

pub mod csv;
pub mod json;
pub mod sql;

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::sql::write_sql;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Sql,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Sql => "sql",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "sql" => Ok(ExportFormat::Sql),
            other => Err(GenerationError::InvalidRequest(format!(
                "unsupported export format '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write rows in `format`; `table` names the target of SQL inserts.
pub fn write_rows<W: Write>(
    format: ExportFormat,
    writer: W,
    table: &str,
    fields: &[FieldDefinition],
    rows: &[Row],
) -> Result<u64, GenerationError> {
    match format {
        ExportFormat::Csv => write_csv(writer, fields, rows),
        ExportFormat::Json => write_json(writer, fields, rows),
        ExportFormat::Sql => write_sql(writer, table, fields, rows),
    }
}
