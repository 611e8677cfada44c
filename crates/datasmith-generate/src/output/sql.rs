use std::io::Write;

use datasmith_core::FieldDefinition;

use crate::errors::GenerationError;
use crate::generators::GeneratedValue;
use crate::output::csv::CountingWriter;
use crate::row::Row;

/// Write one `INSERT` statement per row.
pub fn write_sql<W: Write>(
    writer: W,
    table: &str,
    fields: &[FieldDefinition],
    rows: &[Row],
) -> Result<u64, GenerationError> {
    let mut counting = CountingWriter::new(writer);
    let columns = fields
        .iter()
        .map(|field| quote_identifier(&field.name))
        .collect::<Vec<_>>()
        .join(", ");
    let table = quote_identifier(table);

    for row in rows {
        let values = fields
            .iter()
            .map(|field| sql_literal(row.get(&field.name).unwrap_or(&GeneratedValue::Null)))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(counting, "INSERT INTO {table} ({columns}) VALUES ({values});")?;
    }

    counting.flush()?;
    Ok(counting.bytes_written())
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn sql_literal(value: &GeneratedValue) -> String {
    match value {
        GeneratedValue::Null => "NULL".to_string(),
        GeneratedValue::Bool(value) => if *value { "TRUE" } else { "FALSE" }.to_string(),
        GeneratedValue::Int(value) => value.to_string(),
        GeneratedValue::Float(value) if value.is_finite() => value.to_string(),
        GeneratedValue::Float(_) => "NULL".to_string(),
        GeneratedValue::Text(value) => format!("'{}'", value.replace('\'', "''")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes() {
        assert_eq!(
            sql_literal(&GeneratedValue::Text("O'Brien".to_string())),
            "'O''Brien'"
        );
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
        assert_eq!(sql_literal(&GeneratedValue::Null), "NULL");
    }
}
