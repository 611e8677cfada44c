use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use datasmith_core::FieldDefinition;

use crate::errors::GenerationError;
use crate::generators::GeneratedValue;
use crate::output::csv::CountingWriter;
use crate::row::Row;

/// A row projected onto the field list; keys are emitted in field order.
struct Record<'a> {
    fields: &'a [FieldDefinition],
    row: &'a Row,
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in self.fields {
            let value = self.row.get(&field.name).unwrap_or(&GeneratedValue::Null);
            map.serialize_entry(&field.name, value)?;
        }
        map.end()
    }
}

/// Write rows as a pretty-printed JSON array of objects in field order.
pub fn write_json<W: Write>(
    writer: W,
    fields: &[FieldDefinition],
    rows: &[Row],
) -> Result<u64, GenerationError> {
    let records: Vec<Record<'_>> = rows.iter().map(|row| Record { fields, row }).collect();

    let mut counting = CountingWriter::new(writer);
    serde_json::to_writer_pretty(&mut counting, &records)?;
    counting.write_all(b"\n")?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_fields_not_alphabet() {
        let fields = vec![
            FieldDefinition::new("f-z", "zeta", "Number"),
            FieldDefinition::new("f-a", "alpha", "Boolean"),
            FieldDefinition::new("f-m", "mid", "Text"),
        ];
        let mut row = Row::default();
        row.insert("alpha", GeneratedValue::Bool(true));
        row.insert("zeta", GeneratedValue::Int(855));

        let mut buffer = Vec::new();
        let bytes = write_json(&mut buffer, &fields, &[row]).expect("write json");
        assert_eq!(bytes, buffer.len() as u64);

        let text = String::from_utf8(buffer).expect("utf8");
        let compact: String = text.split_whitespace().collect();
        assert_eq!(compact, r#"[{"zeta":855,"alpha":true,"mid":null}]"#);
    }
}
