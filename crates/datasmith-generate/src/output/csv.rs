use std::io::Write;

use datasmith_core::FieldDefinition;

use crate::errors::GenerationError;
use crate::row::Row;

/// Write rows as CSV with a header in field order. Returns bytes written.
pub fn write_csv<W: Write>(
    writer: W,
    fields: &[FieldDefinition],
    rows: &[Row],
) -> Result<u64, GenerationError> {
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(fields.iter().map(|field| field.name.as_str()))?;

    for row in rows {
        let record: Vec<String> = fields
            .iter()
            .map(|field| {
                row.get(&field.name)
                    .map(|value| value.to_export_string())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

pub(crate) struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    pub(crate) fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
