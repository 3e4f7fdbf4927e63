use super::create_output;
use crate::Result;
use crate::types::Table;
use std::io::Write;
use std::path::Path;

/// Comma-separated export of a loaded sheet, header first.
pub struct TableWriter;

impl TableWriter {
    pub fn write<W: Write>(writer: W, table: &Table) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);

        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn to_path(path: &Path, table: &Table) -> Result<()> {
        Self::write(create_output(path)?, table)
    }
}
