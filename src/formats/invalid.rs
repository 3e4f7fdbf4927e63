use super::create_output;
use crate::Result;
use crate::types::GenomicCoordinateRecord;
use std::io::Write;
use std::path::Path;

pub const INVALID_ROWS_HEADER: &str = "Invalid rows (non-numeric POS):";

/// Diagnostic listing of coordinate rows whose position did not parse.
///
/// Each row is rendered as a JSON object in sheet column order.
pub struct InvalidRowLog;

impl InvalidRowLog {
    pub fn write<W: Write>(mut writer: W, rows: &[&GenomicCoordinateRecord]) -> Result<()> {
        writeln!(writer, "{}", INVALID_ROWS_HEADER)?;
        for row in rows {
            serde_json::to_writer(&mut writer, &row.fields)?;
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_path(path: &Path, rows: &[&GenomicCoordinateRecord]) -> Result<()> {
        Self::write(create_output(path)?, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_write_rows_in_column_order() {
        let fields: IndexMap<String, String> = [
            ("variant", "rpoB_p.Ser450Leu"),
            ("position", "761155-761157"),
            ("gene", "rpoB"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let record = GenomicCoordinateRecord {
            position: "761155-761157".to_string(),
            reference_allele: "C".to_string(),
            alternative_allele: "T".to_string(),
            variant: "rpoB_p.Ser450Leu".to_string(),
            fields,
        };

        let mut buf = Vec::new();
        InvalidRowLog::write(&mut buf, &[&record]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Invalid rows (non-numeric POS):\n\
             {\"variant\":\"rpoB_p.Ser450Leu\",\"position\":\"761155-761157\",\"gene\":\"rpoB\"}\n"
        );
    }
}
