use super::create_output;
use crate::Result;
use crate::types::PositionAnnotation;
use std::io::Write;
use std::path::Path;

/// `POS,resistance` export. Annotation text is written verbatim, without
/// quoting.
pub struct ResistanceWriter;

impl ResistanceWriter {
    pub fn write<W: Write>(writer: W, annotations: &[PositionAnnotation]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);

        if annotations.is_empty() {
            writer.write_record(["POS", "resistance"])?;
        }
        for annotation in annotations {
            writer.serialize(annotation)?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn to_path(path: &Path, annotations: &[PositionAnnotation]) -> Result<()> {
        Self::write(create_output(path)?, annotations)
    }
}
