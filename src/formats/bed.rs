use super::create_output;
use crate::Result;
use crate::types::Interval;
use std::io::Write;
use std::path::Path;

pub struct BedWriter;

impl BedWriter {
    /// Write intervals as BED3. With `zero_based` every start is shifted
    /// one base left; otherwise starts are written as stored. An interval
    /// whose shifted start would underflow is skipped with a warning.
    pub fn write<W: Write>(writer: W, intervals: &[Interval], zero_based: bool) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(writer);

        for interval in intervals {
            if zero_based {
                let Some(shifted) = interval.to_zero_based() else {
                    tracing::warn!("interval at {} cannot be shifted, skipping", interval.start);
                    continue;
                };
                writer.serialize(shifted)?;
            } else {
                writer.serialize(interval)?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    pub fn to_path(path: &Path, intervals: &[Interval], zero_based: bool) -> Result<()> {
        Self::write(create_output(path)?, intervals, zero_based)
    }
}
