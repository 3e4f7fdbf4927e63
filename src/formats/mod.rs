//! Writers for the files a run produces.
//!
//! Each writer works on any [`std::io::Write`] and has a `to_path` helper
//! that creates parent directories and truncates the target.
//!
//! # Writers
//!
//! - [`BedWriter`] - tab-separated `chrom start end`, no header
//! - [`TableWriter`] - passthrough sheet export, comma-separated with header
//! - [`ResistanceWriter`] - `POS,resistance` annotations
//! - [`InvalidRowLog`] - rejected coordinate rows, one JSON object per line

mod bed;
mod invalid;
mod resistance;
mod table;

pub use bed::BedWriter;
pub use invalid::InvalidRowLog;
pub use resistance::ResistanceWriter;
pub use table::TableWriter;

use crate::Result;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Open `path` for writing, creating missing parent directories.
pub(crate) fn create_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}
