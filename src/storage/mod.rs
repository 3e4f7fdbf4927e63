//! Storage backend abstraction for catalogue inputs and generated files.
//!
//! The pipeline only asks a [`Storage`] where things live and for the loaded
//! sheets, so the on-disk layout stays in one place.
//!
//! # Implementations
//!
//! - [`LocalStorage`] - sheet CSV exports in a local catalogue directory
//!
//! # Example
//!
//! ```no_run
//! use tbdrcat::storage::{Artifact, LocalStorage, Sheet, Storage};
//! use std::path::PathBuf;
//!
//! let storage = LocalStorage::new(PathBuf::from("database/omsCatalog"));
//! let coordinates = storage.read_sheet(Sheet::GenomicCoordinates)?;
//! println!("{} rows -> {:?}", coordinates.len(), storage.artifact_path(Artifact::Bed));
//! # Ok::<(), tbdrcat::Error>(())
//! ```

mod local;

pub use local::LocalStorage;

use crate::{Result, types::Table};
use std::path::{Path, PathBuf};

/// Sheets of the catalogue workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sheet {
    GenomicCoordinates,
    MasterFile,
}

impl Sheet {
    pub fn name(&self) -> &'static str {
        match self {
            Sheet::GenomicCoordinates => "Genomic_coordinates",
            Sheet::MasterFile => "Catalogue_master_file",
        }
    }
}

/// Files produced by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Bed,
    GenomicCoordinates,
    MasterFile,
    Resistance,
    InvalidRows,
}

impl Artifact {
    /// Outputs whose joint presence means a run has nothing to do.
    pub const REQUIRED: [Artifact; 4] = [
        Artifact::Bed,
        Artifact::GenomicCoordinates,
        Artifact::MasterFile,
        Artifact::Resistance,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Bed => "tbdr.bed",
            Artifact::GenomicCoordinates => "tbdr_genomic_coordinates.csv",
            Artifact::MasterFile => "tbdr_catalogue_master_file.csv",
            Artifact::Resistance => "tbdrR.csv",
            Artifact::InvalidRows => "invalid_rows.log",
        }
    }
}

/// Storage backend trait for catalogue sheets and run outputs
pub trait Storage {
    /// Location holding the sheet exports
    fn catalog_dir(&self) -> &Path;

    /// Check that the catalogue location itself exists
    fn catalog_exists(&self) -> bool {
        self.catalog_dir().is_dir()
    }

    /// Location of a sheet export
    fn sheet_path(&self, sheet: Sheet) -> PathBuf;

    /// Check if a sheet export exists
    fn sheet_exists(&self, sheet: Sheet) -> bool {
        self.sheet_path(sheet).is_file()
    }

    /// Load a whole sheet into memory
    fn read_sheet(&self, sheet: Sheet) -> Result<Table>;

    /// Where an output file is written
    fn artifact_path(&self, artifact: Artifact) -> PathBuf;

    fn artifact_exists(&self, artifact: Artifact) -> bool {
        self.artifact_path(artifact).is_file()
    }
}
