//! One catalogue run: load both sheets, export them, derive the BED intervals
//! and the resistance annotations, and write whatever has content.

use crate::catalog::{self, Resistance};
use crate::formats::{BedWriter, InvalidRowLog, ResistanceWriter, TableWriter};
use crate::storage::{Artifact, LocalStorage, Sheet, Storage};
use crate::types::{GenomicCoordinateRecord, MASTER_COLUMNS, MasterRecord};
use crate::{Config, Error, Result};
use std::path::PathBuf;

/// Counts and written files of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub coordinate_rows: usize,
    pub master_rows: usize,
    pub invalid_rows: usize,
    pub positions: usize,
    pub intervals: usize,
    pub annotations: usize,
    pub written: Vec<Artifact>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every required output already existed; nothing was read or written.
    Skipped(Vec<PathBuf>),
    Completed(RunSummary),
}

pub struct Pipeline {
    storage: Box<dyn Storage>,
    reference_name: String,
    zero_based: bool,
    force: bool,
}

impl Pipeline {
    pub fn new(storage: Box<dyn Storage>, reference_name: impl Into<String>) -> Self {
        Self {
            storage,
            reference_name: reference_name.into(),
            zero_based: false,
            force: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(LocalStorage::from_config(config)),
            config.reference_name.clone(),
        )
        .zero_based(config.zero_based)
        .force(config.force)
    }

    pub fn zero_based(mut self, zero_based: bool) -> Self {
        self.zero_based = zero_based;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    fn outputs_present(&self) -> bool {
        Artifact::REQUIRED
            .iter()
            .all(|&a| self.storage.artifact_exists(a))
    }

    /// Inputs are checked and fully loaded before the first file is written,
    /// so a fatal error leaves no partial outputs behind.
    pub fn run(&self) -> Result<RunOutcome> {
        if !self.force && self.outputs_present() {
            let paths = Artifact::REQUIRED
                .iter()
                .map(|&a| self.storage.artifact_path(a))
                .collect();
            return Ok(RunOutcome::Skipped(paths));
        }

        if !self.storage.catalog_exists() {
            return Err(Error::CatalogDirMissing(
                self.storage.catalog_dir().to_path_buf(),
            ));
        }
        for sheet in [Sheet::GenomicCoordinates, Sheet::MasterFile] {
            if !self.storage.sheet_exists(sheet) {
                return Err(Error::SheetMissing(self.storage.sheet_path(sheet)));
            }
        }

        let coordinates_table = self.storage.read_sheet(Sheet::GenomicCoordinates)?;
        let master_table = self
            .storage
            .read_sheet(Sheet::MasterFile)?
            .project(&MASTER_COLUMNS);
        let coordinates = GenomicCoordinateRecord::from_table(&coordinates_table)?;
        let master = MasterRecord::from_table(&master_table);

        let mut summary = RunSummary {
            coordinate_rows: coordinates.len(),
            master_rows: master.len(),
            ..RunSummary::default()
        };

        let path = self.storage.artifact_path(Artifact::GenomicCoordinates);
        TableWriter::to_path(&path, &coordinates_table)?;
        tracing::info!("Saved: {}", path.display());
        summary.written.push(Artifact::GenomicCoordinates);

        let path = self.storage.artifact_path(Artifact::MasterFile);
        TableWriter::to_path(&path, &master_table)?;
        tracing::info!("Saved: {}", path.display());
        summary.written.push(Artifact::MasterFile);

        self.write_intervals(&coordinates, &mut summary)?;
        self.write_resistance(&coordinates, &master, &mut summary)?;

        Ok(RunOutcome::Completed(summary))
    }

    fn write_intervals(
        &self,
        coordinates: &[GenomicCoordinateRecord],
        summary: &mut RunSummary,
    ) -> Result<()> {
        let normalized = catalog::normalize(coordinates);
        summary.invalid_rows = normalized.invalid.len();

        if !normalized.invalid.is_empty() {
            let path = self.storage.artifact_path(Artifact::InvalidRows);
            InvalidRowLog::to_path(&path, &normalized.invalid)?;
            tracing::warn!(
                "{} rows with non-numeric positions saved to {}",
                normalized.invalid.len(),
                path.display()
            );
            summary.written.push(Artifact::InvalidRows);
        }

        let positions = catalog::occupied_positions(&normalized.accepted);
        summary.positions = positions.len();

        let intervals = catalog::compress_positions(positions, &self.reference_name);
        if intervals.is_empty() {
            tracing::warn!("No positions to write BED.");
            return Ok(());
        }
        summary.intervals = intervals.len();

        let path = self.storage.artifact_path(Artifact::Bed);
        BedWriter::to_path(&path, &intervals, self.zero_based)?;
        tracing::info!("BED saved: {} ({} intervals)", path.display(), intervals.len());
        summary.written.push(Artifact::Bed);
        Ok(())
    }

    fn write_resistance(
        &self,
        coordinates: &[GenomicCoordinateRecord],
        master: &[MasterRecord],
        summary: &mut RunSummary,
    ) -> Result<()> {
        let annotations = match catalog::aggregate(coordinates, master) {
            Resistance::NoGradedVariants => {
                tracing::warn!("No resistance variants found.");
                return Ok(());
            }
            Resistance::NoMappedPositions => {
                tracing::warn!("No positions mapped to resistance variants.");
                return Ok(());
            }
            Resistance::Annotated(annotations) => annotations,
        };
        summary.annotations = annotations.len();

        let path = self.storage.artifact_path(Artifact::Resistance);
        ResistanceWriter::to_path(&path, &annotations)?;
        tracing::info!(
            "Resistance positions with annotations saved: {} ({} positions)",
            path.display(),
            annotations.len()
        );
        summary.written.push(Artifact::Resistance);
        Ok(())
    }
}
