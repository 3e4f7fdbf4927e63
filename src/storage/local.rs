use super::{Artifact, Sheet, Storage};
use crate::{Config, Result, types::Table};
use std::path::{Path, PathBuf};

const BOM: char = '\u{feff}';

pub struct LocalStorage {
    catalog_dir: PathBuf,
    output_dir: PathBuf,
    genomic_sheet: String,
    master_sheet: String,
    master_header_row: usize,
}

impl LocalStorage {
    pub fn new(catalog_dir: PathBuf) -> Self {
        Self {
            output_dir: catalog_dir.clone(),
            catalog_dir,
            genomic_sheet: "Genomic_coordinates.csv".to_string(),
            master_sheet: "Catalogue_master_file.csv".to_string(),
            master_header_row: 2,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            catalog_dir: config.catalog_dir.clone(),
            output_dir: config.output_dir().to_path_buf(),
            genomic_sheet: config.genomic_sheet.clone(),
            master_sheet: config.master_sheet.clone(),
            master_header_row: config.master_header_row,
        }
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_master_header_row(mut self, row: usize) -> Self {
        self.master_header_row = row;
        self
    }

    /// Rows above the header line for a sheet
    fn header_row(&self, sheet: Sheet) -> usize {
        match sheet {
            Sheet::GenomicCoordinates => 0,
            Sheet::MasterFile => self.master_header_row,
        }
    }
}

impl Storage for LocalStorage {
    fn catalog_dir(&self) -> &Path {
        &self.catalog_dir
    }

    fn sheet_path(&self, sheet: Sheet) -> PathBuf {
        let file = match sheet {
            Sheet::GenomicCoordinates => &self.genomic_sheet,
            Sheet::MasterFile => &self.master_sheet,
        };
        self.catalog_dir.join(file)
    }

    fn read_sheet(&self, sheet: Sheet) -> Result<Table> {
        let path = self.sheet_path(sheet);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut records = reader.records().skip(self.header_row(sheet));

        let headers: Vec<String> = match records.next() {
            Some(header) => header?
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    if i == 0 {
                        h.trim_start_matches(BOM).to_string()
                    } else {
                        h.to_string()
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        let rows = records
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<std::result::Result<Vec<Vec<String>>, csv::Error>>()?;

        tracing::debug!("loaded {} rows from {:?}", rows.len(), path);
        Ok(Table::new(sheet.name(), headers, rows))
    }

    fn artifact_path(&self, artifact: Artifact) -> PathBuf {
        self.output_dir.join(artifact.file_name())
    }
}
