use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "tbdrcat")]
#[command(about = "Derive BED intervals and resistance annotations from the WHO TB-DR catalogue")]
pub struct Config {
    /// Directory holding the catalogue sheet exports
    #[arg(long, env = "TBDR_CATALOG_DIR", default_value = "database/omsCatalog")]
    pub catalog_dir: PathBuf,

    /// CSV export of the genomic coordinates sheet
    #[arg(long, env = "TBDR_GENOMIC_SHEET", default_value = "Genomic_coordinates.csv")]
    pub genomic_sheet: String,

    /// CSV export of the catalogue master sheet
    #[arg(long, env = "TBDR_MASTER_SHEET", default_value = "Catalogue_master_file.csv")]
    pub master_sheet: String,

    /// Number of preamble rows above the master sheet header
    #[arg(long, env = "TBDR_MASTER_HEADER_ROW", default_value = "2")]
    pub master_header_row: usize,

    /// Reference sequence name written to the BED file
    #[arg(long, env = "TBDR_REFERENCE_NAME", default_value = "NC_000962.3")]
    pub reference_name: String,

    /// Directory for generated files (defaults to the catalogue directory)
    #[arg(long, env = "TBDR_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Shift BED starts by -1 to 0-based coordinates
    #[arg(long, env = "TBDR_ZERO_BASED", default_value = "false")]
    pub zero_based: bool,

    /// Regenerate outputs even if all of them already exist
    #[arg(long, env = "TBDR_FORCE", default_value = "false")]
    pub force: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Configuration rooted at `catalog_dir` with every other option at its default.
    pub fn with_catalog_dir(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
            genomic_sheet: "Genomic_coordinates.csv".to_string(),
            master_sheet: "Catalogue_master_file.csv".to_string(),
            master_header_row: 2,
            reference_name: "NC_000962.3".to_string(),
            output_dir: None,
            zero_based: false,
            force: false,
            log_level: "info".to_string(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.catalog_dir)
    }
}
