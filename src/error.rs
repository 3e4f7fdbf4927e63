use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("catalogue directory missing: {}", .0.display())]
    CatalogDirMissing(PathBuf),

    #[error("catalogue sheet missing: {}", .0.display())]
    SheetMissing(PathBuf),

    #[error("sheet {sheet} has no '{column}' column")]
    MissingColumn { sheet: String, column: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
