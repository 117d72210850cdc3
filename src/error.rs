use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while reading the titles file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row lacks one or more required columns.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The CSV stream itself is malformed (bad UTF-8, I/O failure mid-read).
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}
