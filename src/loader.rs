use crate::error::LoadError;
use crate::types::RawTitle;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns the analysis reads. Other columns in the file are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "type",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "listed_in",
    "rating",
];

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub columns: usize,
}

pub fn load_titles(path: &Path) -> Result<(Vec<RawTitle>, LoadReport), LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "reading titles file");
    load_titles_from_reader(file)
}

pub fn load_titles_from_reader<R: Read>(reader: R) -> Result<(Vec<RawTitle>, LoadReport), LoadError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut rows: Vec<RawTitle> = Vec::new();
    for result in rdr.deserialize::<RawTitle>() {
        rows.push(result?);
    }

    let report = LoadReport {
        total_rows: rows.len(),
        columns: headers.len(),
    };
    tracing::info!(rows = report.total_rows, columns = report.columns, "titles loaded");
    Ok((rows, report))
}
