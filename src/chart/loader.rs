//! Loading app records from disk
//!
//! Supported formats:
//! - `.json`: an array of `{title, score, installs[, reviews]}` objects
//! - `.csv`: header row `title,score,installs[,reviews]`

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::error::{ChartError, ChartResult};
use super::types::AppRecord;

/// Load records from a JSON or CSV file, preserving file order
pub fn load_records(path: &Path) -> ChartResult<Vec<AppRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let records = match extension.as_deref() {
        Some("json") => records_from_json(BufReader::new(File::open(path)?))?,
        Some("csv") => records_from_csv(File::open(path)?)?,
        _ => return Err(ChartError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::info!("Loaded {} app records from {:?}", records.len(), path);
    Ok(records)
}

/// Parse a JSON array of records
pub fn records_from_json<R: Read>(reader: R) -> ChartResult<Vec<AppRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse CSV records with a header row
pub fn records_from_csv<R: Read>(reader: R) -> ChartResult<Vec<AppRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.deserialize::<AppRecord>() {
        records.push(result?);
    }
    Ok(records)
}
