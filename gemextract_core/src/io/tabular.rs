//! Writing extraction reports: CSV tables and a JSON summary
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::report::{Summary, TableRecord};

/// Write `rows` as a CSV file, headed by [`TableRecord::HEADER`]
///
/// An empty `rows` still produces the header line.
pub fn write_records<P: AsRef<Path>, T: TableRecord>(path: P, rows: &[T]) -> Result<(), TabularError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        writer.write_record(T::HEADER)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "wrote table");
    Ok(())
}

/// Write the run summary as pretty printed JSON
pub fn write_summary<P: AsRef<Path>>(path: P, summary: &Summary) -> Result<(), TabularError> {
    let summary_string = serde_json::to_string_pretty(summary)?;
    fs::write(path, summary_string)?;
    Ok(())
}

#[derive(Error, Debug)]
pub enum TabularError {
    #[error("Unable to write csv")]
    Csv(#[from] csv::Error),
    #[error("Unable to serialize summary")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Unable to write to file")]
    UnableToWrite(#[from] std::io::Error),
}
