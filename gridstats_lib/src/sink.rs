//! CSV persistence for collected batches.

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::collect::BatchResult;

/// How to treat an existing file at the target path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WriteMode {
    /// Truncate and write header plus rows.
    Overwrite,
    /// Add rows to the end; the header is written only when the file is
    /// missing or empty.
    Append,
}

/// Errors that can occur when writing a batch to disk.
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    /// The batch established no schema; there is nothing to write.
    #[error("batch is empty, nothing to persist")]
    EmptyBatch,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the batch to `path` as CSV.
///
/// Failures leave the in-memory batch untouched so the caller can retry
/// with a different path or mode.
pub fn persist(batch: &BatchResult, path: &Path, mode: WriteMode) -> Result<(), PersistError> {
    if batch.schema.is_empty() {
        return Err(PersistError::EmptyBatch);
    }

    let (file, write_header) = match mode {
        WriteMode::Overwrite => (File::create(path)?, true),
        WriteMode::Append => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let has_content = file.metadata()?.len() > 0;
            (file, !has_content)
        }
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if write_header {
        writer.write_record(&batch.schema)?;
    }
    for record in &batch.records {
        writer.write_record(&record.values)?;
    }
    writer.flush()?;

    tracing::debug!("wrote {} rows to {}", batch.records.len(), path.display());
    Ok(())
}
