//! EPSI spectral series decoder
//!
//! HUPC exports EPSI datasets as CSV. Every numeric field of every record
//! is taken in file order, so one-sample-per-line and single-row layouts
//! decode to the same series.

use std::path::Path;

use crate::error::{ProcessingError, Result};

pub(crate) fn decode_csv<P: AsRef<Path>>(path: P) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| decode_err(path, format!("failed to open CSV: {}", e)))?;

    let mut samples = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| decode_err(path, format!("row {}: {}", row, e)))?;
        for (col, field) in record.iter().enumerate() {
            if field.is_empty() {
                continue;
            }
            let value: f32 = field.parse().map_err(|_| {
                decode_err(
                    path,
                    format!("row {}, column {}: not a number: {:?}", row, col, field),
                )
            })?;
            samples.push(value);
        }
    }

    log::debug!(
        "decoded EPSI series {}: {} samples",
        path.display(),
        samples.len()
    );

    Ok(samples)
}

fn decode_err(path: &Path, detail: String) -> ProcessingError {
    ProcessingError::Decode {
        path: path.to_path_buf(),
        detail,
    }
}
