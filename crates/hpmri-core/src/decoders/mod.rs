//! Acquisition file decoders
//!
//! DICOM for image slices, CSV for EPSI spectral series. Dispatch is by
//! file extension; the per-magnet file-naming conventions live in the
//! magnet adapters, not here.

mod dicom;
mod epsi;


use std::path::Path;

use crate::error::{ProcessingError, Result};

/// Decoded acquisition slice
#[derive(Debug, Clone)]
pub struct SliceImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Row-major raw intensities, exactly as stored by the scanner
    pub data: Vec<f32>,
}

/// Decode an image slice from a file path. Dispatch by extension.
pub fn decode_slice<P: AsRef<Path>>(path: P) -> Result<SliceImage> {
    let path = path.as_ref();
    match extension_of(path)?.as_str() {
        "dcm" | "dicom" => dicom::decode_dicom(path),
        other => Err(ProcessingError::Decode {
            path: path.to_path_buf(),
            detail: format!("unsupported acquisition format: {}", other),
        }),
    }
}

/// Decode a spectral series from a file path. Dispatch by extension.
pub fn decode_spectrum<P: AsRef<Path>>(path: P) -> Result<Vec<f32>> {
    let path = path.as_ref();
    match extension_of(path)?.as_str() {
        "csv" => epsi::decode_csv(path),
        other => Err(ProcessingError::Decode {
            path: path.to_path_buf(),
            detail: format!("unsupported spectral format: {}", other),
        }),
    }
}

fn extension_of(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| ProcessingError::Decode {
            path: path.to_path_buf(),
            detail: "no file extension".to_string(),
        })
}
